// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! hubiC storage support with convenience APIs.

pub use hubic_storage::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Create a client with the default context and the config found in env.
///
/// Without `HUBIC_AUTHORIZATION_CODE`, the authorize url is logged and the
/// code is read from stdin.
///
/// ```no_run
/// # async fn example() -> hubic::Result<()> {
/// let client = hubic::storage::default_client().await?;
/// let info = client.get_info("/Documents").await;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub async fn default_client() -> Result<HubicClient> {
    let ctx = default_context();
    let info = Config::new().from_env(&ctx).authentication_information()?;
    HubicClient::new(ctx, info).await
}
