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

use std::fmt::Debug;

use hubic_core::{Context, Result};

mod stdin;
pub use stdin::StdinAuthorizationCode;

mod static_provider;
pub use static_provider::StaticAuthorizationCode;

/// ProvideAuthorizationCode supplies an OAuth2 authorization code when the
/// client was built without one.
///
/// The user has to open `authorize_url`, log in, and hand the resulting code
/// back through whatever channel the implementation listens on.
#[async_trait::async_trait]
pub trait ProvideAuthorizationCode: Debug + Send + Sync + 'static {
    /// Return the authorization code obtained for `authorize_url`.
    async fn provide_code(&self, ctx: &Context, authorize_url: &str) -> Result<String>;
}
