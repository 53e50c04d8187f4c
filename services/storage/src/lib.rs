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

//! hubiC object storage client.
//!
//! This crate runs the OAuth2 authorization code flow against hubiC, resolves
//! the scoped storage credentials, and exposes the storage operations on top
//! of [`hubic_core::Query`].
//!
//! ## Example
//!
//! ```no_run
//! use hubic_core::Context;
//! use hubic_storage::{Config, HubicClient};
//!
//! # async fn example(ctx: Context) -> hubic_core::Result<()> {
//! let info = Config::new().from_env(&ctx).authentication_information()?;
//! let client = HubicClient::new(ctx, info).await?;
//!
//! if let Some(resp) = client.list_directory("Documents").await {
//!     println!("list returned {}", resp.code());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::{AccessToken, AuthenticationInformation};

mod oauth2;

mod provide_code;
pub use provide_code::{
    ProvideAuthorizationCode, StaticAuthorizationCode, StdinAuthorizationCode,
};

mod client;
pub use client::{HubicClient, REFRESH_FAILED};
