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

use hubic_core::utils::Redact;
use hubic_core::{Context, Result};
use log::debug;

use super::ProvideAuthorizationCode;

/// StaticAuthorizationCode always returns the same code.
///
/// Useful when the code comes from a web callback or from tests.
#[derive(Clone)]
pub struct StaticAuthorizationCode {
    code: String,
}

impl StaticAuthorizationCode {
    /// Create a new StaticAuthorizationCode.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl std::fmt::Debug for StaticAuthorizationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticAuthorizationCode")
            .field("code", &Redact::from(&self.code))
            .finish()
    }
}

#[async_trait::async_trait]
impl ProvideAuthorizationCode for StaticAuthorizationCode {
    async fn provide_code(&self, _: &Context, authorize_url: &str) -> Result<String> {
        debug!("using static authorization code instead of visiting {authorize_url}");
        Ok(self.code.clone())
    }
}
