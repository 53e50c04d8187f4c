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

use std::fmt::{self, Debug};

use hubic_core::utils::Redact;
use hubic_core::{Context, Error, Result};

use crate::constants::*;
use crate::credential::AuthenticationInformation;

/// Config carries everything needed to authenticate against hubiC.
#[derive(Clone, Default)]
pub struct Config {
    /// OAuth2 client id.
    pub client_id: Option<String>,
    /// OAuth2 client secret.
    pub client_secret: Option<String>,
    /// Authorization code obtained out of band.
    pub code: Option<String>,
    /// Redirect url registered for the client, used to start a new flow.
    pub redirect_url: Option<String>,
    /// Requested scope, used to start a new flow.
    pub scope: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_deref().map(Redact::from),
            )
            .field("code", &self.code.as_deref().map(Redact::from))
            .field("redirect_url", &self.redirect_url)
            .field("scope", &self.scope)
            .finish()
    }
}

impl Config {
    /// Create a new config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from env, values already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let load = |field: &mut Option<String>, key: &str| {
            if field.is_none() {
                *field = ctx.env_var(key).filter(|v| !v.is_empty());
            }
        };

        load(&mut self.client_id, HUBIC_CLIENT_ID);
        load(&mut self.client_secret, HUBIC_CLIENT_SECRET);
        load(&mut self.code, HUBIC_AUTHORIZATION_CODE);
        load(&mut self.redirect_url, HUBIC_REDIRECT_URL);
        load(&mut self.scope, HUBIC_SCOPE);

        self
    }

    /// Set the client id.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the client secret.
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the authorization code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the redirect url, not yet encoded.
    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Build the [`AuthenticationInformation`] described by this config.
    ///
    /// A code takes precedence over a redirect url and scope.
    pub fn authentication_information(&self) -> Result<AuthenticationInformation> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or_else(|| Error::config_invalid("client_id is required"))?;
        let client_secret = self
            .client_secret
            .as_deref()
            .ok_or_else(|| Error::config_invalid("client_secret is required"))?;

        if let Some(code) = &self.code {
            return Ok(AuthenticationInformation::with_code(
                client_id,
                client_secret,
                code,
            ));
        }

        match (&self.redirect_url, &self.scope) {
            (Some(redirect_url), Some(scope)) => Ok(AuthenticationInformation::without_code(
                client_id,
                client_secret,
                redirect_url,
                scope,
            )),
            _ => Err(Error::config_invalid(
                "either code or both redirect_url and scope are required",
            )),
        }
    }
}
