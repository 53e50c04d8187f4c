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

use hubic_core::time::{after_seconds, now, DateTime};
use hubic_core::utils::Redact;

const TOKEN_TYPE: &str = "Bearer";

/// AccessToken is the OAuth2 credential returned by the token endpoint.
///
/// The value is immutable: a refresh builds a new token through
/// [`AccessToken::refreshed`] which carries the refresh token forward.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    access_token: String,
    refresh_token: String,
    expires_at: DateTime,
}

impl AccessToken {
    /// Create a new token expiring at `expires_at`.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: DateTime,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at,
        }
    }

    /// Create a new token expiring `expires_in` seconds from now.
    pub fn expiring_in(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: i64,
    ) -> Self {
        Self::new(access_token, refresh_token, after_seconds(now(), expires_in))
    }

    /// Build the token that replaces this one after a refresh.
    pub fn refreshed(&self, access_token: impl Into<String>, expires_in: i64) -> Self {
        Self::expiring_in(access_token, self.refresh_token.clone(), expires_in)
    }

    /// The bearer token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The refresh token.
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Absolute expiry instant.
    pub fn expires_at(&self) -> DateTime {
        self.expires_at
    }

    /// Value of the `Authorization` header: `Bearer <access_token>`.
    pub fn bearer(&self) -> String {
        format!("{TOKEN_TYPE} {}", self.access_token)
    }

    /// Check if the token is usable for at least two more minutes.
    ///
    /// Nothing refreshes the token automatically, callers use this to decide
    /// when to call `HubicClient::refresh_token`.
    pub fn is_valid(&self) -> bool {
        if self.access_token.is_empty() {
            return false;
        }

        after_seconds(now(), 2 * 60) < self.expires_at
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &Redact::from(&self.access_token))
            .field("refresh_token", &Redact::from(&self.refresh_token))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
enum Grant {
    Code(String),
    Authorize { redirect_url: String, scope: String },
}

/// AuthenticationInformation holds the OAuth2 client and how to get a code.
///
/// It is either built with an authorization code, to continue a flow started
/// elsewhere, or with a redirect url and a scope, to start a new flow.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthenticationInformation {
    client_id: String,
    client_secret: String,
    grant: Grant,
}

impl AuthenticationInformation {
    /// Continue a flow with an authorization code.
    pub fn with_code(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            grant: Grant::Code(code.into()),
        }
    }

    /// Start a new flow. `redirect_url` is percent-encoded here.
    pub fn without_code(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: &str,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            grant: Grant::Authorize {
                redirect_url: form_urlencoded::byte_serialize(redirect_url.as_bytes()).collect(),
                scope: scope.into(),
            },
        }
    }

    /// OAuth2 client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth2 client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Authorization code, only set when built with [`AuthenticationInformation::with_code`].
    pub fn code(&self) -> Option<&str> {
        match &self.grant {
            Grant::Code(code) => Some(code),
            Grant::Authorize { .. } => None,
        }
    }

    /// Percent-encoded redirect url, only set when built with
    /// [`AuthenticationInformation::without_code`].
    pub fn redirect_url(&self) -> Option<&str> {
        match &self.grant {
            Grant::Code(_) => None,
            Grant::Authorize { redirect_url, .. } => Some(redirect_url),
        }
    }

    /// Requested scope, only set when built with
    /// [`AuthenticationInformation::without_code`].
    pub fn scope(&self) -> Option<&str> {
        match &self.grant {
            Grant::Code(_) => None,
            Grant::Authorize { scope, .. } => Some(scope),
        }
    }
}

impl Debug for AuthenticationInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AuthenticationInformation");
        s.field("client_id", &self.client_id)
            .field("client_secret", &Redact::from(&self.client_secret));
        match &self.grant {
            Grant::Code(code) => s.field("code", &Redact::from(code)),
            Grant::Authorize {
                redirect_url,
                scope,
            } => s.field("redirect_url", redirect_url).field("scope", scope),
        };
        s.finish()
    }
}
