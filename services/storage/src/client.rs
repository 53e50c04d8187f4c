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
use std::path::Path;

use hubic_core::utils::Redact;
use hubic_core::{Context, Error, Query, Response, Result};
use log::{debug, error, warn};

use crate::constants::*;
use crate::credential::{AccessToken, AuthenticationInformation};
use crate::oauth2;
use crate::provide_code::{ProvideAuthorizationCode, StdinAuthorizationCode};

/// Returned by [`HubicClient::refresh_token`] when the refresh did not succeed.
pub const REFRESH_FAILED: i64 = -1;

/// HubicClient issues storage operations against a hubiC account.
///
/// Construction runs the whole OAuth2 flow: it exchanges the authorization
/// code for an access token, then resolves the scoped storage token and the
/// storage endpoint. Storage operations return `None` on transport failures
/// and a [`Response`] carrying the status code otherwise.
pub struct HubicClient {
    ctx: Context,
    info: AuthenticationInformation,
    access_token: AccessToken,
    storage_token: String,
    storage_endpoint: String,
}

impl Debug for HubicClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubicClient")
            .field("info", &self.info)
            .field("access_token", &self.access_token)
            .field("storage_token", &Redact::from(&self.storage_token))
            .field("storage_endpoint", &self.storage_endpoint)
            .finish()
    }
}

impl HubicClient {
    /// Create a new client.
    ///
    /// When `info` carries no authorization code, the authorize url is printed
    /// and the code is read from stdin.
    pub async fn new(ctx: Context, info: AuthenticationInformation) -> Result<Self> {
        Self::with_code_provider(ctx, info, StdinAuthorizationCode).await
    }

    /// Create a new client, asking `provider` for the authorization code when
    /// `info` carries none.
    pub async fn with_code_provider(
        ctx: Context,
        info: AuthenticationInformation,
        provider: impl ProvideAuthorizationCode,
    ) -> Result<Self> {
        Self::init(ctx, info, &provider)
            .await
            .inspect_err(|e| error!("hubic client initialization failed: {e}"))
    }

    async fn init(
        ctx: Context,
        info: AuthenticationInformation,
        provider: &dyn ProvideAuthorizationCode,
    ) -> Result<Self> {
        let info = match info.code() {
            Some(code) if !code.is_empty() => info,
            _ => {
                let url = oauth2::authorize_url(&info).ok_or_else(|| {
                    Error::config_invalid(
                        "redirect url and scope are required without an authorization code",
                    )
                })?;
                let code = provider.provide_code(&ctx, &url).await?;
                let code = code.trim();
                if code.is_empty() {
                    return Err(Error::config_invalid("authorization code is empty"));
                }
                AuthenticationInformation::with_code(info.client_id(), info.client_secret(), code)
            }
        };

        let access_token = oauth2::exchange_code(&ctx, &info).await?;
        let creds = oauth2::storage_credentials(&ctx, &access_token).await?;

        Ok(Self {
            ctx,
            info,
            access_token,
            storage_token: creds.token,
            storage_endpoint: creds.endpoint,
        })
    }

    /// The current access token.
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// The scoped token sent as `X-Auth-Token` on storage operations.
    pub fn storage_token(&self) -> &str {
        &self.storage_token
    }

    /// Base url of the storage account.
    pub fn storage_endpoint(&self) -> &str {
        &self.storage_endpoint
    }

    /// The information this client authenticated with.
    pub fn authentication_information(&self) -> &AuthenticationInformation {
        &self.info
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Returns the new expiry as unix milliseconds, or [`REFRESH_FAILED`].
    /// The current token is kept when the refresh fails.
    pub async fn refresh_token(&mut self) -> i64 {
        match oauth2::refresh(&self.ctx, &self.info, &self.access_token).await {
            Ok(token) => {
                self.access_token = token;
                self.access_token.expires_at().timestamp_millis()
            }
            Err(e) => {
                warn!("refresh access token failed: {e}");
                REFRESH_FAILED
            }
        }
    }

    /// Fetch the metadata of `path`.
    pub async fn get_info(&self, path: &str) -> Option<Response> {
        self.storage_query(&self.object_url(path))?
            .head(&self.ctx)
            .await
    }

    /// List the entries under `path` as a json array.
    pub async fn list_directory(&self, path: &str) -> Option<Response> {
        let url = format!(
            "{}{DEFAULT_CONTAINER}?path={path}&format=json",
            self.storage_endpoint
        );
        self.storage_query(&url)?
            .as_json_array()
            .get(&self.ctx)
            .await
    }

    /// Create a directory marker object at `path`.
    pub async fn create_directory(&self, path: &str) -> Option<Response> {
        self.storage_query(&self.object_url(path))?
            .with_header("Content-Type", DIRECTORY_CONTENT_TYPE)
            .put(&self.ctx, None)
            .await
    }

    /// Upload the local file `source` to `path`.
    pub async fn upload(&self, source: impl AsRef<Path>, path: &str) -> Option<Response> {
        self.storage_query(&self.object_url(path))?
            .put(&self.ctx, Some(source.as_ref()))
            .await
    }

    /// Download `source` into the local file `target`, overwriting it.
    pub async fn download(&self, source: &str, target: impl AsRef<Path>) -> Option<Response> {
        self.storage_query(&self.object_url(source))?
            .as_binary(target.as_ref())
            .get(&self.ctx)
            .await
    }

    /// Delete `path`.
    pub async fn delete(&self, path: &str) -> Option<Response> {
        self.storage_query(&self.object_url(path))?
            .delete(&self.ctx)
            .await
    }

    /// Server side copy of `source` to `destination`.
    ///
    /// `source` is sent as is in `X-Copy-From`, so it must name the container.
    pub async fn copy(&self, source: &str, destination: &str) -> Option<Response> {
        self.storage_query(&self.object_url(destination))?
            .with_header(X_COPY_FROM, source)
            .put(&self.ctx, None)
            .await
    }

    /// Replace the metadata of `path` with `headers`.
    ///
    /// A caller supplied `X-Auth-Token` is overridden by the storage token.
    pub async fn set_metadata<I, K, V>(&self, path: &str, headers: I) -> Option<Response>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let query = self.query(&self.object_url(path))?;
        headers
            .into_iter()
            .fold(query, |q, (k, v)| q.with_header(k, v))
            .with_header(X_AUTH_TOKEN, self.storage_token.as_str())
            .post(&self.ctx)
            .await
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}{DEFAULT_CONTAINER}{path}", self.storage_endpoint)
    }

    fn query(&self, url: &str) -> Option<Query> {
        debug!("building storage request for {url}");
        Query::new(url)
            .inspect_err(|e| warn!("build storage request for {url} failed: {e}"))
            .ok()
    }

    fn storage_query(&self, url: &str) -> Option<Query> {
        Some(self.query(url)?.with_header(X_AUTH_TOKEN, self.storage_token.as_str()))
    }
}
