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

//! Token exchange, refresh and storage credentials lookup.

use hubic_core::hash::basic_authorization;
use hubic_core::utils::Redact;
use hubic_core::{Content, Context, Error, Query, Response, Result};
use log::{debug, error};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::constants::*;
use crate::credential::{AccessToken, AuthenticationInformation};

const HTTP_OK: u16 = 200;
const HTTP_UNAUTHORIZED: u16 = 401;

/// Response of the token endpoint for both grants.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Response of the credentials endpoint.
#[derive(Deserialize)]
pub(crate) struct StorageCredentials {
    pub token: String,
    pub endpoint: String,
}

/// Build the url the user visits to grant access and get a code.
///
/// Returns `None` when `info` has no redirect url and scope.
pub(crate) fn authorize_url(info: &AuthenticationInformation) -> Option<String> {
    let (redirect_url, scope) = (info.redirect_url()?, info.scope()?);
    let state: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();

    Some(format!(
        "{OAUTH_AUTH_URL}?client_id={}&redirect_uri={redirect_url}&scope={scope}&response_type=code&state=RandomString_{state}",
        info.client_id()
    ))
}

/// Exchange the authorization code of `info` for an access token.
pub(crate) async fn exchange_code(
    ctx: &Context,
    info: &AuthenticationInformation,
) -> Result<AccessToken> {
    let code = info
        .code()
        .ok_or_else(|| Error::config_invalid("authorization code is required"))?;
    debug!("exchanging authorization code {:?} for access token", Redact::from(code));

    let resp = token_query(info)?
        .with_form_field("code", code)
        .with_form_field("redirect_uri", TOKEN_REDIRECT_URI)
        .with_form_field("grant_type", "authorization_code")
        .post(ctx)
        .await;

    let token: TokenResponse = parse_ok_response("authorization code exchange", resp)?;
    let refresh_token = token.refresh_token.ok_or_else(|| {
        Error::credential_invalid("authorization code exchange returned no refresh_token")
    })?;
    Ok(AccessToken::expiring_in(
        token.access_token,
        refresh_token,
        token.expires_in,
    ))
}

/// Exchange the refresh token of `current` for a new access token.
///
/// The returned token carries the same refresh token as `current`.
pub(crate) async fn refresh(
    ctx: &Context,
    info: &AuthenticationInformation,
    current: &AccessToken,
) -> Result<AccessToken> {
    debug!("refreshing access token");

    let resp = token_query(info)?
        .with_form_field("refresh_token", current.refresh_token())
        .with_form_field("grant_type", "refresh_token")
        .post(ctx)
        .await;

    let token: TokenResponse = parse_ok_response("refresh token exchange", resp)?;
    Ok(current.refreshed(token.access_token, token.expires_in))
}

/// Fetch the scoped storage token and the storage endpoint.
pub(crate) async fn storage_credentials(
    ctx: &Context,
    token: &AccessToken,
) -> Result<StorageCredentials> {
    let resp = Query::new(CREDENTIALS_URL)?
        .with_header("Authorization", token.bearer())
        .as_json_object()
        .get(ctx)
        .await;

    if resp.as_ref().map(Response::code) == Some(HTTP_UNAUTHORIZED) {
        return Err(Error::credential_expired(
            "access token was rejected by the credentials endpoint",
        ));
    }

    let creds: StorageCredentials = parse_ok_response("storage credentials lookup", resp)?;
    debug!(
        "got storage token {:?} and endpoint {}",
        Redact::from(&creds.token),
        creds.endpoint
    );
    Ok(creds)
}

fn token_query(info: &AuthenticationInformation) -> Result<Query> {
    Ok(Query::new(OAUTH_TOKEN_URL)?
        .with_header("Content-Type", FORM_CONTENT_TYPE)
        .with_header(
            "Authorization",
            basic_authorization(info.client_id(), info.client_secret()),
        )
        .as_json_object())
}

fn parse_ok_response<T: DeserializeOwned>(action: &str, resp: Option<Response>) -> Result<T> {
    let Some(resp) = resp else {
        return Err(Error::unexpected(format!(
            "{action} failed: no response from server"
        )));
    };

    if resp.code() != HTTP_OK {
        error!("{action} got unexpected status {}", resp.code());
        return Err(Error::credential_denied(format!(
            "{action} failed with status {}",
            resp.code()
        )));
    }

    match resp.into_content() {
        Content::Object(object) => serde_json::from_value(Value::Object(object)).map_err(|e| {
            Error::unexpected(format!("{action} returned an unexpected body")).with_source(e)
        }),
        _ => Err(Error::unexpected(format!(
            "{action} returned a body that is not a json object"
        ))),
    }
}
