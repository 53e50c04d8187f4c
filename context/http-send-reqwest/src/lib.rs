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

//! [`HttpSend`] implementation backed by reqwest.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use hubic_core::{Error, HttpSend, NoRedirect, Result};
use log::{debug, warn};
use reqwest::redirect::Policy;
use reqwest::{Client, Request};

/// ReqwestHttpSend sends requests with a reqwest [`Client`].
///
/// Requests carrying the [`NoRedirect`] extension go through a second client
/// whose redirect policy is [`Policy::none`].
#[derive(Debug, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
    no_redirect_client: Client,
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    ///
    /// The client used for requests that must not follow redirects is built
    /// with reqwest defaults. If it cannot be built, `client` is used for them
    /// too and those requests follow redirects.
    pub fn new(client: Client) -> Self {
        let no_redirect_client = match Client::builder().redirect(Policy::none()).build() {
            Ok(no_redirect_client) => no_redirect_client,
            Err(err) => {
                warn!("failed to build no-redirect client, POST will follow redirects: {err}");
                client.clone()
            }
        };

        Self {
            client,
            no_redirect_client,
        }
    }

    /// Replace the client used for requests that must not follow redirects.
    ///
    /// The given client should be built with `redirect(Policy::none())`.
    pub fn with_no_redirect_client(mut self, client: Client) -> Self {
        self.no_redirect_client = client;
        self
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let client = if req.extensions().get::<NoRedirect>().is_some() {
            debug!("sending {} {} without following redirects", req.method(), req.uri());
            &self.no_redirect_client
        } else {
            &self.client
        };

        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to convert http request").with_source(e))?;
        let resp: http::Response<_> = client
            .execute(req)
            .await
            .map_err(|e| Error::unexpected("failed to send http request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::unexpected("failed to read http response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
