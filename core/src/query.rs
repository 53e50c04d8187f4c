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

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use http::header::{HeaderName, CONTENT_LENGTH};
use http::{HeaderMap, HeaderValue, Method, Uri};
use log::{debug, warn};
use serde_json::Value;

use crate::response::{Content, Response};
use crate::{Context, Error, Result};

/// Request extension asking the [`HttpSend`](crate::HttpSend) implementation
/// not to follow redirects for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoRedirect;

/// How the body of a response is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// Lines of the body joined into one string.
    #[default]
    PlainText,
    /// Body parsed as a JSON object.
    JsonObject,
    /// Body parsed as a JSON array.
    JsonArray,
    /// Body written verbatim to the path.
    Binary(PathBuf),
}

/// Query describes exactly one HTTP call.
///
/// A query is a plain value: [`Query::new`] starts from an empty descriptor,
/// the `with_*` and `as_*` methods consume and return it, and one of the verb
/// methods executes it. Nothing is shared between two queries.
///
/// Executing a query never returns an error. Transport failures (connection
/// errors, unreadable upload source, request that cannot be built) are logged
/// and reported as `None`. HTTP level failures are reported through
/// [`Response::code`].
///
/// ```no_run
/// use hubic_core::{Context, Query};
///
/// # async fn example(ctx: &Context) -> hubic_core::Result<()> {
/// let resp = Query::new("https://api.hubic.com/1.0/account/credentials")?
///     .with_header("Authorization", "Bearer token")
///     .as_json_object()
///     .get(ctx)
///     .await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    uri: Uri,
    headers: HashMap<String, String>,
    params: HashMap<String, String>,
    form: Vec<(String, String)>,
    output: Output,
}

impl Query {
    /// Start a new query against `url`.
    ///
    /// Fails without any I/O if `url` is not an absolute URL.
    pub fn new(url: &str) -> Result<Self> {
        let uri: Uri = url.parse()?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::request_invalid(format!(
                "url {url} must have a scheme and a host"
            )));
        }

        Ok(Self {
            uri,
            headers: HashMap::new(),
            params: HashMap::new(),
            form: Vec::new(),
            output: Output::PlainText,
        })
    }

    /// Target of this query.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Output mode of this query.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Set a request header, replacing any previous value for the same key.
    ///
    /// Keys are compared case-insensitively.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Set a url parameter.
    ///
    /// Url parameters are sent as request headers, NOT appended to the query
    /// string. They are applied before the headers set by
    /// [`Query::with_header`], so a header with the same name wins. Put real
    /// query string parameters directly into the url.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Set a form field for [`Query::post`], replacing any previous value for
    /// the same key.
    pub fn with_form_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        match self.form.iter_mut().find(|(k, _)| *k == key) {
            Some(field) => field.1 = value,
            None => self.form.push((key, value)),
        }
        self
    }

    /// Decode the response body as text. This is the default.
    pub fn as_plain_text(mut self) -> Self {
        self.output = Output::PlainText;
        self
    }

    /// Decode the response body as a JSON object.
    pub fn as_json_object(mut self) -> Self {
        self.output = Output::JsonObject;
        self
    }

    /// Decode the response body as a JSON array.
    pub fn as_json_array(mut self) -> Self {
        self.output = Output::JsonArray;
        self
    }

    /// Write the response body to `path`, overwriting it.
    pub fn as_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Output::Binary(path.into());
        self
    }

    /// Send a `GET` request.
    pub async fn get(self, ctx: &Context) -> Option<Response> {
        self.execute(ctx, Method::GET, Bytes::new(), true).await
    }

    /// Send a `HEAD` request.
    pub async fn head(self, ctx: &Context) -> Option<Response> {
        self.execute(ctx, Method::HEAD, Bytes::new(), true).await
    }

    /// Send a `DELETE` request.
    pub async fn delete(self, ctx: &Context) -> Option<Response> {
        self.execute(ctx, Method::DELETE, Bytes::new(), true).await
    }

    /// Send a `POST` request with the form fields as an url-encoded body.
    ///
    /// Redirects are not followed.
    pub async fn post(self, ctx: &Context) -> Option<Response> {
        let body = self.form_body();
        self.with_header(CONTENT_LENGTH.as_str(), body.len().to_string())
            .execute(ctx, Method::POST, body, false)
            .await
    }

    /// Send a `PUT` request.
    ///
    /// With a `source`, the file content is the body, byte for byte. Without
    /// one, the body is empty and `Content-Length: 0` is declared explicitly.
    pub async fn put(self, ctx: &Context, source: Option<&Path>) -> Option<Response> {
        match source {
            Some(path) => match ctx.file_read(path).await {
                Ok(content) => {
                    self.execute(ctx, Method::PUT, Bytes::from(content), true)
                        .await
                }
                Err(err) => {
                    warn!("failed to read upload source {}: {err:?}", path.display());
                    None
                }
            },
            None => {
                self.with_header(CONTENT_LENGTH.as_str(), "0")
                    .execute(ctx, Method::PUT, Bytes::new(), true)
                    .await
            }
        }
    }

    fn form_body(&self) -> Bytes {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.form {
            serializer.append_pair(k, v);
        }
        Bytes::from(serializer.finish())
    }

    fn build(
        &self,
        method: Method,
        body: Bytes,
        follow_redirects: bool,
    ) -> Result<http::Request<Bytes>> {
        let mut headers = HeaderMap::new();
        // Params go first so that an explicit header wins.
        for (k, v) in self.params.iter().chain(self.headers.iter()) {
            headers.insert(
                HeaderName::from_bytes(k.as_bytes())?,
                HeaderValue::from_str(v)?,
            );
        }

        let mut req = http::Request::builder()
            .method(method)
            .uri(self.uri.clone())
            .body(body)?;
        *req.headers_mut() = headers;
        if !follow_redirects {
            req.extensions_mut().insert(NoRedirect);
        }
        Ok(req)
    }

    async fn execute(
        self,
        ctx: &Context,
        method: Method,
        body: Bytes,
        follow_redirects: bool,
    ) -> Option<Response> {
        let req = match self.build(method.clone(), body, follow_redirects) {
            Ok(req) => req,
            Err(err) => {
                warn!("failed to build {method} request to {}: {err:?}", self.uri);
                return None;
            }
        };

        debug!("sending {method} request to {}", self.uri);
        let resp = match ctx.http_send(req).await {
            Ok(resp) => resp,
            Err(err) => {
                warn!("{method} request to {} failed: {err:?}", self.uri);
                return None;
            }
        };
        debug!("{method} request to {} got status {}", self.uri, resp.status());

        Some(decode(ctx, self.output, resp).await)
    }
}

async fn decode(ctx: &Context, output: Output, resp: http::Response<Bytes>) -> Response {
    let (parts, body) = resp.into_parts();

    // Error bodies are never interpreted.
    if parts.status.is_client_error() || parts.status.is_server_error() {
        return Response::from_parts(&parts, Content::Absent);
    }

    let content = match output {
        Output::Binary(path) => match ctx.file_write(&path, body).await {
            Ok(()) => Content::File(path),
            Err(err) => {
                warn!("failed to write response body to {}: {err:?}", path.display());
                Content::Absent
            }
        },
        Output::PlainText => Content::Text(join_lines(&body)),
        Output::JsonObject => match serde_json::from_str(&join_lines(&body)) {
            Ok(Value::Object(map)) => Content::Object(map),
            Ok(_) => {
                debug!("response body is not a json object");
                Content::Absent
            }
            Err(err) => {
                debug!("response body is not valid json: {err}");
                Content::Absent
            }
        },
        Output::JsonArray => match serde_json::from_str(&join_lines(&body)) {
            Ok(Value::Array(values)) => Content::Array(values),
            Ok(_) => {
                debug!("response body is not a json array");
                Content::Absent
            }
            Err(err) => {
                debug!("response body is not valid json: {err}");
                Content::Absent
            }
        },
    };

    Response::from_parts(&parts, content)
}

/// Read the body as UTF-8 and concatenate its lines, dropping terminators.
fn join_lines(body: &[u8]) -> String {
    String::from_utf8_lossy(body).lines().collect()
}
