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


use async_trait::async_trait;
use bytes::Bytes;
use hubic_core::{Context, Error, HttpSend, Result};
use hubic_fs_tokio::{TokioFileRead, TokioFileWrite};
use hubic_storage::{AuthenticationInformation, HubicClient};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

pub const TOKEN_URL: &str = "https://api.hubic.com/oauth/token/";
pub const CREDENTIALS_URL: &str = "https://api.hubic.com/1.0/account/credentials";
pub const ENDPOINT: &str = "https://ep";

/// Canned reply, `None` simulates a transport failure.
type Reply = Option<(u16, String)>;

#[derive(Debug, Clone, Default)]
struct StoredObject {
    body: Bytes,
    headers: Vec<(String, String)>,
}

#[derive(Debug, Default)]
struct State {
    token_replies: VecDeque<Reply>,
    token_requests: usize,
    credentials_reply: Option<Reply>,
    storage_down: bool,
    objects: BTreeMap<String, StoredObject>,
    requests: Vec<http::Request<Bytes>>,
}

/// A fake hubiC service.
///
/// The token endpoint answers `AT<n>` / `RT<n>` for the n-th call unless a
/// reply was queued, the credentials endpoint answers `ST1` on [`ENDPOINT`],
/// and the storage endpoint keeps objects in memory.
#[derive(Debug, Clone, Default)]
pub struct MockHubic {
    state: Arc<Mutex<State>>,
}

impl MockHubic {
    pub fn token_reply(self, status: u16, body: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .token_replies
            .push_back(Some((status, body.to_string())));
        self
    }

    pub fn token_failure(self) -> Self {
        self.state.lock().unwrap().token_replies.push_back(None);
        self
    }

    pub fn credentials_reply(self, status: u16, body: &str) -> Self {
        self.state.lock().unwrap().credentials_reply = Some(Some((status, body.to_string())));
        self
    }

    pub fn set_storage_down(&self, down: bool) {
        self.state.lock().unwrap().storage_down = down;
    }

    pub fn object(&self, path: &str) -> Option<Bytes> {
        self.state
            .lock()
            .unwrap()
            .objects
            .get(path)
            .map(|o| o.body.clone())
    }

    pub fn requests(&self) -> Vec<http::Request<Bytes>> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> http::Request<Bytes> {
        self.requests().pop().expect("no request recorded")
    }

    fn token(state: &mut State) -> Reply {
        state.token_requests += 1;
        let n = state.token_requests;
        state.token_replies.pop_front().unwrap_or_else(|| {
            Some((
                200,
                format!(r#"{{"access_token":"AT{n}","expires_in":3600,"refresh_token":"RT{n}","token_type":"Bearer"}}"#),
            ))
        })
    }

    fn credentials(state: &mut State) -> Reply {
        state.credentials_reply.clone().unwrap_or_else(|| {
            Some((200, format!(r#"{{"token":"ST1","endpoint":"{ENDPOINT}","expires":"2030-01-01T00:00:00+01:00"}}"#)))
        })
    }

    fn storage(state: &mut State, req: &http::Request<Bytes>) -> http::Response<Bytes> {
        let reply = |status: u16| http::Response::builder().status(status);

        if req.headers().get("x-auth-token").map(|v| v.as_bytes()) != Some(b"ST1") {
            return reply(401).body(Bytes::new()).unwrap();
        }

        let path = req.uri().path().trim_start_matches("/default").to_string();
        let header = |name: &str| {
            req.headers()
                .get(name)
                .map(|v| v.to_str().unwrap().to_string())
        };

        if let Some(query) = req.uri().query() {
            let prefix = form_urlencoded::parse(query.as_bytes())
                .find(|(k, _)| k == "path")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();
            let names: Vec<_> = state
                .objects
                .keys()
                .map(|k| k.trim_start_matches('/'))
                .filter(|k| k.starts_with(&prefix))
                .map(|k| serde_json::json!({ "name": k }))
                .collect();
            return reply(200)
                .header("content-type", "application/json; charset=utf-8")
                .body(Bytes::from(serde_json::to_vec(&names).unwrap()))
                .unwrap();
        }

        let method = req.method().clone();
        if method == http::Method::PUT {
            let object = match header("x-copy-from") {
                Some(source) => match state.objects.get(source.trim_start_matches("/default")) {
                    Some(object) => object.clone(),
                    None => return reply(404).body(Bytes::new()).unwrap(),
                },
                None => StoredObject {
                    body: req.body().clone(),
                    headers: header("content-type")
                        .map(|v| vec![("content-type".to_string(), v)])
                        .unwrap_or_default(),
                },
            };
            state.objects.insert(path, object);
            return reply(201).body(Bytes::new()).unwrap();
        }

        let Some(object) = state.objects.get_mut(&path) else {
            return reply(404).body(Bytes::from("<html>Not Found</html>")).unwrap();
        };

        if method == http::Method::POST {
            object.headers.retain(|(k, _)| !k.starts_with("x-object-meta-"));
            for (k, v) in req.headers() {
                if k.as_str().starts_with("x-object-meta-") {
                    object
                        .headers
                        .push((k.to_string(), v.to_str().unwrap().to_string()));
                }
            }
            reply(202).body(Bytes::new()).unwrap()
        } else if method == http::Method::DELETE {
            state.objects.remove(&path);
            reply(204).body(Bytes::new()).unwrap()
        } else {
            let mut builder = reply(200).header("content-length", object.body.len());
            for (k, v) in &object.headers {
                builder = builder.header(k.as_str(), v.as_str());
            }
            let body = if method == http::Method::HEAD {
                Bytes::new()
            } else {
                object.body.clone()
            };
            builder.body(body).unwrap()
        }
    }
}

#[async_trait]
impl HttpSend for MockHubic {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(req.clone());

        let uri = req.uri().to_string();
        let reply = if uri == TOKEN_URL {
            Self::token(&mut state)
        } else if uri == CREDENTIALS_URL {
            Self::credentials(&mut state)
        } else if uri.starts_with(ENDPOINT) && !state.storage_down {
            return Ok(Self::storage(&mut state, &req));
        } else {
            None
        };

        match reply {
            Some((status, body)) => Ok(http::Response::builder()
                .status(status)
                .body(Bytes::from(body))
                .unwrap()),
            None => Err(Error::unexpected(format!("connection to {uri} refused"))),
        }
    }
}

pub fn create_test_context(hubic: MockHubic) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new()
        .with_http_send(hubic)
        .with_file_read(TokioFileRead)
        .with_file_write(TokioFileWrite)
}

/// Log in with `c1` / `s1` / `authcode`.
pub async fn login(hubic: &MockHubic) -> HubicClient {
    let info = AuthenticationInformation::with_code("c1", "s1", "authcode");
    HubicClient::new(create_test_context(hubic.clone()), info)
        .await
        .expect("login must succeed")
}
