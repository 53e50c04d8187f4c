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

mod decode;

use async_trait::async_trait;
use bytes::Bytes;
use hubic_core::{Context, Error, FileRead, FileWrite, HttpSend, Result};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Replays canned responses in order and records every request it sees.
///
/// A queued `None` simulates a transport failure.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    replies: Arc<Mutex<VecDeque<Option<http::Response<Bytes>>>>>,
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl MockHttpSend {
    pub fn reply(self, status: u16, headers: &[(&str, &str)], body: &str) -> Self {
        let mut builder = http::Response::builder().status(status);
        for (k, v) in headers {
            builder = builder.header(*k, *v);
        }
        let resp = builder.body(Bytes::from(body.to_string())).unwrap();
        self.replies.lock().unwrap().push_back(Some(resp));
        self
    }

    pub fn fail(self) -> Self {
        self.replies.lock().unwrap().push_back(None);
        self
    }

    pub fn requests(&self) -> Vec<http::Request<Bytes>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(req);
        match self.replies.lock().unwrap().pop_front() {
            Some(Some(resp)) => Ok(resp),
            _ => Err(Error::unexpected("connection refused")),
        }
    }
}

/// In-memory file system.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: Arc<Mutex<HashMap<PathBuf, Bytes>>>,
}

impl MemoryFs {
    pub fn with_file(self, path: impl AsRef<Path>, content: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), Bytes::copy_from_slice(content));
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<Bytes> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

#[async_trait]
impl FileRead for MemoryFs {
    async fn file_read(&self, path: &Path) -> Result<Vec<u8>> {
        self.get(path)
            .map(|bs| bs.to_vec())
            .ok_or_else(|| Error::unexpected(format!("{} not found", path.display())))
    }
}

#[async_trait]
impl FileWrite for MemoryFs {
    async fn file_write(&self, path: &Path, content: Bytes) -> Result<()> {
        self.files.lock().unwrap().insert(path.to_path_buf(), content);
        Ok(())
    }
}

pub fn create_test_context(http: MockHttpSend, fs: MemoryFs) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new()
        .with_http_send(http)
        .with_file_read(fs.clone())
        .with_file_write(fs)
}
