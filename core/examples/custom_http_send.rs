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
use hubic_core::{Content, Context, HttpSend, Query, Result};

/// Answers every request locally with a fixed directory listing.
#[derive(Debug)]
struct CannedHttpSend;

#[async_trait]
impl HttpSend for CannedHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        println!("{} {}", req.method(), req.uri());
        for (name, value) in req.headers() {
            println!("  {name}: {value:?}");
        }

        Ok(http::Response::builder()
            .status(200)
            .header("content-type", "application/json")
            .body(Bytes::from_static(
                b"[\n{\"name\": \"Documents/a.txt\"},\n{\"name\": \"Documents/b.txt\"}\n]\n",
            ))?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_http_send(CannedHttpSend);

    let resp = Query::new("https://ep.example.com/v1/AUTH_demo/default?path=Documents&format=json")?
        .with_header("X-Auth-Token", "demo-token")
        .as_json_array()
        .get(&ctx)
        .await;

    match resp.as_ref().map(|r| r.content()) {
        Some(Content::Array(entries)) => println!("{} entries", entries.len()),
        Some(other) => println!("unexpected content: {other:?}"),
        None => println!("transport failure"),
    }
    Ok(())
}
