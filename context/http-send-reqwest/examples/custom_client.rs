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

use anyhow::Result;
use hubic_core::{Context, Query};
use hubic_fs_tokio::{TokioFileRead, TokioFileWrite};
use hubic_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("hubic-example/1.0")
        .build()?;

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_file_write(TokioFileWrite)
        .with_http_send(ReqwestHttpSend::new(client));

    let test_url = "https://httpbin.org/get";
    println!("GET {test_url}");

    match Query::new(test_url)?
        .with_header("X-Test-Header", "hubic-example")
        .as_json_object()
        .get(&ctx)
        .await
    {
        Some(resp) => {
            println!("status: {}", resp.code());
            for (name, values) in resp.headers() {
                println!("  {name}: {values:?}");
            }
            println!("content: {:?}", resp.content());
        }
        None => println!("request failed, see logs"),
    }

    Ok(())
}
