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
use hubic::storage::default_client;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let path = std::env::args().nth(1).unwrap_or_default();
    let client = default_client().await?;

    match client.list_directory(&path).await {
        None => println!("request failed, see logs"),
        Some(resp) if !resp.is_success() => println!("server answered {}", resp.code()),
        Some(resp) => {
            for entry in resp.content().as_array().unwrap_or_default() {
                println!("{}", entry["name"].as_str().unwrap_or_default());
            }
        }
    }

    Ok(())
}
