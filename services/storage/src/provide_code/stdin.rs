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

use hubic_core::{Context, Error, Result};
use log::info;
use tokio::io::{self, AsyncBufReadExt, BufReader};

use super::ProvideAuthorizationCode;

/// StdinAuthorizationCode logs the authorize url and reads the code from the
/// first line of stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinAuthorizationCode;

#[async_trait::async_trait]
impl ProvideAuthorizationCode for StdinAuthorizationCode {
    async fn provide_code(&self, _: &Context, authorize_url: &str) -> Result<String> {
        info!("1. Go to: {authorize_url}");
        info!("2. Check authorization and login");
        info!("3. Copy the authorization code.");

        let mut lines = BufReader::new(io::stdin()).lines();
        match lines.next_line().await {
            Ok(Some(line)) => Ok(line.trim().to_string()),
            Ok(None) => Err(Error::config_invalid(
                "stdin closed before an authorization code was entered",
            )),
            Err(err) => {
                Err(Error::unexpected("failed to read authorization code").with_source(err))
            }
        }
    }
}
