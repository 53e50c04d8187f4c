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

// Env values used by the hubiC client.
pub const HUBIC_CLIENT_ID: &str = "HUBIC_CLIENT_ID";
pub const HUBIC_CLIENT_SECRET: &str = "HUBIC_CLIENT_SECRET";
pub const HUBIC_AUTHORIZATION_CODE: &str = "HUBIC_AUTHORIZATION_CODE";
pub const HUBIC_REDIRECT_URL: &str = "HUBIC_REDIRECT_URL";
pub const HUBIC_SCOPE: &str = "HUBIC_SCOPE";

// OAuth2 endpoints.
pub const OAUTH_AUTH_URL: &str = "https://api.hubic.com/oauth/auth/";
pub const OAUTH_TOKEN_URL: &str = "https://api.hubic.com/oauth/token/";
pub const CREDENTIALS_URL: &str = "https://api.hubic.com/1.0/account/credentials";

/// Redirect uri sent with the code exchange.
///
/// It is fixed and independent of the redirect url used to build the
/// authorize url.
pub const TOKEN_REDIRECT_URI: &str = "https://api.hubic.com/sandbox/";

/// Name of the container every storage path lives in.
pub const DEFAULT_CONTAINER: &str = "/default";

pub const X_AUTH_TOKEN: &str = "X-Auth-Token";
pub const X_COPY_FROM: &str = "X-Copy-From";
pub const DIRECTORY_CONTENT_TYPE: &str = "application/directory";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
