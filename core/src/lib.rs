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

//! Core components for talking to hubiC.
//!
//! This crate provides the foundational types shared by the hubic ecosystem.
//!
//! ## Overview
//!
//! - **Context**: a container holding the implementations for HTTP sending,
//!   file reading and writing, and environment access.
//! - **Query**: a value describing exactly one HTTP call, executed through a
//!   [`Context`].
//! - **Response**: the envelope every executed query returns.
//!
//! ## Example
//!
//! ```no_run
//! use hubic_core::{Content, Context, Query};
//!
//! # async fn example(ctx: Context) -> hubic_core::Result<()> {
//! let resp = Query::new("https://ep.example.com/v1/AUTH_x/default?path=Documents&format=json")?
//!     .with_header("X-Auth-Token", "storage-token")
//!     .as_json_array()
//!     .get(&ctx)
//!     .await;
//!
//! match resp {
//!     None => println!("transport failure"),
//!     Some(resp) if !resp.is_success() => println!("http failure: {}", resp.code()),
//!     Some(resp) => {
//!         if let Content::Array(items) = resp.content() {
//!             println!("{} entries", items.len());
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`FileRead`]: For reading upload sources
//! - [`FileWrite`]: For writing downloads
//! - [`Env`]: For environment variable access

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{
    Context, Env, FileRead, FileWrite, HttpSend, NoopEnv, NoopFileRead, NoopFileWrite,
    NoopHttpSend, OsEnv, StaticEnv,
};
mod error;
pub use error::{Error, ErrorKind, Result};
mod query;
pub use query::{NoRedirect, Output, Query};
mod response;
pub use response::{Content, Response};
