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

use http::HeaderMap;
use serde_json::{Map, Value};

/// Decoded body of a [`Response`].
///
/// The variant always follows the output mode chosen on the originating
/// [`Query`](crate::Query), it is never guessed from the body.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Body read as text, lines joined without terminators.
    Text(String),
    /// Body parsed as a JSON object.
    Object(Map<String, Value>),
    /// Body parsed as a JSON array.
    Array(Vec<Value>),
    /// Body written to this path.
    File(PathBuf),
    /// Body could not be decoded, or the server answered with an error status.
    Absent,
}

impl Content {
    /// Returns the text if this is [`Content::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the object if this is [`Content::Object`].
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Content::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the array if this is [`Content::Array`].
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Content::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the destination path if this is [`Content::File`].
    pub fn as_file(&self) -> Option<&Path> {
        match self {
            Content::File(v) => Some(v),
            _ => None,
        }
    }

    /// Check if the content is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Content::Absent)
    }
}

/// Response is the envelope returned by every executed query.
///
/// It is returned whatever the status code is: callers inspect [`Response::code`]
/// to detect HTTP level failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    code: u16,
    headers: HashMap<String, Vec<String>>,
    content: Content,
}

impl Response {
    /// Create a new response.
    ///
    /// Header names are stored in lowercase.
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, content: Content) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();

        Self {
            code,
            headers,
            content,
        }
    }

    pub(crate) fn from_parts(parts: &http::response::Parts, content: Content) -> Self {
        Self {
            code: parts.status.as_u16(),
            headers: collect_headers(&parts.headers),
            content,
        }
    }

    /// HTTP status code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// All response headers, every value in wire order.
    pub fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// First value of the given header, looked up case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Decoded content.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Consume the response and return its content.
    pub fn into_content(self) -> Content {
        self.content
    }

    /// Check if the status code is 2xx or 3xx.
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.code)
    }
}

fn collect_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        map.entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    map
}
