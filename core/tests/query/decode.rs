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

use super::{create_test_context, MemoryFs, MockHttpSend};
use hubic_core::{Content, Query};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::PathBuf;

#[tokio::test]
async fn test_plain_text_strips_line_terminators() {
    let http = MockHttpSend::default().reply(200, &[], "first\nsecond\r\nthird\n");
    let ctx = create_test_context(http, MemoryFs::default());

    let resp = Query::new("https://ep/default/notes.txt")
        .unwrap()
        .get(&ctx)
        .await
        .expect("response must be present");

    assert_eq!(200, resp.code());
    assert_eq!(&Content::Text("firstsecondthird".to_string()), resp.content());
}

#[tokio::test]
async fn test_json_array() {
    let http = MockHttpSend::default().reply(200, &[], r#"["a","b"]"#);
    let ctx = create_test_context(http, MemoryFs::default());

    let resp = Query::new("https://ep/default?path=Documents&format=json")
        .unwrap()
        .as_json_array()
        .get(&ctx)
        .await
        .unwrap();

    assert_eq!(Some(&[json!("a"), json!("b")][..]), resp.content().as_array());
}

#[tokio::test]
async fn test_json_object() {
    let http = MockHttpSend::default().reply(200, &[], "{\n  \"x\": 1\n}\n");
    let ctx = create_test_context(http, MemoryFs::default());

    let resp = Query::new("https://api.hubic.com/1.0/account/credentials")
        .unwrap()
        .as_json_object()
        .get(&ctx)
        .await
        .unwrap();

    let object = resp.content().as_object().expect("content must be an object");
    assert_eq!(1, object.len());
    assert_eq!(Some(&json!(1)), object.get("x"));
}

#[tokio::test]
async fn test_json_shape_mismatch_is_absent() {
    let http = MockHttpSend::default()
        .reply(200, &[], r#"{"x":1}"#)
        .reply(200, &[], "not json");
    let ctx = create_test_context(http, MemoryFs::default());

    let resp = Query::new("https://ep/default")
        .unwrap()
        .as_json_array()
        .get(&ctx)
        .await
        .unwrap();
    assert!(resp.content().is_absent());

    let resp = Query::new("https://ep/default")
        .unwrap()
        .as_json_object()
        .get(&ctx)
        .await
        .unwrap();
    assert!(resp.content().is_absent());
}

#[tokio::test]
async fn test_binary_is_written_verbatim() {
    let body = "line1\r\nline2\n\u{00e9}";
    let http = MockHttpSend::default().reply(200, &[("Content-Type", "text/plain")], body);
    let fs = MemoryFs::default().with_file("/tmp/out.txt", b"old content that is longer");
    let ctx = create_test_context(http, fs.clone());

    let resp = Query::new("https://ep/default/Documents/out.txt")
        .unwrap()
        .as_binary("/tmp/out.txt")
        .get(&ctx)
        .await
        .unwrap();

    assert_eq!(Some(PathBuf::from("/tmp/out.txt").as_path()), resp.content().as_file());
    assert_eq!(Some(body.as_bytes()), fs.get("/tmp/out.txt").as_deref());
    assert_eq!(Some("text/plain"), resp.header("content-type"));
}

#[tokio::test]
async fn test_binary_write_failure_is_absent() {
    let http = MockHttpSend::default().reply(200, &[], "payload");
    // No file writer configured: every write fails.
    let ctx = hubic_core::Context::new().with_http_send(http);

    let resp = Query::new("https://ep/default/Documents/out.txt")
        .unwrap()
        .as_binary("/tmp/out.txt")
        .get(&ctx)
        .await
        .expect("a write failure keeps the envelope");

    assert_eq!(200, resp.code());
    assert!(resp.content().is_absent());
}

#[tokio::test]
async fn test_error_status_is_not_decoded() {
    let http = MockHttpSend::default().reply(404, &[("Content-Length", "9")], "Not Found");
    let fs = MemoryFs::default();
    let ctx = create_test_context(http, fs.clone());

    let resp = Query::new("https://ep/default/missing.txt")
        .unwrap()
        .as_binary("/tmp/missing.txt")
        .get(&ctx)
        .await
        .unwrap();

    assert_eq!(404, resp.code());
    assert!(resp.content().is_absent());
    assert_eq!(None, fs.get("/tmp/missing.txt"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_binary_keeps_non_utf8_destination() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let target = PathBuf::from(OsStr::from_bytes(b"/tmp/dl-\xff.bin"));
    let http = MockHttpSend::default().reply(200, &[], "payload");
    let fs = MemoryFs::default();
    let ctx = create_test_context(http, fs.clone());

    let resp = Query::new("https://ep/default/Documents/dl.bin")
        .unwrap()
        .as_binary(&target)
        .get(&ctx)
        .await
        .unwrap();

    assert_eq!(Some(target.as_path()), resp.content().as_file());
    assert_eq!(Some(&b"payload"[..]), fs.get(&target).as_deref());
    assert_eq!(None, fs.get("/tmp/dl-\u{fffd}.bin"));
}
