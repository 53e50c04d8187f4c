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

//! Tokio based [`FileRead`] and [`FileWrite`] implementations.

use async_trait::async_trait;
use bytes::Bytes;
use hubic_core::{Error, FileRead, FileWrite, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Reads files with `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRead;

#[async_trait]
impl FileRead for TokioFileRead {
    async fn file_read(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path).await.map_err(|e| {
            Error::unexpected(format!("failed to read file {}", path.display())).with_source(e)
        })
    }
}

/// Writes files with `tokio::fs`, truncating any existing content.
///
/// The file is created before the first byte is written, so a failed write
/// may leave an empty or partial file behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileWrite;

#[async_trait]
impl FileWrite for TokioFileWrite {
    async fn file_write(&self, path: &Path, content: Bytes) -> Result<()> {
        let fail = |action: &str, e: std::io::Error| {
            Error::unexpected(format!("failed to {action} file {}", path.display())).with_source(e)
        };

        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|e| fail("create", e))?;
        file.write_all(&content)
            .await
            .map_err(|e| fail("write", e))?;
        file.flush().await.map_err(|e| fail("flush", e))
    }
}
