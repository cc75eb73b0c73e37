// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary schedule files for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio::fs;

/// Writes `content` to `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned guard is dropped.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created.
pub async fn write_schedule(
    name: &str,
    content: &str,
) -> Result<(TempDir, PathBuf), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    fs::write(&path, content).await?;
    Ok((dir, path))
}
