//! Text edits on files already present in the project

use super::Feature;
use crate::error::{Result, ScaffoldError};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

async fn read_target(installer: Feature, path: &Path) -> Result<String> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ScaffoldError::MissingPatchTarget {
            installer,
            path: path.to_path_buf(),
        }),
        Err(e) => Err(ScaffoldError::io(format!("Failed to read {}", path.display()), e)),
    }
}

async fn write_target(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to write {}", path.display()), e))
}

/// Replace the first occurrence of `marker` in `path` with `replacement`
///
/// A missing file is an error; a missing marker is not. Returns whether the
/// file changed.
pub async fn replace_in_file(
    installer: Feature,
    path: &Path,
    marker: &str,
    replacement: &str,
) -> Result<bool> {
    let content = read_target(installer, path).await?;

    if !content.contains(marker) {
        log::debug!(
            "[{}] marker {:?} not found in {}, skipping",
            installer,
            marker,
            path.display()
        );
        return Ok(false);
    }

    write_target(path, &content.replacen(marker, replacement, 1)).await?;
    log::debug!("[{}] patched {}", installer, path.display());
    Ok(true)
}

/// Append `line` to `path` unless a line with the same content exists
pub async fn append_line_if_missing(installer: Feature, path: &Path, line: &str) -> Result<bool> {
    let mut content = read_target(installer, path).await?;

    if content.lines().any(|existing| existing.trim() == line) {
        return Ok(false);
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(line);
    content.push('\n');

    write_target(path, &content).await?;
    log::debug!("[{}] appended {:?} to {}", installer, line, path.display());
    Ok(true)
}
