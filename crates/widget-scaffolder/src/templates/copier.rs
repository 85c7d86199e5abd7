//! Template file copying

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Template file names that are written under a different name
///
/// Package registries drop dotfiles, so the store keeps them with a `_` prefix.
const RENAMED_FILES: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

fn destination_name(file_name: &str) -> &str {
    RENAMED_FILES
        .iter()
        .find(|(from, _)| *from == file_name)
        .map(|(_, to)| *to)
        .unwrap_or(file_name)
}

/// Fail if `dir` exists and already has entries
pub async fn ensure_empty_destination(dir: &Path) -> Result<()> {
    if !fs::try_exists(dir)
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to inspect {}", dir.display()), e))?
    {
        return Ok(());
    }

    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to read {}", dir.display()), e))?;
    let has_entries = entries
        .next_entry()
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to read {}", dir.display()), e))?
        .is_some();

    if has_entries {
        Err(ScaffoldError::DestinationNotEmpty {
            path: dir.to_path_buf(),
        })
    } else {
        Ok(())
    }
}

/// Copy a single file, creating parent directories and overwriting the target
pub async fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).await.map_err(|e| {
            ScaffoldError::io(format!("Failed to create directory: {}", parent.display()), e)
        })?;
    }

    fs::copy(source, target).await.map_err(|e| {
        ScaffoldError::io(
            format!("Failed to copy {} to {}", source.display(), target.display()),
            e,
        )
    })?;
    log::debug!("Copied {} -> {}", source.display(), target.display());

    Ok(())
}

/// Recursively copy `source` into `target`, in sorted path order
///
/// Returns the copied files relative to `target`.
pub async fn copy_dir(source: &Path, target: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(target)
        .await
        .map_err(|e| ScaffoldError::io("Failed to create target directory", e))?;

    let entries = WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| {
            let context = format!("Failed to walk {}", source.display());
            ScaffoldError::io(context, e.into())
        })?;

    let mut copied_files = Vec::new();

    for entry in entries {
        let relative = match entry.path().strip_prefix(source) {
            Ok(rel) => rel,
            Err(_) => continue,
        };

        let mut target_path = target.join(relative);
        if let Some(name) = relative.file_name().and_then(|n| n.to_str()) {
            target_path.set_file_name(destination_name(name));
        }

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path).await.map_err(|e| {
                ScaffoldError::io(
                    format!("Failed to create directory: {}", target_path.display()),
                    e,
                )
            })?;
        } else {
            copy_file(entry.path(), &target_path).await?;
            copied_files.push(target_path.strip_prefix(target).unwrap_or(relative).to_path_buf());
        }
    }

    Ok(copied_files)
}
