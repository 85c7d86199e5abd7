//! Import alias rewriting

use crate::error::{Result, ScaffoldError};
use crate::project::DEFAULT_IMPORT_ALIAS;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Drop glob stars and ensure a trailing slash: `@*` becomes `@/`
pub fn normalize_import_alias(alias: &str) -> String {
    let mut normalized = alias.replace('*', "");
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Replace the template's `~/` alias with `alias` in every text file
///
/// Returns the files that changed.
pub async fn set_import_alias(project_dir: &Path, alias: &str) -> Result<Vec<PathBuf>> {
    let alias = normalize_import_alias(alias);
    if alias == DEFAULT_IMPORT_ALIAS {
        return Ok(Vec::new());
    }

    let entries = WalkDir::new(project_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir()
                && e.file_name()
                    .to_str()
                    .is_some_and(|name| SKIPPED_DIRS.contains(&name)))
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| {
            let context = format!("Failed to walk {}", project_dir.display());
            ScaffoldError::io(context, e.into())
        })?;

    let mut changed = Vec::new();
    for entry in entries {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let bytes = fs::read(&path)
            .await
            .map_err(|e| ScaffoldError::io(format!("Failed to read {}", path.display()), e))?;

        // Binary files are left alone.
        let Ok(content) = String::from_utf8(bytes) else {
            continue;
        };
        if !content.contains(DEFAULT_IMPORT_ALIAS) {
            continue;
        }

        fs::write(&path, content.replace(DEFAULT_IMPORT_ALIAS, &alias))
            .await
            .map_err(|e| ScaffoldError::io(format!("Failed to write {}", path.display()), e))?;
        log::debug!("Rewrote import alias in {}", path.display());
        changed.push(path);
    }

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_import_alias() {
        assert_eq!(normalize_import_alias("@/"), "@/");
        assert_eq!(normalize_import_alias("@"), "@/");
        assert_eq!(normalize_import_alias("@/*"), "@/");
        assert_eq!(normalize_import_alias("#app"), "#app/");
    }

    #[tokio::test]
    async fn test_rewrites_text_files_and_skips_node_modules() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        std::fs::write(root.join("src/App.tsx"), "import x from '~/lib/zoho'\n").unwrap();
        std::fs::write(root.join("src/plain.ts"), "export const a = 1\n").unwrap();
        std::fs::write(root.join("node_modules/pkg/index.js"), "'~/keep'\n").unwrap();
        std::fs::write(root.join("logo.bin"), [0xff, 0xfe, b'~', b'/']).unwrap();

        let changed = set_import_alias(root, "@/").await.unwrap();

        assert_eq!(changed, vec![root.join("src/App.tsx")]);
        assert_eq!(
            std::fs::read_to_string(root.join("src/App.tsx")).unwrap(),
            "import x from '@/lib/zoho'\n"
        );
        assert_eq!(
            std::fs::read_to_string(root.join("node_modules/pkg/index.js")).unwrap(),
            "'~/keep'\n"
        );
        assert_eq!(
            std::fs::read(root.join("logo.bin")).unwrap(),
            vec![0xff, 0xfe, b'~', b'/']
        );
    }

    #[tokio::test]
    async fn test_default_alias_changes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.ts"), "'~/x'\n").unwrap();

        let changed = set_import_alias(tmp.path(), "~/").await.unwrap();
        assert!(changed.is_empty());
    }

    #[tokio::test]
    async fn test_walk_error_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("not-created");

        let err = set_import_alias(&missing, "@/").await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
        assert!(err.to_string().contains("Failed to walk"));
    }
}
