//! Template store lookup
//!
//! The store is a plain directory:
//! - `base/<framework>/` holds one project skeleton per framework
//! - `extras/` holds fragments that installers copy in on demand

use crate::error::{Result, ScaffoldError};
use crate::project::Framework;
use std::path::{Path, PathBuf};

/// Environment variable for overriding the template store location
pub const TEMPLATE_DIR_ENV: &str = "ZCRM_TEMPLATE_DIR";

/// Read-only view over a template store directory
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Use the store rooted at `root` as-is
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store shipped in the workspace, as seen at build time
    pub fn bundled_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
    }

    /// Find the template store
    ///
    /// Tries, in order: the explicit override, `ZCRM_TEMPLATE_DIR`, a
    /// `templates/` directory next to the executable, then the bundled store.
    pub fn locate(override_dir: Option<&Path>) -> Result<Self> {
        if let Some(dir) = override_dir {
            if !dir.is_dir() {
                return Err(ScaffoldError::MissingTemplateAsset {
                    path: dir.to_path_buf(),
                });
            }
            return Ok(Self::new(dir));
        }

        let mut candidates = Vec::new();
        if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
            candidates.push(PathBuf::from(dir));
        }
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join("templates"));
        }
        candidates.push(Self::bundled_root());

        match candidates.iter().find(|c| c.join("base").is_dir()) {
            Some(root) => {
                log::debug!("Using template store at {}", root.display());
                Ok(Self::new(root.clone()))
            }
            None => Err(ScaffoldError::MissingTemplateAsset {
                path: Self::bundled_root(),
            }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the skeleton for `framework`
    pub fn resolve_base_template(&self, framework: Framework) -> Result<PathBuf> {
        let path = self.root.join("base").join(framework.as_str());
        if path.is_dir() {
            Ok(path)
        } else {
            Err(ScaffoldError::UnknownFramework {
                framework,
                root: self.root.clone(),
            })
        }
    }

    /// Path of a fragment under `extras/`
    pub fn resolve_extra(&self, relative_path: &str) -> Result<PathBuf> {
        let path = self.root.join("extras").join(relative_path);
        if path.exists() {
            Ok(path)
        } else {
            Err(ScaffoldError::MissingTemplateAsset { path })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_bundled_store_has_every_framework() {
        let store = TemplateStore::new(TemplateStore::bundled_root());
        for framework in Framework::ALL {
            assert!(store.resolve_base_template(framework).is_ok());
        }
    }

    #[test]
    fn test_missing_framework_subtree() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("base/react")).unwrap();

        let store = TemplateStore::new(tmp.path());
        assert!(store.resolve_base_template(Framework::React).is_ok());
        let err = store.resolve_base_template(Framework::Vue).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFramework);
    }

    #[test]
    fn test_missing_extra() {
        let store = TemplateStore::new(TemplateStore::bundled_root());
        assert!(store.resolve_extra("config/tailwind.config.ts").is_ok());
        let err = store.resolve_extra("config/does-not-exist.js").unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingTemplateAsset { .. }));
    }

    #[test]
    fn test_locate_rejects_missing_override() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert!(TemplateStore::locate(Some(&missing)).is_err());
        assert!(TemplateStore::locate(Some(tmp.path())).is_ok());
    }
}
