//! Reading, merging and writing the project's `package.json`

use super::catalog::Package;
use crate::error::{Result, ScaffoldError};
use crate::runtime::PackageManager;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const PACKAGE_JSON: &str = "package.json";

const DEPENDENCIES: &str = "dependencies";
const DEV_DEPENDENCIES: &str = "devDependencies";

/// `zcrmCliMetadata` block recorded in every scaffolded `package.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliMetadata {
    pub init_version: String,
}

/// A dependency declaration queued by an installer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub package: Package,
    pub dev: bool,
}

/// Dependencies accumulated across installers, written once at the end
#[derive(Debug, Default)]
pub struct PendingDependencies {
    entries: Vec<Dependency>,
}

impl PendingDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `packages`, as dev dependencies when `dev` is set
    pub fn add(&mut self, packages: &[Package], dev: bool) {
        self.entries
            .extend(packages.iter().map(|&package| Dependency { package, dev }));
    }

    pub fn entries(&self) -> &[Dependency] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge queued entries into a parsed manifest
    ///
    /// Later entries win over earlier ones and over whatever the manifest
    /// already declared. Both dependency maps end up sorted by name.
    pub fn merge_into(&self, manifest: &mut Map<String, Value>) {
        for dep in &self.entries {
            let (section, other) = if dep.dev {
                (DEV_DEPENDENCIES, DEPENDENCIES)
            } else {
                (DEPENDENCIES, DEV_DEPENDENCIES)
            };

            if let Some(Value::Object(other_map)) = manifest.get_mut(other) {
                other_map.remove(dep.package.name());
            }

            let section_value = manifest
                .entry(section)
                .or_insert_with(|| Value::Object(Map::new()));
            if !section_value.is_object() {
                *section_value = Value::Object(Map::new());
            }
            if let Value::Object(section_map) = section_value {
                section_map.insert(
                    dep.package.name().to_string(),
                    Value::String(dep.package.version().to_string()),
                );
            }
        }

        for section in [DEPENDENCIES, DEV_DEPENDENCIES] {
            if let Some(Value::Object(map)) = manifest.get_mut(section) {
                let mut sorted: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(&b.0));
                *map = sorted.into_iter().collect();
            }
        }
    }

    /// Merge queued entries into `<project_dir>/package.json`
    ///
    /// Leaves the file untouched when nothing is queued.
    pub async fn flush(&self, project_dir: &Path) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        let path = project_dir.join(PACKAGE_JSON);
        let mut manifest = read_package_json(&path).await?;
        self.merge_into(&mut manifest);
        write_package_json(&path, &manifest).await?;

        log::info!(
            "Added {} dependencies to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }
}

pub async fn read_package_json(path: &Path) -> Result<Map<String, Value>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ScaffoldError::MissingTemplateAsset {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(ScaffoldError::io(format!("Failed to read {}", path.display()), e)),
    };

    serde_json::from_str(&content).map_err(|source| ScaffoldError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn write_package_json(path: &Path, manifest: &Map<String, Value>) -> Result<()> {
    let mut content =
        serde_json::to_string_pretty(manifest).map_err(|source| ScaffoldError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
    content.push('\n');

    fs::write(path, content)
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to write {}", path.display()), e))
}

/// Stamp the scaffolded `package.json` with the project's identity
///
/// Sets `name`, records the CLI version under `zcrmCliMetadata`, and pins
/// `packageManager` when the manager's version is known. Bun does not support
/// that field.
pub async fn finalize_package_json(
    project_dir: &Path,
    scoped_name: &str,
    cli_version: &str,
    package_manager: PackageManager,
    package_manager_version: Option<&str>,
) -> Result<PathBuf> {
    let path = project_dir.join(PACKAGE_JSON);
    let mut manifest = read_package_json(&path).await?;

    manifest.insert("name".to_string(), Value::String(scoped_name.to_string()));

    let metadata = CliMetadata {
        init_version: cli_version.to_string(),
    };
    let metadata = serde_json::to_value(metadata).map_err(|source| ScaffoldError::Manifest {
        path: path.clone(),
        source,
    })?;
    manifest.insert("zcrmCliMetadata".to_string(), metadata);

    if package_manager != PackageManager::Bun {
        if let Some(version) = package_manager_version {
            manifest.insert(
                "packageManager".to_string(),
                Value::String(format!("{}@{}", package_manager, version)),
            );
        }
    }

    write_package_json(&path, &manifest).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_merge_adds_and_sorts() {
        let mut pkg = manifest(json!({
            "name": "widget",
            "devDependencies": { "vite": "^5.3.1", "typescript": "^5.2.2" }
        }));

        let mut pending = PendingDependencies::new();
        pending.add(&[Package::TailwindCss, Package::Autoprefixer], true);
        pending.merge_into(&mut pkg);

        let dev: Vec<&String> = pkg["devDependencies"].as_object().unwrap().keys().collect();
        assert_eq!(dev, ["autoprefixer", "tailwindcss", "typescript", "vite"]);
        assert_eq!(pkg["devDependencies"]["tailwindcss"], "^3.4.3");
        assert!(pkg.get("dependencies").is_none());
    }

    #[test]
    fn test_installer_entry_wins_on_collision() {
        let mut pkg = manifest(json!({
            "dependencies": { "prettier": "^2.0.0" },
            "devDependencies": { "eslint": "^7.0.0" }
        }));

        let mut pending = PendingDependencies::new();
        pending.add(&[Package::Prettier, Package::Eslint], true);
        pending.merge_into(&mut pkg);

        assert_eq!(pkg["devDependencies"]["eslint"], "^8.57.0");
        assert_eq!(pkg["devDependencies"]["prettier"], "^3.3.2");
        assert!(pkg["dependencies"].get("prettier").is_none());
    }

    #[test]
    fn test_merge_keeps_top_level_order() {
        let mut pkg = manifest(json!({
            "name": "widget",
            "private": true,
            "scripts": { "dev": "vite" }
        }));

        let mut pending = PendingDependencies::new();
        pending.add(&[Package::Eslint], true);
        pending.merge_into(&mut pkg);

        let keys: Vec<&String> = pkg.keys().collect();
        assert_eq!(keys, ["name", "private", "scripts", "devDependencies"]);
    }

    #[tokio::test]
    async fn test_flush_without_entries_leaves_file_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let raw = "{\"name\":\"untouched\"}";
        std::fs::write(tmp.path().join(PACKAGE_JSON), raw).unwrap();

        PendingDependencies::new().flush(tmp.path()).await.unwrap();

        let content = std::fs::read_to_string(tmp.path().join(PACKAGE_JSON)).unwrap();
        assert_eq!(content, raw);
    }

    #[tokio::test]
    async fn test_flush_requires_package_json() {
        let tmp = tempfile::tempdir().unwrap();
        let mut pending = PendingDependencies::new();
        pending.add(&[Package::Eslint], true);

        let err = pending.flush(tmp.path()).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingTemplateAsset { .. }));
    }

    #[tokio::test]
    async fn test_finalize_sets_identity_fields() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(PACKAGE_JSON),
            "{\n  \"name\": \"template\",\n  \"private\": true\n}\n",
        )
        .unwrap();

        finalize_package_json(
            tmp.path(),
            "@acme/widget",
            "0.1.0",
            PackageManager::Pnpm,
            Some("9.1.0"),
        )
        .await
        .unwrap();

        let content = std::fs::read_to_string(tmp.path().join(PACKAGE_JSON)).unwrap();
        let pkg: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(pkg["name"], "@acme/widget");
        assert_eq!(pkg["zcrmCliMetadata"]["initVersion"], "0.1.0");
        assert_eq!(pkg["packageManager"], "pnpm@9.1.0");
        assert!(content.ends_with("}\n"));
    }

    #[tokio::test]
    async fn test_finalize_skips_package_manager_for_bun() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(PACKAGE_JSON), "{\"name\": \"template\"}").unwrap();

        finalize_package_json(
            tmp.path(),
            "widget",
            "0.1.0",
            PackageManager::Bun,
            Some("1.1.12"),
        )
        .await
        .unwrap();

        let content = std::fs::read_to_string(tmp.path().join(PACKAGE_JSON)).unwrap();
        let pkg: Value = serde_json::from_str(&content).unwrap();
        assert!(pkg.get("packageManager").is_none());
    }
}
