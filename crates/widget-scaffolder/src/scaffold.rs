//! Scaffold orchestration
//!
//! Runs the linear pipeline: copy the base template, run every in-use
//! installer in registry order, flush queued dependencies into `package.json`.
//! Any failure aborts immediately. Nothing is rolled back, so a failed run can
//! leave a partially written project directory behind.

use crate::error::Result;
use crate::installers::{build_registry, FeatureSelection, InstallContext, InstallerRecord};
use crate::manifest::PendingDependencies;
use crate::project::ProjectContext;
use crate::templates::{copy_dir, ensure_empty_destination, TemplateStore};
use std::path::PathBuf;

/// Creates projects from a template store
#[derive(Debug, Clone)]
pub struct Scaffolder {
    store: TemplateStore,
}

impl Scaffolder {
    pub fn new(store: TemplateStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Scaffold `project` with the installers `selection` turns on
    pub async fn scaffold(
        &self,
        project: &ProjectContext,
        selection: &FeatureSelection,
    ) -> Result<PathBuf> {
        let registry = build_registry(selection);
        self.run(project, &registry).await
    }

    /// Scaffold `project` with an explicit registry
    pub async fn run(
        &self,
        project: &ProjectContext,
        registry: &[InstallerRecord],
    ) -> Result<PathBuf> {
        let project_dir = &project.project_dir;

        // Nothing is written until both checks pass.
        ensure_empty_destination(project_dir).await?;
        let base = self.store.resolve_base_template(project.framework)?;

        log::info!(
            "Copying {} template into {}",
            project.framework.display_name(),
            project_dir.display()
        );
        let copied = copy_dir(&base, project_dir).await?;
        log::debug!("Copied {} base template files", copied.len());

        let mut dependencies = PendingDependencies::new();
        {
            let mut cx = InstallContext {
                project,
                store: &self.store,
                dependencies: &mut dependencies,
            };

            for record in registry.iter().filter(|r| r.in_use) {
                record.apply(&mut cx).await?;
            }
        }

        dependencies.flush(project_dir).await?;

        Ok(project_dir.clone())
    }
}
