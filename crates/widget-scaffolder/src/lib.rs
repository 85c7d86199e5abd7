//! Widget Scaffolder - Core library for the `create-zcrm-widget` CLI
//!
//! This library creates Zoho CRM widget projects from a bundled template
//! store. A run copies the base skeleton for the chosen framework, applies the
//! feature installers (Tailwind CSS, environment variables, ESLint, release
//! workflow) and finally writes the collected dependencies to `package.json`.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template store lookup, copying, text patches, `package.json` merging
//! - **Layer 2: Workflow Orchestration** - Installer registry and the `Scaffolder` pipeline
//! - **Layer 3: CLI Interface** - Optional cliclack status output (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based create flow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use widget_scaffolder::{
//!     Feature, FeatureSelection, Framework, PackageManager, ProjectContext, Scaffolder,
//!     TemplateStore,
//! };
//!
//! let project = ProjectContext::new("my-widget", "my-widget", PackageManager::Npm, Framework::React, true)?;
//! let scaffolder = Scaffolder::new(TemplateStore::locate(None)?);
//! let dir = scaffolder
//!     .scaffold(&project, &FeatureSelection::new([Feature::Tailwind]))
//!     .await?;
//! ```

pub mod alias;
pub mod error;
pub mod installers;
pub mod manifest;
pub mod project;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{ErrorKind, Result, ScaffoldError};
pub use installers::{build_registry, Feature, FeatureSelection, InstallerRecord};
pub use project::{Framework, ProjectContext, Versioning};
pub use runtime::PackageManager;
pub use scaffold::Scaffolder;
pub use templates::TemplateStore;

#[cfg(feature = "tui")]
pub use tui::run;
