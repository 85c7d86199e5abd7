//! Runtime environment detection
//!
//! This module provides package manager detection (npm, pnpm, Yarn, Bun)
//! and version lookup for the detected manager.

pub mod package_manager;

pub use package_manager::{detect_package_manager, package_manager_version, PackageManager};
