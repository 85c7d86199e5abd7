//! Template store lookup and copying
//!
//! This module provides:
//! - The template store (base skeletons per framework, extras fragments)
//! - Recursive, deterministic directory copying

pub mod copier;
pub mod store;

pub use copier::{copy_dir, copy_file, ensure_empty_destination};
pub use store::{TemplateStore, TEMPLATE_DIR_ENV};
