//! Dependency catalog and `package.json` handling

pub mod catalog;
pub mod package_json;

pub use catalog::Package;
pub use package_json::{finalize_package_json, Dependency, PendingDependencies, PACKAGE_JSON};
