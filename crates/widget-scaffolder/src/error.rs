//! Error types for the scaffolding pipeline

use crate::installers::Feature;
use crate::project::Framework;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("No base template for framework '{framework}' in {}", .root.display())]
    UnknownFramework { framework: Framework, root: PathBuf },

    /// The bundled template store is incomplete.
    #[error("Template asset missing: {}. The template store is incomplete; reinstall the CLI.", .path.display())]
    MissingTemplateAsset { path: PathBuf },

    /// A file an installer patches was not produced by the base template.
    #[error("The {installer} installer expected {} in the project, but it is missing.", .path.display())]
    MissingPatchTarget { installer: Feature, path: PathBuf },

    #[error("Cannot proceed: destination '{}' already exists and is not empty.", .path.display())]
    DestinationNotEmpty { path: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`ScaffoldError`]. None of these are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Framework enum and template store disagree.
    UnknownFramework,
    /// Something the template store should have shipped is not there.
    MissingTemplateAsset,
    /// Environment fault: permissions, occupied destination, disk.
    Io,
}

impl ScaffoldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScaffoldError::UnknownFramework { .. } => ErrorKind::UnknownFramework,
            ScaffoldError::MissingTemplateAsset { .. }
            | ScaffoldError::MissingPatchTarget { .. }
            | ScaffoldError::Manifest { .. } => ErrorKind::MissingTemplateAsset,
            ScaffoldError::DestinationNotEmpty { .. } | ScaffoldError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
