//! Feature installers and the registry that decides which of them run
//!
//! Each installer mutates an already-copied project directory: it queues
//! dependencies, copies fragments from the template store's `extras/`, and
//! patches files the base template produced.

mod env_vars;
mod eslint;
pub mod patch;
mod tailwind;
mod versioning;

use crate::error::Result;
use crate::manifest::PendingDependencies;
use crate::project::ProjectContext;
use crate::templates::TemplateStore;
use std::collections::BTreeSet;
use std::fmt;

/// Optional and always-on project features
///
/// Declaration order is registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Tailwind,
    EnvVariables,
    Eslint,
    Versioning,
}

impl Feature {
    /// Every feature, in the order installers run
    pub const ALL: [Feature; 4] = [
        Feature::Tailwind,
        Feature::EnvVariables,
        Feature::Eslint,
        Feature::Versioning,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Feature::Tailwind => "tailwind",
            Feature::EnvVariables => "envVariables",
            Feature::Eslint => "eslint",
            Feature::Versioning => "versioning",
        }
    }

    /// Installed whether or not the user selected it
    pub fn is_always_on(&self) -> bool {
        matches!(self, Feature::EnvVariables | Feature::Eslint)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Features chosen by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSelection {
    features: BTreeSet<Feature>,
}

impl FeatureSelection {
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Self {
        Self {
            features: features.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

/// Everything an installer may touch
pub struct InstallContext<'a> {
    pub project: &'a ProjectContext,
    pub store: &'a TemplateStore,
    pub dependencies: &'a mut PendingDependencies,
}

/// One registry entry: a feature and whether it runs this time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallerRecord {
    pub feature: Feature,
    pub in_use: bool,
}

impl InstallerRecord {
    /// Run this record's installer
    pub async fn apply(&self, cx: &mut InstallContext<'_>) -> Result<()> {
        match self.feature {
            Feature::Tailwind => tailwind::install(cx).await,
            Feature::EnvVariables => env_vars::install(cx).await,
            Feature::Eslint => eslint::install(cx).await,
            Feature::Versioning => versioning::install(cx).await,
        }
    }
}

/// Build the registry for a selection
///
/// Entries follow [`Feature::ALL`], never the selection's order. No I/O.
pub fn build_registry(selection: &FeatureSelection) -> Vec<InstallerRecord> {
    Feature::ALL
        .iter()
        .map(|&feature| InstallerRecord {
            feature,
            in_use: feature.is_always_on() || selection.contains(feature),
        })
        .collect()
}
