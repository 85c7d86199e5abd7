//! Project identity: framework choice, names, and the per-run context

use crate::error::{self, ScaffoldError};
use crate::runtime::PackageManager;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Directory name used when no project name is given
pub const DEFAULT_APP_NAME: &str = "my-zcrm-widget";

/// Import alias the base templates are written with
pub const DEFAULT_IMPORT_ALIAS: &str = "~/";

/// Supported UI frameworks
///
/// Each variant has a matching `base/<name>` subtree in the template store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Framework {
    React,
    Vue,
}

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::React, Framework::Vue];

    /// Name of the framework's subtree under `base/`
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Release workflow choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Versioning {
    /// No workflow; bring your own
    None,
    /// GitHub workflow that bumps the version and builds the widget
    Basic,
}

/// Read-only bundle of run parameters handed to every installer
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute path of the project being created
    pub project_dir: PathBuf,
    /// Directory name as typed by the user (without scope segments)
    pub project_name: String,
    /// npm package name, possibly scoped (`@mono/app`)
    pub scoped_name: String,
    pub package_manager: PackageManager,
    pub framework: Framework,
    /// Dependencies will not be installed by this run
    pub no_install: bool,
}

impl ProjectContext {
    /// Build a context for `project_name`, resolved against the current directory
    pub fn new(
        project_name: &str,
        scoped_name: &str,
        package_manager: PackageManager,
        framework: Framework,
        no_install: bool,
    ) -> error::Result<Self> {
        let current_dir = current_dir()?;
        let project_dir = if project_name == "." {
            current_dir
        } else if Path::new(project_name).is_absolute() {
            PathBuf::from(project_name)
        } else {
            current_dir.join(project_name)
        };

        Ok(Self {
            project_dir,
            project_name: project_name.to_string(),
            scoped_name: scoped_name.to_string(),
            package_manager,
            framework,
            no_install,
        })
    }

    /// Instructions printed once the project exists
    pub fn next_steps(&self) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_ref() != Some(&self.project_dir) {
            steps.push(format!("cd {}", self.project_name));
        }
        if self.no_install {
            steps.push(self.package_manager.install_command());
        }
        steps.push(self.package_manager.run_command("dev"));

        steps
    }
}

fn current_dir() -> error::Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| ScaffoldError::io("Failed to read the current directory", e))
}

fn remove_trailing_slash(input: &str) -> &str {
    let mut trimmed = input;
    while trimmed.len() > 1 && trimmed.ends_with('/') {
        trimmed = &trimmed[..trimmed.len() - 1];
    }
    trimmed
}

/// Split user input into `(scoped package name, project directory)`
///
/// `dir/@mono/app` yields `("@mono/app", "dir/app")`; `.` takes the name of
/// the current directory.
pub fn parse_name_and_path(input: &str) -> error::Result<(String, String)> {
    Ok(parse_name_and_path_in(input, &current_dir()?))
}

fn parse_name_and_path_in(input: &str, current_dir: &Path) -> (String, String) {
    let input = remove_trailing_slash(input);
    let paths: Vec<&str> = input.split('/').collect();

    let mut app_name = paths.last().copied().unwrap_or_default().to_string();
    if app_name == "." {
        app_name = current_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    if let Some(scope_idx) = paths.iter().position(|p| p.starts_with('@')) {
        app_name = paths[scope_idx..].join("/");
    }

    let path = paths
        .iter()
        .filter(|p| !p.starts_with('@'))
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    (app_name, path)
}

fn app_name_pattern() -> &'static regex::Regex {
    static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        regex::Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
            .expect("app name pattern is valid")
    })
}

/// Check that the input yields a valid npm package name
pub fn validate_app_name(input: &str) -> Result<(), &'static str> {
    let input = remove_trailing_slash(input);
    if input == "." {
        return Ok(());
    }

    let paths: Vec<&str> = input.split('/').collect();
    let app_name = match paths.iter().position(|p| p.starts_with('@')) {
        Some(idx) => paths[idx..].join("/"),
        None => paths.last().copied().unwrap_or_default().to_string(),
    };

    if app_name_pattern().is_match(&app_name) {
        Ok(())
    } else {
        Err("App name must consist of only lowercase alphanumeric characters, '-', and '_'")
    }
}

pub fn validate_import_alias(input: &str) -> Result<(), &'static str> {
    if input.starts_with('.') || input.starts_with('/') {
        Err("Import alias can't start with '.' or '/'")
    } else if input.is_empty() {
        Err("Import alias can't be empty")
    } else {
        Ok(())
    }
}
