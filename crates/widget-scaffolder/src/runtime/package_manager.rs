//! Package manager detection for npm, pnpm, Yarn, and Bun

use std::fmt;
use std::path::Path;
use std::process::Command;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Binary name, also used in `package.json`'s `packageManager` field
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Command that installs the project's dependencies
    pub fn install_command(&self) -> String {
        match self {
            PackageManager::Yarn => "yarn".to_string(),
            pm => format!("{} install", pm.as_str()),
        }
    }

    /// Command that runs a package.json script
    pub fn run_command(&self, script: &str) -> String {
        match self {
            PackageManager::Npm | PackageManager::Bun => {
                format!("{} run {}", self.as_str(), script)
            }
            PackageManager::Pnpm | PackageManager::Yarn => format!("{} {}", self.as_str(), script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the package manager that launched the CLI
///
/// npm, pnpm, Yarn and Bun all set `npm_config_user_agent` for the processes
/// they spawn. Falls back to npm.
pub fn detect_package_manager() -> PackageManager {
    let user_agent = std::env::var("npm_config_user_agent").ok();
    from_user_agent(user_agent.as_deref())
}

fn from_user_agent(user_agent: Option<&str>) -> PackageManager {
    match user_agent {
        Some(ua) if ua.starts_with("yarn") => PackageManager::Yarn,
        Some(ua) if ua.starts_with("pnpm") => PackageManager::Pnpm,
        Some(ua) if ua.starts_with("bun") => PackageManager::Bun,
        _ => PackageManager::Npm,
    }
}

/// Version of the package manager as seen from `project_dir`, if it can be run
///
/// Runs inside the project so that a corepack pin there is honored.
pub fn package_manager_version(pm: PackageManager, project_dir: &Path) -> Option<String> {
    let output = Command::new(pm.as_str())
        .arg("-v")
        .current_dir(project_dir)
        .output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if version.is_empty() {
                None
            } else {
                Some(version)
            }
        }
        _ => {
            log::warn!("Could not determine the {} version", pm);
            None
        }
    }
}
