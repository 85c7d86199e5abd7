//! Non-interactive create flow with cliclack status output

use super::title::render_title;
use crate::alias::set_import_alias;
use crate::error::ScaffoldError;
use crate::installers::{Feature, FeatureSelection};
use crate::manifest::finalize_package_json;
use crate::project::{
    parse_name_and_path, validate_app_name, validate_import_alias, Framework, ProjectContext,
    Versioning, DEFAULT_APP_NAME, DEFAULT_IMPORT_ALIAS,
};
use crate::runtime::{detect_package_manager, package_manager_version, PackageManager};
use crate::scaffold::Scaffolder;
use crate::templates::TemplateStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Options for one `create` run, built once from the command line
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Project name and directory (`dir/@scope/name` is allowed)
    pub name: String,

    pub framework: Framework,

    /// Install Tailwind CSS
    pub tailwind: bool,

    pub versioning: Versioning,

    /// Import alias replacing the template's `~/`
    pub import_alias: String,

    /// Template store override
    pub template_dir: Option<PathBuf>,
}

impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
            framework: Framework::React,
            tailwind: true,
            versioning: Versioning::Basic,
            import_alias: DEFAULT_IMPORT_ALIAS.to_string(),
            template_dir: None,
        }
    }
}

impl CreateArgs {
    /// Optional features these options turn on
    pub fn selection(&self) -> FeatureSelection {
        let mut features = Vec::new();
        if self.tailwind {
            features.push(Feature::Tailwind);
        }
        if self.versioning == Versioning::Basic {
            features.push(Feature::Versioning);
        }
        FeatureSelection::new(features)
    }
}

/// Scaffold a project and report progress
///
/// Failures are reported here, so the returned exit code is the only signal
/// the caller needs. `Err` is left for a terminal that cannot be written to.
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<ExitCode> {
    let package_manager = detect_package_manager();
    render_title(package_manager);
    cliclack::intro("create-zcrm-widget")?;

    let (project, store) = match prepare(&args, package_manager) {
        Ok(prepared) => prepared,
        Err(err) => {
            report_failure(None, &err)?;
            return Ok(ExitCode::FAILURE);
        }
    };
    cliclack::log::info(format!("Using templates from {}", store.root().display()))?;

    match create_project(&project, &args, store, cli_version).await {
        Ok(()) => {
            print_next_steps(&project)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report_failure(Some(&project.project_dir), &err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Validate the options and resolve everything needed before writing
fn prepare(
    args: &CreateArgs,
    package_manager: PackageManager,
) -> Result<(ProjectContext, TemplateStore)> {
    validate_app_name(&args.name).map_err(|msg| anyhow::anyhow!("{}: {}", args.name, msg))?;
    validate_import_alias(&args.import_alias)
        .map_err(|msg| anyhow::anyhow!("{}: {}", args.import_alias, msg))?;

    let (scoped_name, app_dir) = parse_name_and_path(&args.name)?;
    // Dependency installation is left to the user.
    let project = ProjectContext::new(
        &app_dir,
        &scoped_name,
        package_manager,
        args.framework,
        true,
    )?;

    let store = TemplateStore::locate(args.template_dir.as_deref())?;
    Ok((project, store))
}

async fn create_project(
    project: &ProjectContext,
    args: &CreateArgs,
    store: TemplateStore,
    cli_version: &str,
) -> Result<()> {
    let selection = args.selection();

    let spinner = cliclack::spinner();
    spinner.start(format!(
        "Scaffolding a {} widget in {}...",
        project.framework.display_name(),
        project.project_dir.display()
    ));

    let project_dir = match Scaffolder::new(store).scaffold(project, &selection).await {
        Ok(dir) => dir,
        Err(e) => {
            spinner.stop("Scaffolding failed");
            return Err(e.into());
        }
    };
    spinner.stop(format!("Scaffolded {}", project_dir.display()));

    let pm_version = package_manager_version(project.package_manager, &project_dir);
    finalize_package_json(
        &project_dir,
        &project.scoped_name,
        cli_version,
        project.package_manager,
        pm_version.as_deref(),
    )
    .await
    .context("Failed to update package.json")?;

    if args.import_alias != DEFAULT_IMPORT_ALIAS {
        let changed = set_import_alias(&project_dir, &args.import_alias)
            .await
            .context("Failed to update the import alias")?;
        cliclack::log::info(format!(
            "Import alias set to {} in {} file(s)",
            args.import_alias,
            changed.len()
        ))?;
    }

    if selection.contains(Feature::Tailwind) {
        cliclack::log::success("Tailwind CSS configured")?;
    }
    if selection.contains(Feature::Versioning) {
        cliclack::log::success("Release workflow added to .github/workflows")?;
    }

    Ok(())
}

fn report_failure(project_dir: Option<&Path>, err: &anyhow::Error) -> Result<()> {
    cliclack::log::error(format!("{:#}", err))?;

    let occupied = matches!(
        err.downcast_ref::<ScaffoldError>(),
        Some(ScaffoldError::DestinationNotEmpty { .. })
    );
    if let Some(dir) = project_dir.filter(|dir| !occupied && dir.exists()) {
        cliclack::log::warning(format!(
            "{} may be partially created. Delete it before running again.",
            dir.display()
        ))?;
    }

    cliclack::outro_cancel("Aborting installation...")?;
    Ok(())
}

fn print_next_steps(project: &ProjectContext) -> Result<()> {
    let steps = project.next_steps();

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = CreateArgs::default().selection();
        assert!(selection.contains(Feature::Tailwind));
        assert!(selection.contains(Feature::Versioning));
    }

    #[test]
    fn test_selection_without_optional_features() {
        let args = CreateArgs {
            tailwind: false,
            versioning: Versioning::None,
            ..CreateArgs::default()
        };
        assert_eq!(args.selection(), FeatureSelection::empty());
    }

    fn bundled_args(name: &str) -> CreateArgs {
        CreateArgs {
            name: name.to_string(),
            template_dir: Some(TemplateStore::bundled_root()),
            ..CreateArgs::default()
        }
    }

    #[test]
    fn test_prepare_rejects_invalid_name() {
        let err = prepare(&bundled_args("Bad Name"), PackageManager::Npm).unwrap_err();
        assert!(err.to_string().starts_with("Bad Name: App name must"));
    }

    #[test]
    fn test_prepare_rejects_relative_import_alias() {
        let args = CreateArgs {
            import_alias: "./src".to_string(),
            ..bundled_args("widget")
        };
        let err = prepare(&args, PackageManager::Npm).unwrap_err();
        assert!(err.to_string().contains("can't start with"));
    }

    #[test]
    fn test_prepare_reports_missing_template_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let args = CreateArgs {
            template_dir: Some(tmp.path().join("not-created")),
            ..bundled_args("widget")
        };
        let err = prepare(&args, PackageManager::Npm).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::MissingTemplateAsset { .. })
        ));
    }

    #[test]
    fn test_prepare_resolves_project() {
        let (project, store) = prepare(&bundled_args("apps/@acme/widget"), PackageManager::Pnpm)
            .unwrap();
        assert_eq!(project.scoped_name, "@acme/widget");
        assert!(project.project_dir.ends_with("apps/widget"));
        assert!(project.no_install);
        assert_eq!(store.root(), TemplateStore::bundled_root());
    }
}
