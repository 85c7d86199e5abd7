//! ESLint configuration per framework

use super::InstallContext;
use crate::error::Result;
use crate::manifest::Package;
use crate::project::Framework;
use crate::templates::copy_file;

fn dev_dependencies(framework: Framework) -> &'static [Package] {
    match framework {
        Framework::React => &[
            Package::Eslint,
            Package::TypescriptEslintParser,
            Package::TypescriptEslintPlugin,
            Package::EslintPluginReactHooks,
            Package::EslintPluginReactRefresh,
        ],
        Framework::Vue => &[
            Package::Eslint,
            Package::EslintPluginVue,
            Package::VueEslintConfigTypescript,
        ],
    }
}

pub(super) async fn install(cx: &mut InstallContext<'_>) -> Result<()> {
    let framework = cx.project.framework;
    log::info!("Installing ESLint config for {}", framework.display_name());

    cx.dependencies.add(dev_dependencies(framework), true);

    let source = cx
        .store
        .resolve_extra(&format!("config/eslint/{}.cjs", framework.as_str()))?;
    copy_file(&source, &cx.project.project_dir.join(".eslintrc.cjs")).await?;

    Ok(())
}
