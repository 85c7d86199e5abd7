//! Tailwind CSS with PostCSS and Prettier

use super::patch::replace_in_file;
use super::{Feature, InstallContext};
use crate::error::Result;
use crate::manifest::Package;
use crate::project::{Framework, ProjectContext};
use crate::templates::copy_file;

const DEV_DEPENDENCIES: &[Package] = &[
    Package::TailwindCss,
    Package::PostCss,
    Package::Autoprefixer,
    Package::Prettier,
    Package::PrettierPluginTailwindCss,
];

/// `(extras source, project destination)`
const EXTRAS: &[(&str, &str)] = &[
    ("config/tailwind.config.ts", "tailwind.config.ts"),
    ("config/postcss.config.cjs", "postcss.config.cjs"),
    ("config/_prettier.config.js", "prettier.config.js"),
    ("src/styles/globals.css", "src/styles/globals.css"),
];

const GLOBALS_IMPORT: &str = "import './styles/globals.css'";

const REACT_ENTRY: &str = "src/main.tsx";
const REACT_CSS_IMPORT: &str = "import './index.css'";

const VUE_ENTRY: &str = "src/main.ts";
const VUE_CSS_IMPORT: &str = "import './assets/main.css'";

const TAILWIND_CONFIG: &str = "tailwind.config.ts";
const PLUGINS_MARKER: &str = "plugins: [],";
const VUE_PURGE: &str = "plugins: [],
  purge: ['./index.html', './src/**/*.{vue,js,ts,jsx,tsx}'],";

pub(super) async fn install(cx: &mut InstallContext<'_>) -> Result<()> {
    log::info!("Installing Tailwind CSS");
    cx.dependencies.add(DEV_DEPENDENCIES, true);

    for (source, dest) in EXTRAS {
        let source = cx.store.resolve_extra(source)?;
        copy_file(&source, &cx.project.project_dir.join(dest)).await?;
    }

    handle_framework(cx.project).await
}

/// Point the entry file at the Tailwind stylesheet
async fn handle_framework(project: &ProjectContext) -> Result<()> {
    let dir = &project.project_dir;

    match project.framework {
        Framework::React => {
            replace_in_file(
                Feature::Tailwind,
                &dir.join(REACT_ENTRY),
                REACT_CSS_IMPORT,
                GLOBALS_IMPORT,
            )
            .await?;
        }
        Framework::Vue => {
            replace_in_file(
                Feature::Tailwind,
                &dir.join(VUE_ENTRY),
                VUE_CSS_IMPORT,
                GLOBALS_IMPORT,
            )
            .await?;
            replace_in_file(
                Feature::Tailwind,
                &dir.join(TAILWIND_CONFIG),
                PLUGINS_MARKER,
                VUE_PURGE,
            )
            .await?;
        }
    }

    Ok(())
}
