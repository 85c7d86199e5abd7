//! `.env` scaffolding

use super::patch::append_line_if_missing;
use super::{Feature, InstallContext};
use crate::error::Result;
use crate::templates::copy_file;

const ENV_EXAMPLE: &str = "config/_env.example";

pub(super) async fn install(cx: &mut InstallContext<'_>) -> Result<()> {
    log::info!("Installing environment variables");
    let dir = &cx.project.project_dir;

    let source = cx.store.resolve_extra(ENV_EXAMPLE)?;
    copy_file(&source, &dir.join(".env.example")).await?;
    copy_file(&source, &dir.join(".env")).await?;

    append_line_if_missing(Feature::EnvVariables, &dir.join(".gitignore"), ".env").await?;

    Ok(())
}
