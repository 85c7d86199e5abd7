//! GitHub workflow that bumps the version and packages the widget

use super::InstallContext;
use crate::error::Result;
use crate::templates::copy_dir;

pub(super) async fn install(cx: &mut InstallContext<'_>) -> Result<()> {
    log::info!("Installing release workflow");

    let source = cx.store.resolve_extra("github")?;
    let copied = copy_dir(&source, &cx.project.project_dir.join(".github")).await?;
    log::debug!("Copied {} workflow file(s)", copied.len());

    Ok(())
}
