use crate::cli::commands::{CliCommand, CliContext};
use crate::cli::CliError;
use crate::report::build_report;
use log::info;
use std::path::PathBuf;

/// Prints every report table for one scene file.
pub struct ReportCommand {
    pub file: PathBuf,
}

#[async_trait::async_trait]
impl CliCommand for ReportCommand {
    async fn execute(&self, ctx: &CliContext) -> Result<(), CliError> {
        let scene = ctx.load_scene(&self.file).await?;
        let profile = ctx.profile_for(&scene)?;
        info!(
            "Scene '{}' (version {}) using profile {}",
            scene.name, scene.version, profile.name
        );

        let report = build_report(&scene, profile)?;
        ctx.output.print(&report)
    }
}
