use crate::cli::commands::{CliCommand, CliContext};
use crate::cli::output::{create_table, TableDisplay};
use crate::cli::CliError;
use crate::routing::Resolver;
use crate::table_row;
use comfy_table::Table;
use serde::Serialize;
use std::path::PathBuf;

/// Resolves individual channel source ids against one scene file.
pub struct ResolveCommand {
    pub file: PathBuf,
    pub ids: Vec<u32>,
}

#[async_trait::async_trait]
impl CliCommand for ResolveCommand {
    async fn execute(&self, ctx: &CliContext) -> Result<(), CliError> {
        let scene = ctx.load_scene(&self.file).await?;
        let profile = ctx.profile_for(&scene)?;
        let resolver = Resolver::new(&scene, profile);

        let mut sources = Vec::with_capacity(self.ids.len());
        for &id in &self.ids {
            sources.push(ResolvedSource {
                id,
                input: resolver.physical_input(id)?,
            });
        }

        ctx.output.print(&ResolvedSources {
            profile: profile.name.clone(),
            sources,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ResolvedSources {
    pub profile: String,
    pub sources: Vec<ResolvedSource>,
}

#[derive(Debug, Serialize)]
pub struct ResolvedSource {
    pub id: u32,
    pub input: String,
}

impl TableDisplay for ResolvedSources {
    fn to_tables(&self, _color: bool) -> Vec<(Option<String>, Table)> {
        let mut table = create_table(&["id".to_string(), "input".to_string()]);
        for source in &self.sources {
            table_row!(table, source.id, source.input);
        }
        vec![(Some(format!("Profile {}", self.profile)), table)]
    }

    fn to_csv<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<(), CliError> {
        writer.write_record(["id", "input"])?;
        for source in &self.sources {
            writer.write_record([source.id.to_string(), source.input.clone()])?;
        }
        Ok(())
    }
}
