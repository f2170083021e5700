pub mod config;
pub mod report;
pub mod resolve;
pub mod tree;

use crate::cli::{Cli, CliError, Commands, OutputFormat, OutputFormatter};
use crate::config::Config;
use crate::error::SceneError;
use crate::routing::{FamilyProfile, FamilyRegistry};
use crate::scene::SceneDocument;
use clap::ValueEnum;
use log::debug;
use std::path::{Path, PathBuf};

/// CLI command execution context
pub struct CliContext {
    pub config: Config,
    /// Config file the configuration came from, if any
    pub config_path: Option<PathBuf>,
    pub registry: FamilyRegistry,
    pub output: OutputFormatter,
    /// Profile forced with `--family`
    pub family: Option<String>,
}

impl CliContext {
    pub fn new(cli: &Cli, config: Config, config_path: Option<PathBuf>) -> Result<Self, CliError> {
        let registry = config.registry()?;
        if let Some(family) = &cli.family {
            registry.profile(family)?;
        }

        let format = match cli.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.default_format, true)
                .map_err(|e| -> CliError { e.into() })?,
        };
        let no_color = cli.no_color || !config.color;

        Ok(Self {
            config,
            config_path,
            registry,
            output: OutputFormatter::new(format, no_color),
            family: cli.family.clone(),
        })
    }

    /// Reads and parses a scene file. The read is the only suspension point;
    /// parsing runs to completion on the buffered text.
    pub async fn load_scene(&self, path: &Path) -> Result<SceneDocument, CliError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SceneError::ReadError {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(SceneDocument::parse(&content))
    }

    /// Profile for a scene: the `--family` one if given, else by version tag.
    pub fn profile_for(&self, scene: &SceneDocument) -> Result<&FamilyProfile, SceneError> {
        match &self.family {
            Some(name) => self.registry.profile(name),
            None => self.registry.for_version(&scene.version),
        }
    }
}

/// Trait for CLI command execution
#[async_trait::async_trait]
pub trait CliCommand {
    async fn execute(&self, ctx: &CliContext) -> Result<(), CliError>;
}

#[async_trait::async_trait]
impl CliCommand for Commands {
    async fn execute(&self, ctx: &CliContext) -> Result<(), CliError> {
        match self {
            Commands::Report { file } => report::ReportCommand { file: file.clone() }.execute(ctx).await,
            Commands::Tree { file } => tree::TreeCommand { file: file.clone() }.execute(ctx).await,
            Commands::Resolve { file, ids } => {
                resolve::ResolveCommand {
                    file: file.clone(),
                    ids: ids.clone(),
                }
                .execute(ctx)
                .await
            }
            Commands::Config { subcommand } => subcommand.execute(ctx).await,
        }
    }
}
