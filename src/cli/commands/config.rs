use crate::cli::commands::{CliCommand, CliContext};
use crate::cli::output::{create_table, MessageType, TableDisplay};
use crate::cli::{CliError, ConfigCommands, OutputFormat};
use crate::config::{default_config_path, write_default_config};
use crate::routing::{FamilyRegistry, VersionRule};
use crate::table_row;
use comfy_table::Table;
use serde::Serialize;

#[async_trait::async_trait]
impl CliCommand for ConfigCommands {
    async fn execute(&self, ctx: &CliContext) -> Result<(), CliError> {
        match self {
            ConfigCommands::Show => match ctx.output.format() {
                OutputFormat::Json => ctx.output.print_json(&ctx.config),
                _ => {
                    print!("{}", ctx.config.to_toml_string()?);
                    Ok(())
                }
            },
            ConfigCommands::Path => {
                match &ctx.config_path {
                    Some(path) => println!("{}", path.display()),
                    None => ctx.output.print_message(
                        "No config file found, using built-in defaults",
                        MessageType::Info,
                    ),
                }
                Ok(())
            }
            ConfigCommands::Init { path } => {
                let path = match path {
                    Some(path) => path.clone(),
                    None => default_config_path()?,
                };
                write_default_config(&path)?;
                ctx.output.print_message(
                    &format!("Wrote default config to {}", path.display()),
                    MessageType::Success,
                );
                Ok(())
            }
            ConfigCommands::Profiles => ctx.output.print(&ProfileSummary::new(&ctx.registry)),
        }
    }
}

/// One line per known hardware profile.
#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub profiles: Vec<ProfileLine>,
    pub versions: Vec<VersionRule>,
}

#[derive(Debug, Serialize)]
pub struct ProfileLine {
    pub name: String,
    pub routable_ceiling: Option<u32>,
    pub user_routing: bool,
    pub compact_layout: bool,
    pub fixed_sources: usize,
}

impl ProfileSummary {
    pub fn new(registry: &FamilyRegistry) -> Self {
        let profiles = registry
            .profile_names()
            .filter_map(|name| registry.profile(name).ok())
            .map(|p| ProfileLine {
                name: p.name.clone(),
                routable_ceiling: p.routable_ceiling,
                user_routing: p.user_routing,
                compact_layout: p.compact_layout,
                fixed_sources: p.fixed_sources.len(),
            })
            .collect();
        Self {
            profiles,
            versions: registry.rules().to_vec(),
        }
    }
}

impl TableDisplay for ProfileSummary {
    fn to_tables(&self, _color: bool) -> Vec<(Option<String>, Table)> {
        let header: Vec<String> = ["profile", "routable", "user routing", "layout", "fixed sources"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let mut profiles = create_table(&header);
        for p in &self.profiles {
            table_row!(
                profiles,
                p.name,
                p.routable_ceiling.map_or("direct index".to_string(), |c| format!("1-{}", c)),
                if p.user_routing { "yes" } else { "no" },
                if p.compact_layout { "compact" } else { "full" },
                p.fixed_sources
            );
        }

        let mut rules = create_table(&["version prefix".to_string(), "profile".to_string()]);
        for rule in &self.versions {
            table_row!(rules, rule.prefix, rule.profile);
        }

        vec![
            (Some("Profiles".to_string()), profiles),
            (Some("Version rules".to_string()), rules),
        ]
    }

    fn to_csv<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<(), CliError> {
        writer.write_record(["profile", "routable_ceiling", "user_routing", "compact_layout", "fixed_sources"])?;
        for p in &self.profiles {
            writer.write_record([
                p.name.clone(),
                p.routable_ceiling.map(|c| c.to_string()).unwrap_or_default(),
                p.user_routing.to_string(),
                p.compact_layout.to_string(),
                p.fixed_sources.to_string(),
            ])?;
        }
        Ok(())
    }
}
