pub mod defaults;
pub mod loader;
pub mod validator;

use crate::error::ConfigError;
use crate::routing::family::{FamilyProfile, FamilyRegistry, FixedSource, GroupPrefix, VersionRule};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use defaults::{DEFAULT_FORMAT, DEFAULT_LOG_LEVEL};
pub use loader::{default_config_path, find_config_file, write_default_config, CONFIG_ENV_VAR};

/// Environment variable overriding `log_level`
pub const LOG_LEVEL_ENV_VAR: &str = "SCENESHEET_LOG_LEVEL";

/// Configuration for scenesheet
///
/// # Example Configuration File
/// ```toml
/// log_level = "info"
/// default_format = "table"
/// color = true
///
/// # Firmware that reports 15 buses
/// [profiles.x32]
/// fixed_sources = [
///     { id = 39, name = "USB-Player L" },
///     { id = 40, name = "USB-Player R" },
/// ]
///
/// # A new profile derived from a built-in one
/// [profiles.m32]
/// base = "x32"
/// fx_names = { FAC = "Flanger" }
///
/// [[versions]]
/// prefix = "#4.0#"
/// profile = "m32"
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Logging level
    #[serde(default = "defaults::default_log_level")]
    pub log_level: String,
    /// Output format used when none is given on the command line
    #[serde(default = "defaults::default_format")]
    pub default_format: String,
    /// Colour scene names in table output
    #[serde(default = "defaults::default_color")]
    pub color: bool,
    /// Per-profile overrides, keyed by profile name
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileOverride>,
    /// Version tag rules checked before the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionRule>,
}

/// Partial profile from the config file. Unset fields keep the base value.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ProfileOverride {
    /// Profile to start from when defining a new one
    pub base: Option<String>,
    pub routable_ceiling: Option<u32>,
    /// Resolve ids as their bare index (drops the routable ceiling)
    pub direct_index: Option<bool>,
    pub user_routing: Option<bool>,
    pub compact_layout: Option<bool>,
    /// Replaces the whole fixed-source table
    pub fixed_sources: Option<Vec<FixedSource>>,
    /// Merged into the existing FX name table
    pub fx_names: Option<BTreeMap<String, String>>,
    /// Replaces the prefix list; order matters
    pub group_prefixes: Option<Vec<GroupPrefix>>,
}

impl ProfileOverride {
    fn apply(&self, profile: &mut FamilyProfile) {
        if let Some(ceiling) = self.routable_ceiling {
            profile.routable_ceiling = Some(ceiling);
        }
        if self.direct_index == Some(true) {
            profile.routable_ceiling = None;
        }
        if let Some(user_routing) = self.user_routing {
            profile.user_routing = user_routing;
        }
        if let Some(compact) = self.compact_layout {
            profile.compact_layout = compact;
        }
        if let Some(sources) = &self.fixed_sources {
            profile.fixed_sources = sources.iter().map(|s| (s.id, s.name.clone())).collect();
        }
        if let Some(names) = &self.fx_names {
            profile
                .fx_names
                .extend(names.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if let Some(prefixes) = &self.group_prefixes {
            profile.group_prefixes = prefixes.clone();
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: defaults::default_log_level(),
            default_format: defaults::default_format(),
            color: defaults::default_color(),
            profiles: BTreeMap::new(),
            versions: Vec::new(),
        }
    }
}

impl Config {
    /// Returns the log level with environment variable override support
    pub fn log_level(&self) -> String {
        std::env::var(LOG_LEVEL_ENV_VAR).unwrap_or_else(|_| self.log_level.clone())
    }

    /// Built-in profiles with this config's overrides and version rules applied.
    pub fn registry(&self) -> Result<FamilyRegistry, ConfigError> {
        let mut registry = FamilyRegistry::default();

        // Overrides of existing profiles first, so derived profiles see them
        let (existing, derived): (Vec<_>, Vec<_>) = self
            .profiles
            .iter()
            .partition(|(name, ov)| ov.base.is_none() && registry.profile(name).is_ok());

        for (name, ov) in existing.into_iter().chain(derived) {
            let base_name = ov.base.as_deref().unwrap_or(name.as_str());
            let mut profile = registry
                .profile(base_name)
                .map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "Profile '{}' refers to unknown base profile '{}'",
                        name, base_name
                    ))
                })?
                .clone();
            profile.name = name.clone();
            ov.apply(&mut profile);
            registry.insert_profile(profile);
        }

        for rule in self.versions.iter().rev() {
            if registry.profile(&rule.profile).is_err() {
                return Err(ConfigError::InvalidValue(format!(
                    "Version rule '{}' refers to unknown profile '{}'",
                    rule.prefix, rule.profile
                )));
            }
            registry.prepend_rule(rule.clone());
        }

        Ok(registry)
    }

    /// Converts the configuration to TOML string format
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

/// Global configuration instance loaded lazily
pub static CONFIG: Lazy<Result<Config, ConfigError>> = Lazy::new(Config::new);
