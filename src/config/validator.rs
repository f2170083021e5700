use crate::config::{defaults, Config};
use crate::error::ConfigError;

impl Config {
    /// Validates the configuration for logical constraints.
    /// Returns warnings for settings that are odd but usable.
    pub fn validate(&self) -> Result<Vec<String>, ConfigError> {
        let mut warnings = Vec::new();

        if !defaults::VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "Invalid log level '{}'. Must be one of: {:?}",
                self.log_level,
                defaults::VALID_LOG_LEVELS
            )));
        }

        if !defaults::VALID_FORMATS.contains(&self.default_format.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "Invalid default format '{}'. Must be one of: {:?}",
                self.default_format,
                defaults::VALID_FORMATS
            )));
        }

        for (name, profile) in &self.profiles {
            if let Some(prefixes) = &profile.group_prefixes {
                if prefixes.iter().any(|p| p.prefix.is_empty()) {
                    return Err(ConfigError::InvalidValue(format!(
                        "Profile '{}' has an empty group prefix",
                        name
                    )));
                }
            }
            if profile.routable_ceiling == Some(0) {
                warnings.push(format!(
                    "Profile '{}' has routable_ceiling = 0; every id will use fixed sources",
                    name
                ));
            }
            if profile.direct_index == Some(true) && profile.routable_ceiling.is_some() {
                warnings.push(format!(
                    "Profile '{}' sets direct_index, routable_ceiling is ignored",
                    name
                ));
            }
        }

        for rule in &self.versions {
            if rule.prefix.is_empty() {
                warnings.push(format!(
                    "Version rule for profile '{}' has an empty prefix and matches every scene",
                    rule.profile
                ));
            }
        }

        // Unknown base/profile references only show up once the registry is built
        self.registry()?;

        Ok(warnings)
    }
}
