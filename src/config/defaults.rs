/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Default output format for reports
pub const DEFAULT_FORMAT: &str = "table";

/// Output formats accepted in `default_format`
pub const VALID_FORMATS: [&str; 3] = ["table", "json", "csv"];

/// Log levels accepted in `log_level`
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Generates the content written by `scenesheet config init`
pub fn generate_default_config() -> String {
    format!(
        r##"# config.toml

# Logging configuration
# Options: error, warn, info, debug, trace
# (can be overridden by SCENESHEET_LOG_LEVEL or --log-level)
log_level = "{}"

# Output format used when --format is not given: table, json, csv
default_format = "{}"

# Colour scene names in table output
color = true

# Built-in hardware profiles: x32, x32-legacy, xair
# Override parts of a profile, or add a new one based on an existing profile:
#
# [profiles.x32]
# routable_ceiling = 38
# fx_names = {{ FAC = "Flanger" }}
#
# [profiles.m32]
# base = "x32"
# fixed_sources = [
#     {{ id = 39, name = "USB-Player L" }},
#     {{ id = 40, name = "USB-Player R" }},
# ]

# Version tag rules, checked in order before the built-in ones
#
# [[versions]]
# prefix = "#3."
# profile = "x32-legacy"
"##,
        DEFAULT_LOG_LEVEL, DEFAULT_FORMAT
    )
}

/// Default value functions for serde deserialization

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

pub fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

pub fn default_color() -> bool {
    true
}
