use crate::error::SceneError;

#[macro_export]
macro_rules! trace_fn {
    ($fn_name:expr, $($arg:tt)+) => {
        {
            use colored::Colorize;
            log::trace!("[{}] {}", $fn_name.to_string().bright_blue().bold(), format!($($arg)+))
        }
    };
}

#[macro_export]
macro_rules! debug_fn {
    ($fn_name:expr, $($arg:tt)+) => {
        {
            use colored::Colorize;
            log::debug!("[{}] {}", $fn_name.to_string().cyan().bold(), format!($($arg)+))
        }
    };
}

#[macro_export]
macro_rules! warn_fn {
    ($fn_name:expr, $($arg:tt)+) => {
        {
            use colored::Colorize;
            log::warn!("[{}] {}", $fn_name.to_string().yellow().bold(), format!($($arg)+))
        }
    };
}

/// Formats a channel number the way full-size consoles key their paths ("01", "02", ...).
pub fn pad_id(id: u32) -> String {
    format!("{:02}", id)
}

/// Scene files spell boolean state as `ON` / `OFF`.
pub fn is_on(value: &str) -> bool {
    value == "ON"
}

/// Parses a numeric scene token, naming the path it came from on failure.
pub fn parse_number(path: &str, value: &str) -> Result<u32, SceneError> {
    value.trim().parse::<u32>().map_err(|_| SceneError::InvalidNumber {
        path: path.to_string(),
        value: value.to_string(),
    })
}
