// Command-line configuration

use crate::shell::input::{parse_integer, InputError};
use crate::shell::session::DEFAULT_TRACE_LIMIT;
use std::fmt;

/// Runtime settings gathered from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Use the line-oriented console instead of the TUI
    pub plain: bool,
    /// Sort the copy before binary search
    pub presort: bool,
    /// Memory budget in bytes for one operation's step history
    pub trace_limit: usize,
    /// Values given on the command line; skips the array prompts
    pub values: Option<Vec<i32>>,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            plain: false,
            presort: true,
            trace_limit: DEFAULT_TRACE_LIMIT,
            values: None,
            show_help: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(String),
    InvalidLimit(String),
    InvalidValue(InputError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue(flag) => write!(f, "Option '{}' needs a value", flag),
            ConfigError::InvalidLimit(text) => {
                write!(f, "Invalid trace limit '{}': expected a positive number of bytes", text)
            }
            ConfigError::InvalidValue(e) => write!(f, "Bad array value: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Parse arguments, excluding the program name
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut values = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "--plain" => config.plain = true,
                "--no-presort" => config.presort = false,
                "-h" | "--help" => config.show_help = true,
                "--trace-limit" => {
                    let text = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.to_string()))?;
                    let text = text.as_ref();
                    config.trace_limit = match text.parse::<usize>() {
                        Ok(limit) if limit > 0 => limit,
                        _ => return Err(ConfigError::InvalidLimit(text.to_string())),
                    };
                }
                // Negative numbers are values, not flags
                flag if flag.starts_with("--")
                    || (flag.starts_with('-') && flag.parse::<i32>().is_err()) =>
                {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                value => values.push(parse_integer(value).map_err(ConfigError::InvalidValue)?),
            }
        }

        if !values.is_empty() {
            config.values = Some(values);
        }
        Ok(config)
    }

    pub fn usage(program_name: &str) -> String {
        format!(
            "Usage: {} [--plain] [--no-presort] [--trace-limit <bytes>] [values...]\n\
             \n\
             Options:\n\
             \x20 --plain               Use the line-based console instead of the TUI\n\
             \x20 --no-presort          Binary search the array as entered (may report NotSorted)\n\
             \x20 --trace-limit <bytes> Memory budget for step history (default {})\n\
             \x20 -h, --help            Show this help\n\
             \n\
             Examples:\n\
             \x20 {} 5 1 2 3 4          # Start with an array\n\
             \x20 {} --plain            # Prompt for an array on the console",
            program_name, DEFAULT_TRACE_LIMIT, program_name, program_name
        )
    }
}
