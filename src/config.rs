//! Explorer configuration and command-line parsing.

use crate::core::view::{ParseViewCommandError, ViewCommand};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 900;
pub const DEFAULT_OUTPUT_PATH: &str = "pic.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub output_path: PathBuf,
    /// Applied in order before the first save in headless mode.
    pub commands: Vec<ViewCommand>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            commands: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingValue { flag: String },
    InvalidNumber { flag: String, value: String },
    ZeroSize { flag: String },
    UnknownArgument { argument: String },
    UnknownCommand(ParseViewCommandError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { flag } => write!(f, "missing value for {}", flag),
            Self::InvalidNumber { flag, value } => {
                write!(f, "invalid {} value: {}", flag, value)
            }
            Self::ZeroSize { flag } => write!(f, "{} must be at least 1", flag),
            Self::UnknownArgument { argument } => write!(f, "unknown argument: {}", argument),
            Self::UnknownCommand(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownCommand(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseViewCommandError> for ConfigError {
    fn from(err: ParseViewCommandError) -> Self {
        Self::UnknownCommand(err)
    }
}

/// Parses arguments, excluding the program name.
///
/// Accepts `--width N`, `--height N`, `--output PATH` and
/// `--commands zoom-in,pan-left,...`.
pub fn parse_args(args: &[String]) -> Result<ExplorerConfig, ConfigError> {
    let mut config = ExplorerConfig::default();
    let mut i = 0;

    while i < args.len() {
        let flag = args[i].as_str();

        match flag {
            "--width" => config.width = parse_size(flag, value_for(args, i)?)?,
            "--height" => config.height = parse_size(flag, value_for(args, i)?)?,
            "--output" => config.output_path = PathBuf::from(value_for(args, i)?),
            "--commands" => config.commands = parse_commands(value_for(args, i)?)?,
            other => {
                return Err(ConfigError::UnknownArgument {
                    argument: other.to_string(),
                });
            }
        }

        i += 2;
    }

    Ok(config)
}

fn value_for(args: &[String], flag_index: usize) -> Result<&str, ConfigError> {
    args.get(flag_index + 1)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingValue {
            flag: args[flag_index].clone(),
        })
}

fn parse_size(flag: &str, value: &str) -> Result<u32, ConfigError> {
    let size: u32 = value.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })?;

    if size == 0 {
        return Err(ConfigError::ZeroSize {
            flag: flag.to_string(),
        });
    }

    Ok(size)
}

fn parse_commands(value: &str) -> Result<Vec<ViewCommand>, ConfigError> {
    value
        .split(',')
        .filter(|name| !name.trim().is_empty())
        .map(|name| name.parse::<ViewCommand>().map_err(ConfigError::from))
        .collect()
}
