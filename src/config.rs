//! Run configuration.
//!
//! Defaults match the fixed file names of the calculator. An optional
//! `roman-calc.toml` in the working directory may override any field.

use crate::error::{CalcError, Result};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "roman-calc.toml";

/// File locations and limits for one run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input file with one `<numeral> <op> <numeral>` record per line
    pub input_path: PathBuf,

    /// Output file receiving one result or diagnostic per input line
    pub output_path: PathBuf,

    /// Process log receiving a trace of each line
    pub log_path: PathBuf,

    /// Maximum record length in bytes, excluding the line terminator
    pub max_line_len: usize,
}

impl Config {
    pub const DEFAULT_MAX_LINE_LEN: usize = 255;

    /// Loads `roman-calc.toml` from `dir`, falling back to defaults when absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| CalcError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&content, &path)?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses a configuration from TOML text.
    ///
    /// Errors name [`CONFIG_FILE`] as their source.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new(CONFIG_FILE))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| CalcError::Config {
            path: path.to_path_buf(),
            message: format!("TOML parsing error: {}", e),
        })?;

        if config.max_line_len == 0 {
            return Err(CalcError::Config {
                path: path.to_path_buf(),
                message: "max_line_len must be greater than zero".to_string(),
            });
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from("Input.txt"),
            output_path: PathBuf::from("Output.txt"),
            log_path: PathBuf::from("Process.txt"),
            max_line_len: Self::DEFAULT_MAX_LINE_LEN,
        }
    }
}
