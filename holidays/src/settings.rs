//! Run configuration for the `holidays` binary.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults (current UTC year, current directory, JSON, YAML and
//!    XML)
//! 2. an optional `holidays.toml` in the working directory
//! 3. environment variables prefixed with `HOLIDAYS_`:
//!    `HOLIDAYS_YEAR`, `HOLIDAYS_OUTPUT_DIR`, `HOLIDAYS_FORMATS=json,yaml,xml`

use std::path::PathBuf;

use config::{Config, Environment, File};
use hol_core::errors::{Error, Result};
use hol_core::Settings;
use serde::Deserialize;
use tracing::warn;

use crate::export::OutputFormat;

/// Name of the optional configuration file, without extension.
pub const CONFIG_FILE: &str = "holidays";

/// Prefix of the configuration environment variables.
pub const ENV_PREFIX: &str = "HOLIDAYS";

/// Where and how the aggregate record is written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportSettings {
    /// Year to compute; the current UTC year when unset.
    #[serde(default)]
    pub year: Option<i32>,
    /// Directory for output files; the working directory when unset or
    /// missing.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Formats to write.
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Xml]
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            year: None,
            output_dir: None,
            formats: default_formats(),
        }
    }
}

impl ExportSettings {
    /// Load from `holidays.toml` (if present) and `HOLIDAYS_*` variables.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("formats"),
            )
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;
        Self::from_config(config)
    }

    /// Deserialize from an already assembled [`Config`].
    pub fn from_config(config: Config) -> Result<Self> {
        config
            .try_deserialize()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Core run settings carrying the configured year.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::new();
        settings.set_evaluation_year(self.year);
        settings
    }

    /// Directory to write into: the configured one if it exists, otherwise
    /// the current working directory.
    pub fn resolve_output_dir(&self) -> Result<PathBuf> {
        match self.output_dir.as_deref() {
            Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
            Some(dir) => {
                warn!(dir = %dir.display(), "output directory does not exist, using working directory");
                Ok(std::env::current_dir()?)
            }
            None => Ok(std::env::current_dir()?),
        }
    }
}
