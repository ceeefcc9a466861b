//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/jobnorm/jobnorm.toml`
//! 3. Environment variables: `JOBNORM_*` prefix

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};

/// User-adjustable settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Datacenter name applied when `rename` is called without `--datacenter`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
    /// Suffix appended to the input file stem when no output path is given
    pub output_suffix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            datacenter: None,
            output_suffix: "_renamed".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from all layers.
    pub fn load() -> ApplicationResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = Self::global_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("JOBNORM"));

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ApplicationError::Config {
                message: e.to_string(),
            })
    }

    /// Path of the global config file, if a home directory can be resolved.
    pub fn global_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "jobnorm").map(|dirs| dirs.config_dir().join("jobnorm.toml"))
    }

    /// Render settings as a TOML document.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_a_rename_suffix() {
        let settings = Settings::default();
        assert_eq!(settings.output_suffix, "_renamed");
        assert!(settings.datacenter.is_none());
    }

    #[test]
    fn template_renders_as_toml() {
        let rendered = Settings::default().to_toml().unwrap();
        assert!(rendered.contains("output_suffix"));
    }
}
