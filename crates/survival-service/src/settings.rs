//! Service settings

use crate::ServiceError;
use config::{Config, Environment, File};
use record_validator::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Service settings, layered as defaults < `survival.toml` < `SURVIVAL__*` env
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Model bundle file
    pub bundle_path: PathBuf,
    /// Log level ("trace", "debug", "info", "warn", "error")
    pub log_level: String,
    /// Submission validation limits
    pub validation: ValidationConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bundle_path: PathBuf::from("model/bundle.json"),
            log_level: "info".to_string(),
            validation: ValidationConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings. An explicit file must exist; otherwise an optional
    /// `survival.toml` in the working directory is read.
    pub fn load(path: Option<&Path>) -> Result<Self, ServiceError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("survival").required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("SURVIVAL").separator("__"))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ServiceError::Config(e.to_string()))
    }
}
