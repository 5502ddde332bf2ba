//! Configuration management for Lendlib

use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::error::AppResult;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Location of the JSON snapshot file
    pub path: PathBuf,
    /// Write indented JSON
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Populate an empty catalog with sample books, users and loans on first run
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub snapshot: SnapshotConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LENDLIB_)
            .add_source(
                Environment::with_prefix("LENDLIB")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override snapshot path from LIBRARY_DATA_FILE env var if present
            .set_override_option("snapshot.path", env::var("LIBRARY_DATA_FILE").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Whether logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.logging.format.eq_ignore_ascii_case("json")
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Library_data.json"),
            pretty: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run_expectations() {
        let config = AppConfig::default();
        assert_eq!(config.snapshot.path, PathBuf::from("Library_data.json"));
        assert!(config.snapshot.pretty);
        assert_eq!(config.logging.level, "info");
        assert!(!config.json_logs());
        assert!(!config.catalog.seed_demo_data);
    }

    #[test]
    fn partial_sources_fall_back_to_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("logging.format", "JSON")
            .and_then(|builder| builder.set_override("catalog.seed_demo_data", true))
            .and_then(|builder| builder.build())
            .and_then(|config| config.try_deserialize())
            .unwrap();

        assert!(config.json_logs());
        assert!(config.catalog.seed_demo_data);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.snapshot.path, PathBuf::from("Library_data.json"));
    }
}
