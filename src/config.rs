//! Configuration loading: defaults -> file -> WORKBENCH_* environment.

use crate::logging::LoggingConfig;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for the workbench tooling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkbenchConfig {
    /// Path to a workspace snapshot JSON file; None means the built-in demo.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WorkbenchConfig {
    /// Load configuration, lowest to highest precedence: struct defaults,
    /// the given file (when present), then `WORKBENCH_*` environment
    /// variables with `__` separating nested keys.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }
        builder = builder.add_source(
            Environment::with_prefix("WORKBENCH")
                .separator("__")
                .try_parsing(true),
        );
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_sources_yield_defaults() {
        let config = WorkbenchConfig::load(None).unwrap();
        assert!(config.snapshot.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "snapshot = \"workspace.json\"").unwrap();
        writeln!(file, "[logging]").unwrap();
        writeln!(file, "level = \"debug\"").unwrap();
        writeln!(file, "output = \"stdout\"").unwrap();
        let config = WorkbenchConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.snapshot.as_deref(), Some(Path::new("workspace.json")));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.output, "stdout");
        // Unset keys keep their defaults.
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(WorkbenchConfig::load(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }
}
