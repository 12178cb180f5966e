//! Dashboard configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `EUPNEA_*` environment variables (nested keys separated by `__`,
//! e.g. `EUPNEA_RATES__WINDOW=10`).
//!
//! ```toml
//! [units.storage]
//! labels = ["B", "KB", "MB", "GB", "TB"]
//! zero_label = "Byte"
//!
//! [rates]
//! derive = true
//! window = 5
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::data::rates::DEFAULT_WINDOW;
use crate::data::Units;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "EUPNEA";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Unit tables used for formatting.
    pub units: Units,
    /// Rate derivation from network counters.
    pub rates: RateConfig,
}

/// Settings for deriving throughput from cumulative counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Replace incoming rate fields with rates computed from counters.
    pub derive: bool,
    /// Samples kept per container.
    pub window: usize,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            derive: false,
            window: DEFAULT_WINDOW,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from an optional file plus the process environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let config = builder
            .add_source(env)
            .build()
            .context("failed to build configuration")?;

        config
            .try_deserialize()
            .context("invalid dashboard configuration")
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::UnitTable;
    use std::io::Write;

    fn empty_env() -> Environment {
        environment().source(Some(config::Map::new()))
    }

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = DashboardConfig::load_with_env(None, empty_env()).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.units.storage, UnitTable::bytes());
        assert_eq!(config.units.bitrate, UnitTable::bitrate());
        assert!(!config.rates.derive);
        assert_eq!(config.rates.window, 5);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let path = Path::new("/nonexistent/eupnea.toml");
        let config = DashboardConfig::load_with_env(Some(path), empty_env()).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file(
            r#"
            [units.storage]
            labels = ["B", "KiB", "MiB"]
            zero_label = "Byte"

            [rates]
            derive = true
            window = 3
            "#,
        );

        let config = DashboardConfig::load_with_env(Some(file.path()), empty_env()).unwrap();
        assert_eq!(
            config.units.storage,
            UnitTable::new(["B", "KiB", "MiB"]).unwrap().with_zero_label("Byte")
        );
        // Untouched tables keep their defaults
        assert_eq!(config.units.bitrate, UnitTable::bitrate());
        assert!(config.rates.derive);
        assert_eq!(config.rates.window, 3);
    }

    #[test]
    fn test_empty_label_list_is_rejected() {
        let file = toml_file(
            r#"
            [units.bitrate]
            labels = []
            "#,
        );
        assert!(DashboardConfig::load_with_env(Some(file.path()), empty_env()).is_err());
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = toml_file(
            r#"
            [rates]
            window = 3
            "#,
        );

        let mut vars = config::Map::new();
        vars.insert("EUPNEA_RATES__WINDOW".to_string(), "9".to_string());
        vars.insert("EUPNEA_RATES__DERIVE".to_string(), "true".to_string());
        let env = environment().source(Some(vars));

        let config = DashboardConfig::load_with_env(Some(file.path()), env).unwrap();
        assert_eq!(config.rates.window, 9);
        assert!(config.rates.derive);
    }
}
