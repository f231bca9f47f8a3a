//! LitvinovGPT configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults,
//! so partial configs work out of the box.
//!
//! ```rust,no_run
//! use litvinov_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LitvinovConfig, CONFIG_SCHEMA_VERSION};

use litvinov_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing, and validate it.
pub fn load_config() -> Result<LitvinovConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<LitvinovConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LitvinovConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&LitvinovConfig::default());
        assert!(json.contains("\"chat\""));
        assert!(json.contains("\"service\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"quota_limit\": 10"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&LitvinovConfig::default());
        let parsed: LitvinovConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.chat.quota_limit, 10);
        assert_eq!(parsed.service.openai.model, "gpt-4o-mini");
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nquota_limit = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
