//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod chat;
mod helpers;
mod service;


use crate::schema::LitvinovConfig;
use litvinov_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LitvinovConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    chat::validate_chat(&mut errors, config);
    service::validate_endpoint(&mut errors, config);
    service::validate_openai(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
