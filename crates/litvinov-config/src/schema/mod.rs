//! Configuration schema types for LitvinovGPT.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod logging;
mod service;

pub use chat::*;
pub use logging::*;
pub use service::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LitvinovConfig {
    pub chat: ChatConfig,
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}
