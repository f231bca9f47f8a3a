//! Chat session configuration: quota, context window and product texts.

use serde::{Deserialize, Serialize};

pub use litvinov_common::defaults::{
    DEFAULT_CONNECTION_ERROR, DEFAULT_FALLBACK_ERROR, DEFAULT_GREETING,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Successful exchanges allowed per session (valid range: 1-1000).
    pub quota_limit: u32,
    /// Prior messages sent as context with each request (valid range: 0-100).
    pub history_window: u32,
    pub greeting: String,
    /// Shown when the service reports a failure without an error text.
    pub fallback_error: String,
    /// Shown when the service cannot be reached or answers garbage.
    pub connection_error: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            quota_limit: 10,
            history_window: 10,
            greeting: DEFAULT_GREETING.into(),
            fallback_error: DEFAULT_FALLBACK_ERROR.into(),
            connection_error: DEFAULT_CONNECTION_ERROR.into(),
        }
    }
}
