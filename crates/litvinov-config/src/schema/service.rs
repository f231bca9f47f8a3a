//! Reply service configuration: which backend answers, and how to reach it.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT_URL: &str =
    "https://functions.poehali.dev/b97cb280-e6f5-4d55-a641-3b1adc8edcf1";

pub use litvinov_common::defaults::DEFAULT_SYSTEM_PROMPT;

/// Which reply service backs the chat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceBackend {
    /// The hosted JSON endpoint.
    #[default]
    Endpoint,
    /// Talk to an OpenAI-compatible API directly.
    OpenAi,
}

impl std::str::FromStr for ServiceBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "endpoint" => Ok(Self::Endpoint),
            "openai" => Ok(Self::OpenAi),
            other => Err(format!("unknown backend '{other}' (expected endpoint or openai)")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: String,
    /// Seconds (valid range: 1-120).
    pub connect_timeout: u32,
    /// Seconds (valid range: 1-600).
    pub request_timeout: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.into(),
            connect_timeout: 10,
            request_timeout: 60,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiServiceConfig {
    pub base_url: String,
    /// Empty means "read OPENAI_API_KEY".
    pub api_key: String,
    pub model: String,
    /// Valid range: 1-16384.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    pub system_prompt: String,
    /// Seconds (valid range: 1-600).
    pub request_timeout: u32,
}

impl std::fmt::Debug for OpenAiServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiServiceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("system_prompt", &self.system_prompt)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for OpenAiServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            api_key: String::new(),
            model: "gpt-4o-mini".into(),
            max_tokens: 500,
            temperature: 0.7,
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            request_timeout: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    pub backend: ServiceBackend,
    pub endpoint: EndpointConfig,
    pub openai: OpenAiServiceConfig,
}
