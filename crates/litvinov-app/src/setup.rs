//! Turn the loaded config into a session and its reply service.

use std::sync::Arc;
use std::time::Duration;

use litvinov_chat::{
    ChatSettings, HttpReplyConfig, HttpReplyService, OpenAiConfig, OpenAiReplyService,
    ReplyError, ReplyService,
};
use litvinov_config::schema::{ChatConfig, ServiceBackend, ServiceConfig};
use tracing::debug;

pub(crate) fn chat_settings(chat: &ChatConfig) -> ChatSettings {
    ChatSettings {
        quota_limit: chat.quota_limit,
        history_window: chat.history_window as usize,
        greeting: chat.greeting.clone(),
        fallback_error: chat.fallback_error.clone(),
        connection_error: chat.connection_error.clone(),
    }
}

pub(crate) fn openai_config(service: &ServiceConfig) -> OpenAiConfig {
    let oa = &service.openai;
    let mut config = OpenAiConfig::from_env()
        .with_base_url(oa.base_url.clone())
        .with_model(oa.model.clone())
        .with_max_tokens(oa.max_tokens)
        .with_temperature(oa.temperature)
        .with_system_prompt(oa.system_prompt.clone())
        .with_request_timeout(Duration::from_secs(oa.request_timeout.into()));
    if !oa.api_key.trim().is_empty() {
        config.api_key = oa.api_key.clone();
    }
    config
}

pub(crate) fn endpoint_config(service: &ServiceConfig) -> HttpReplyConfig {
    let ep = &service.endpoint;
    HttpReplyConfig::new(ep.url.clone())
        .with_connect_timeout(Duration::from_secs(ep.connect_timeout.into()))
        .with_request_timeout(Duration::from_secs(ep.request_timeout.into()))
}

pub(crate) fn build_service(service: &ServiceConfig) -> Result<Arc<dyn ReplyService>, ReplyError> {
    match service.backend {
        ServiceBackend::Endpoint => {
            let config = endpoint_config(service);
            debug!(url = %config.url, "Using hosted reply endpoint");
            Ok(Arc::new(HttpReplyService::new(config)?))
        }
        ServiceBackend::OpenAi => {
            let config = openai_config(service);
            debug!(?config, "Using OpenAI directly");
            Ok(Arc::new(OpenAiReplyService::new(config)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litvinov_config::LitvinovConfig;

    #[test]
    fn chat_settings_copy_config() {
        let mut config = LitvinovConfig::default();
        config.chat.quota_limit = 3;
        config.chat.history_window = 4;
        config.chat.greeting = "hey".into();

        let settings = chat_settings(&config.chat);
        assert_eq!(settings.quota_limit, 3);
        assert_eq!(settings.history_window, 4);
        assert_eq!(settings.greeting, "hey");
        assert_eq!(settings.connection_error, config.chat.connection_error);
    }

    #[test]
    fn default_texts_agree_with_chat_defaults() {
        let config = LitvinovConfig::default();
        let settings = chat_settings(&config.chat);
        let chat_defaults = ChatSettings::default();
        assert_eq!(settings.greeting, chat_defaults.greeting);
        assert_eq!(settings.fallback_error, chat_defaults.fallback_error);
        assert_eq!(settings.connection_error, chat_defaults.connection_error);

        let oa = openai_config(&config.service);
        assert_eq!(oa.system_prompt, OpenAiConfig::new("").system_prompt);
    }

    #[test]
    fn endpoint_config_uses_timeouts() {
        let mut config = LitvinovConfig::default();
        config.service.endpoint.url = "http://localhost:9000/chat".into();
        config.service.endpoint.request_timeout = 5;

        let ep = endpoint_config(&config.service);
        assert_eq!(ep.url, "http://localhost:9000/chat");
        assert_eq!(ep.request_timeout, Duration::from_secs(5));
        assert_eq!(ep.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn configured_api_key_wins() {
        let mut config = LitvinovConfig::default();
        config.service.openai.api_key = "sk-from-config".into();
        config.service.openai.model = "gpt-4o".into();

        let oa = openai_config(&config.service);
        assert_eq!(oa.api_key, "sk-from-config");
        assert_eq!(oa.model, "gpt-4o");
        assert_eq!(oa.max_tokens, 500);
    }

    #[test]
    fn builds_both_backends() {
        let mut config = LitvinovConfig::default();
        assert!(build_service(&config.service).is_ok());

        config.service.backend = ServiceBackend::OpenAi;
        assert!(build_service(&config.service).is_ok());
    }
}
