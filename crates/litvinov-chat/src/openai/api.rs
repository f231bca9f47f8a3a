//! ReplyService implementation for OpenAiReplyService.

use async_trait::async_trait;
use tracing::debug;

use crate::{Message, Reply, ReplyError, ReplyService};

use super::client::{processing_error, OpenAiReplyService, EMPTY_MESSAGE_ERROR, MISSING_KEY_ERROR};

#[async_trait]
impl ReplyService for OpenAiReplyService {
    async fn ask(&self, message: &str, history: &[Message]) -> Result<Reply, ReplyError> {
        if message.trim().is_empty() {
            return Err(ReplyError::Application(Some(EMPTY_MESSAGE_ERROR.into())));
        }
        if !self.config.has_api_key() {
            return Err(ReplyError::Application(Some(MISSING_KEY_ERROR.into())));
        }

        let body = self.build_request_body(message, history);

        debug!(model = %self.config.model, history = history.len(), "OpenAI request");

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(processing_error(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response.json().await.map_err(processing_error)?;

        self.parse_response(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpenAiConfig;

    #[tokio::test]
    async fn blank_message_is_rejected_before_any_request() {
        let svc = OpenAiReplyService::new(OpenAiConfig::new("sk-test")).unwrap();
        let err = svc.ask("   ", &[]).await.unwrap_err();
        assert!(matches!(err, ReplyError::Application(Some(ref t)) if t == EMPTY_MESSAGE_ERROR));
    }

    #[tokio::test]
    async fn missing_key_is_application_error() {
        let svc = OpenAiReplyService::new(OpenAiConfig::new("")).unwrap();
        let err = svc.ask("Hello", &[]).await.unwrap_err();
        assert!(matches!(err, ReplyError::Application(Some(ref t)) if t == MISSING_KEY_ERROR));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn unreachable_upstream_is_transport_error() {
        let svc = OpenAiReplyService::new(
            OpenAiConfig::new("sk-test").with_base_url("http://127.0.0.1:9/v1"),
        )
        .unwrap();
        let err = svc.ask("Hello", &[]).await.unwrap_err();
        assert!(err.is_transport());
    }
}
