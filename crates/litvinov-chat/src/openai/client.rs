//! OpenAI client struct, request building, and response parsing.

use crate::{Message, Reply, ReplyError, Sender};

use super::config::OpenAiConfig;

/// Transcript entries forwarded upstream, newest last.
pub(crate) const UPSTREAM_HISTORY_LIMIT: usize = 10;

pub(crate) const EMPTY_MESSAGE_ERROR: &str = "Сообщение не может быть пустым";
pub(crate) const MISSING_KEY_ERROR: &str = "OpenAI API ключ не настроен";

/// Reply service that calls an OpenAI-compatible API directly.
pub struct OpenAiReplyService {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiReplyService {
    pub fn new(config: OpenAiConfig) -> Result<Self, ReplyError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ReplyError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the chat completions body: persona, recent transcript, then the message.
    pub(crate) fn build_request_body(&self, message: &str, history: &[Message]) -> serde_json::Value {
        let skip = history.len().saturating_sub(UPSTREAM_HISTORY_LIMIT);
        let mut msgs = Vec::with_capacity(history.len() - skip + 2);

        msgs.push(serde_json::json!({
            "role": "system",
            "content": self.config.system_prompt,
        }));

        for msg in &history[skip..] {
            let role = match msg.sender {
                Sender::User => "user",
                Sender::Bot => "assistant",
            };
            msgs.push(serde_json::json!({
                "role": role,
                "content": msg.text,
            }));
        }

        msgs.push(serde_json::json!({
            "role": "user",
            "content": message.trim(),
        }));

        serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }

    /// Pull the first choice's text out of a completion.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<Reply, ReplyError> {
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| processing_error("completion has no content"))?;

        Ok(Reply {
            reply: content.to_string(),
            model: Some(self.config.model.clone()),
        })
    }
}

pub(crate) fn processing_error(detail: impl std::fmt::Display) -> ReplyError {
    ReplyError::Application(Some(format!("Ошибка обработки: {detail}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> OpenAiReplyService {
        OpenAiReplyService::new(OpenAiConfig::new("sk-test").with_system_prompt("persona")).unwrap()
    }

    fn transcript(n: u64) -> Vec<Message> {
        (1..=n)
            .map(|i| {
                let sender = if i % 2 == 1 { Sender::Bot } else { Sender::User };
                Message::new(i, sender, format!("m{i}"))
            })
            .collect()
    }

    #[test]
    fn body_has_persona_history_and_message() {
        let body = service().build_request_body("  Hello  ", &transcript(2));
        let msgs = body["messages"].as_array().unwrap();
        assert_eq!(msgs.len(), 4);
        assert_eq!(msgs[0]["role"], "system");
        assert_eq!(msgs[0]["content"], "persona");
        assert_eq!(msgs[1]["role"], "assistant");
        assert_eq!(msgs[1]["content"], "m1");
        assert_eq!(msgs[2]["role"], "user");
        assert_eq!(msgs[3]["role"], "user");
        assert_eq!(msgs[3]["content"], "Hello");
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 500);
    }

    #[test]
    fn body_keeps_only_last_ten_history_entries() {
        let body = service().build_request_body("next", &transcript(15));
        let msgs = body["messages"].as_array().unwrap();
        assert_eq!(msgs.len(), 1 + UPSTREAM_HISTORY_LIMIT + 1);
        assert_eq!(msgs[1]["content"], "m6");
        assert_eq!(msgs[10]["content"], "m15");
    }

    #[test]
    fn parse_response_takes_first_choice() {
        let json = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Привет!"}}]
        });
        let reply = service().parse_response(json).unwrap();
        assert_eq!(reply.reply, "Привет!");
        assert_eq!(reply.model.as_deref(), Some("gpt-4o-mini"));
    }

    #[test]
    fn parse_response_without_content_is_application_error() {
        let err = service()
            .parse_response(serde_json::json!({"choices": []}))
            .unwrap_err();
        match err {
            ReplyError::Application(Some(text)) => assert!(text.starts_with("Ошибка обработки")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn completions_url_tolerates_trailing_slash() {
        let svc = OpenAiReplyService::new(
            OpenAiConfig::new("k").with_base_url("http://localhost:1234/v1/"),
        )
        .unwrap();
        assert_eq!(svc.completions_url(), "http://localhost:1234/v1/chat/completions");
    }
}
