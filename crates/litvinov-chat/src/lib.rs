//! Chat core for LitvinovGPT.
//!
//! Provides:
//! - The append-only message log and quota-gated `ChatSession`
//! - The `ReplyService` seam the session asks for answers
//! - `HttpReplyService` for the hosted JSON endpoint
//! - `OpenAiReplyService` for talking to an OpenAI-compatible API directly

pub mod endpoint;
pub mod message;
pub mod openai;
pub mod session;

use async_trait::async_trait;

pub use endpoint::{HttpReplyConfig, HttpReplyService};
pub use message::{Message, Sender};
pub use openai::{OpenAiConfig, OpenAiReplyService};
pub use session::{ChatSession, ChatSettings, RejectReason, SendOutcome, SessionSnapshot};

/// Something that can answer a user message given the recent conversation.
#[async_trait]
pub trait ReplyService: Send + Sync {
    /// `history` holds at most the session's history window, oldest first,
    /// and does not include `message` itself.
    async fn ask(&self, message: &str, history: &[Message]) -> Result<Reply, ReplyError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Reply {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Reply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            model: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    /// The service answered but reported a failure.
    #[error("service error: {}", .0.as_deref().unwrap_or("no details"))]
    Application(Option<String>),
    #[error("network error: {0}")]
    Network(String),
    #[error("timeout")]
    Timeout,
    #[error("parse error: {0}")]
    Parse(String),
}

impl ReplyError {
    /// True for failures to reach the service or to read its answer.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ReplyError::Application(_))
    }
}

impl From<reqwest::Error> for ReplyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ReplyError::Timeout
        } else if e.is_decode() {
            ReplyError::Parse(e.to_string())
        } else {
            ReplyError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_error_is_not_transport() {
        assert!(!ReplyError::Application(None).is_transport());
        assert!(ReplyError::Network("refused".into()).is_transport());
        assert!(ReplyError::Timeout.is_transport());
        assert!(ReplyError::Parse("eof".into()).is_transport());
    }

    #[test]
    fn reply_error_display() {
        assert_eq!(
            ReplyError::Application(Some("quota".into())).to_string(),
            "service error: quota"
        );
        assert_eq!(
            ReplyError::Application(None).to_string(),
            "service error: no details"
        );
        assert_eq!(ReplyError::Timeout.to_string(), "timeout");
    }

    #[test]
    fn reply_skips_missing_model() {
        let json = serde_json::to_string(&Reply::new("Hi!")).unwrap();
        assert_eq!(json, r#"{"reply":"Hi!"}"#);
    }
}
