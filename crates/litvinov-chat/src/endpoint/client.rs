//! Endpoint client struct, request body and response classification.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::{Message, Reply, ReplyError};

use super::config::HttpReplyConfig;

/// Reply service backed by the hosted JSON endpoint.
pub struct HttpReplyService {
    pub(crate) config: HttpReplyConfig,
    pub(crate) http: reqwest::Client,
}

#[derive(Serialize)]
pub(crate) struct AskBody<'a> {
    pub message: &'a str,
    pub history: &'a [Message],
}

impl HttpReplyService {
    pub fn new(config: HttpReplyConfig) -> Result<Self, ReplyError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ReplyError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

/// Decide what an endpoint answer means.
///
/// A body that is not a JSON object is a transport failure. That includes
/// valid JSON of another shape (`null`, `[]`, `5`): the endpoint always
/// answers with an object, so anything else came from something in between.
/// A success status with a non-empty string `reply` is an answer. Everything
/// else is an application error carrying the non-empty `error` text, if any.
pub fn classify_response(status: StatusCode, body: &str) -> Result<Reply, ReplyError> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| ReplyError::Parse(e.to_string()))?;
    let obj = json
        .as_object()
        .ok_or_else(|| ReplyError::Parse("expected a JSON object".into()))?;

    if status.is_success() {
        if let Some(reply) = non_empty_str(obj.get("reply")) {
            return Ok(Reply {
                reply: reply.to_string(),
                model: non_empty_str(obj.get("model")).map(String::from),
            });
        }
    }

    Err(ReplyError::Application(
        non_empty_str(obj.get("error")).map(String::from),
    ))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
