//! ReplyService implementation for HttpReplyService.

use async_trait::async_trait;
use tracing::debug;

use crate::{Message, Reply, ReplyError, ReplyService};

use super::client::{classify_response, AskBody, HttpReplyService};

#[async_trait]
impl ReplyService for HttpReplyService {
    async fn ask(&self, message: &str, history: &[Message]) -> Result<Reply, ReplyError> {
        let body = AskBody { message, history };

        debug!(url = %self.config.url, history = history.len(), "Endpoint request");

        let response = self
            .http
            .post(&self.config.url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        debug!(%status, bytes = text.len(), "Endpoint response");

        classify_response(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::HttpReplyConfig;
    use std::time::Duration;

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is closed on test machines; the connect fails fast.
        let config = HttpReplyConfig::new("http://127.0.0.1:9/chat")
            .with_connect_timeout(Duration::from_secs(2))
            .with_request_timeout(Duration::from_secs(5));
        let svc = HttpReplyService::new(config).unwrap();

        let err = svc.ask("test", &[]).await.unwrap_err();
        assert!(err.is_transport());
    }
}
