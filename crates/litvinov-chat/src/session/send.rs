//! Async send path for ChatSession.

use litvinov_common::{new_correlation_id, Event};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::{Reply, ReplyError, Sender};

use super::manager::ChatSession;
use super::types::{PendingGuard, SendOutcome};

impl ChatSession {
    /// Send `text` and wait for the reply.
    ///
    /// Blank input, a used-up quota or an exchange already in flight make
    /// this a no-op that returns `SendOutcome::Rejected`. Otherwise the
    /// user message and exactly one bot message are appended, and the
    /// session is no longer pending when this returns.
    pub async fn send_message(&self, text: impl Into<String>) -> SendOutcome {
        let text = text.into();

        let history = match self.begin_exchange(&text) {
            Ok(history) => history,
            Err(reason) => {
                debug!(session = %self.id, ?reason, "Send rejected");
                return SendOutcome::Rejected(reason);
            }
        };
        let _guard = PendingGuard::armed(self);

        let span = info_span!("exchange", session = %self.id, exchange = %new_correlation_id());
        let result = self
            .service
            .ask(&text, &history)
            .instrument(span.clone())
            .await;

        span.in_scope(|| self.commit(result))
    }

    /// Send whatever is in the draft buffer.
    pub async fn submit(&self) -> SendOutcome {
        let draft = self.draft();
        self.send_message(draft).await
    }

    fn commit(&self, result: Result<Reply, ReplyError>) -> SendOutcome {
        // Bot messages are never empty; an empty answer is a failed one.
        let result = result.and_then(|reply| {
            if reply.reply.is_empty() {
                Err(ReplyError::Application(None))
            } else {
                Ok(reply)
            }
        });
        let mut state = self.lock();

        match result {
            Ok(reply) => {
                let message = self.append(&mut state, Sender::Bot, &reply.reply);
                state.requests_used += 1;
                let used = state.requests_used;
                let limit = self.settings.quota_limit;
                self.publish(Event::QuotaUpdated { used, limit });

                debug!(used, limit, model = ?reply.model, "Reply received");
                if used >= limit {
                    info!(limit, "Request quota exhausted");
                }
                SendOutcome::Replied(message)
            }
            Err(ReplyError::Application(detail)) => {
                warn!(detail = ?detail, "Reply service reported an error");
                let text = detail
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| self.settings.fallback_error.clone());
                let message = self.append(&mut state, Sender::Bot, &text);
                SendOutcome::ApplicationError(message)
            }
            Err(e) => {
                warn!(error = %e, "Reply service unreachable");
                let message = self.append(&mut state, Sender::Bot, &self.settings.connection_error);
                SendOutcome::TransportError(message)
            }
        }
    }
}
