//! Session settings, outcomes and the pending guard.

use litvinov_common::defaults::{
    DEFAULT_CONNECTION_ERROR, DEFAULT_FALLBACK_ERROR, DEFAULT_GREETING,
};

use crate::Message;

use super::manager::ChatSession;

/// Per-session limits and the texts the session writes on its own.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub quota_limit: u32,
    pub history_window: usize,
    pub greeting: String,
    pub fallback_error: String,
    pub connection_error: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            quota_limit: 10,
            history_window: 10,
            greeting: DEFAULT_GREETING.to_string(),
            fallback_error: DEFAULT_FALLBACK_ERROR.to_string(),
            connection_error: DEFAULT_CONNECTION_ERROR.to_string(),
        }
    }
}

/// Why a send was refused without touching the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    EmptyInput,
    QuotaExhausted,
    Busy,
}

/// What a `send_message` call did. All but `Rejected` appended a user
/// message followed by the carried bot message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Rejected(RejectReason),
    Replied(Message),
    ApplicationError(Message),
    TransportError(Message),
}

impl SendOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, SendOutcome::Rejected(_))
    }

    pub fn bot_message(&self) -> Option<&Message> {
        match self {
            SendOutcome::Rejected(_) => None,
            SendOutcome::Replied(m)
            | SendOutcome::ApplicationError(m)
            | SendOutcome::TransportError(m) => Some(m),
        }
    }
}

/// Everything a front end needs to draw the chat at one instant.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub requests_used: u32,
    pub quota_limit: u32,
    pub pending: bool,
    pub draft: String,
}

impl SessionSnapshot {
    pub fn is_exhausted(&self) -> bool {
        self.requests_used >= self.quota_limit
    }
}

/// Clears the session's `pending` flag on drop, so it is released even if
/// the exchange future is dropped before the reply arrives.
pub(crate) struct PendingGuard<'a> {
    session: &'a ChatSession,
}

impl<'a> PendingGuard<'a> {
    /// Only valid right after `ChatSession::begin_exchange` succeeded.
    pub(crate) fn armed(session: &'a ChatSession) -> Self {
        Self { session }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.session.finish_exchange();
    }
}
