//! ChatSession struct, state access and the exchange bookkeeping.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use litvinov_common::{Event, EventBus, SessionId};
use tracing::debug;

use crate::{Message, ReplyService, Sender};

use super::types::{ChatSettings, RejectReason, SessionSnapshot};

/// Mutable session state. Always accessed through `ChatSession::lock`.
pub(super) struct SessionState {
    pub(super) messages: Vec<Message>,
    pub(super) next_id: u64,
    pub(super) requests_used: u32,
    pub(super) pending: bool,
    pub(super) draft: String,
}

impl SessionState {
    fn seeded(greeting: &str) -> Self {
        Self {
            messages: vec![Message::new(1, Sender::Bot, greeting)],
            next_id: 2,
            requests_used: 0,
            pending: false,
            draft: String::new(),
        }
    }
}

/// One chat: the message log, the request quota and the in-flight gate.
pub struct ChatSession {
    pub(super) id: SessionId,
    pub(super) settings: ChatSettings,
    pub(super) service: Arc<dyn ReplyService>,
    /// Display event sink, if a front end is listening.
    pub(super) events: Option<Arc<EventBus>>,
    pub(super) state: Mutex<SessionState>,
}

impl ChatSession {
    pub fn new(service: Arc<dyn ReplyService>) -> Self {
        let settings = ChatSettings::default();
        let state = SessionState::seeded(&settings.greeting);
        Self {
            id: SessionId::new(),
            settings,
            service,
            events: None,
            state: Mutex::new(state),
        }
    }

    /// Replace the settings. Reseeds the log with the new greeting, so call
    /// this before the first send.
    pub fn with_settings(mut self, settings: ChatSettings) -> Self {
        self.state = Mutex::new(SessionState::seeded(&settings.greeting));
        self.settings = settings;
        self
    }

    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Ordered copy of the log, greeting first.
    pub fn messages(&self) -> Vec<Message> {
        self.lock().messages.clone()
    }

    pub fn message_count(&self) -> usize {
        self.lock().messages.len()
    }

    pub fn requests_used(&self) -> u32 {
        self.lock().requests_used
    }

    pub fn quota_limit(&self) -> u32 {
        self.settings.quota_limit
    }

    pub fn remaining(&self) -> u32 {
        self.settings.quota_limit.saturating_sub(self.requests_used())
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn is_pending(&self) -> bool {
        self.lock().pending
    }

    pub fn draft(&self) -> String {
        self.lock().draft.clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.lock().draft = text.into();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        SessionSnapshot {
            messages: state.messages.clone(),
            requests_used: state.requests_used,
            quota_limit: self.settings.quota_limit,
            pending: state.pending,
            draft: state.draft.clone(),
        }
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Check the send preconditions and, if they hold, record the user
    /// message and mark the session pending, all under one lock.
    ///
    /// Returns the context window as it was before the user message.
    pub(super) fn begin_exchange(&self, text: &str) -> Result<Vec<Message>, RejectReason> {
        let mut state = self.lock();

        if text.trim().is_empty() {
            return Err(RejectReason::EmptyInput);
        }
        if state.requests_used >= self.settings.quota_limit {
            return Err(RejectReason::QuotaExhausted);
        }
        if state.pending {
            return Err(RejectReason::Busy);
        }

        let skip = state
            .messages
            .len()
            .saturating_sub(self.settings.history_window);
        let history = state.messages[skip..].to_vec();

        self.append(&mut state, Sender::User, text);
        state.pending = true;
        state.draft.clear();
        self.publish(Event::PendingChanged(true));

        Ok(history)
    }

    pub(super) fn append(&self, state: &mut SessionState, sender: Sender, text: &str) -> Message {
        let message = Message::new(state.next_id, sender, text);
        state.next_id += 1;
        state.messages.push(message.clone());

        debug!(session = %self.id, id = message.id, sender = sender.as_str(), "Message appended");
        self.publish(Event::MessageAppended {
            id: message.id,
            sender: sender.as_str().to_string(),
            text: message.text.clone(),
        });
        message
    }

    /// Clear the pending flag. Called by `PendingGuard` on drop.
    pub(super) fn finish_exchange(&self) {
        let mut state = self.lock();
        if state.pending {
            state.pending = false;
            self.publish(Event::PendingChanged(false));
        }
    }

    pub(super) fn publish(&self, event: Event) {
        if let Some(ref bus) = self.events {
            bus.publish(event);
        }
    }
}
