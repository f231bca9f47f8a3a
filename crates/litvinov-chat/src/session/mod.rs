//! Quota-gated chat session.
//!
//! A `ChatSession` owns the append-only message log, the request counter
//! and the single in-flight exchange gate. `send_message` validates under
//! the session lock, awaits the reply service without holding it, then
//! commits the outcome as a bot message.

mod manager;
mod send;
mod types;


pub use manager::ChatSession;
pub use types::{ChatSettings, RejectReason, SendOutcome, SessionSnapshot};
