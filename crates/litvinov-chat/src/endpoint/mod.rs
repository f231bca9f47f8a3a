//! Hosted reply endpoint client.
//!
//! Posts `{message, history}` as JSON and expects `{reply}` back, or
//! `{error}` when the endpoint could not produce an answer.

mod api;
mod client;
mod config;

pub use client::{classify_response, HttpReplyService};
pub use config::HttpReplyConfig;
