//! Direct OpenAI-compatible chat completions client.
//!
//! Does the hosted endpoint's job in-process: prepends the assistant
//! persona, maps the recent transcript to chat roles and asks
//! `{base_url}/chat/completions` for one non-streamed answer.

mod api;
mod client;
mod config;

pub use client::OpenAiReplyService;
pub use config::OpenAiConfig;
