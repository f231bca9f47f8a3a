//! Plain-text rendering of the chat for the terminal.

use chrono::Local;
use litvinov_chat::{Message, Sender, SessionSnapshot};

const BAR_WIDTH: u32 = 10;

pub(crate) const PROMPT: &str = "Напишите сообщение...";
pub(crate) const EXHAUSTED_PROMPT: &str = "Лимит исчерпан. Обновите тариф!";
pub(crate) const TYPING: &str = "LitvinovGPT печатает...";

pub(crate) fn format_message(message: &Message) -> String {
    let who = match message.sender {
        Sender::Bot => "LG",
        Sender::User => "Вы",
    };
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    format!("[{time}] {who}: {}", message.text)
}

/// `3/10 запросов [###-------]`
pub(crate) fn quota_line(used: u32, limit: u32) -> String {
    let filled = if limit == 0 {
        BAR_WIDTH
    } else {
        (used.min(limit) * BAR_WIDTH) / limit
    };
    let bar: String = (0..BAR_WIDTH)
        .map(|i| if i < filled { '#' } else { '-' })
        .collect();
    format!("{used}/{limit} запросов [{bar}]")
}

pub(crate) fn prompt(snapshot: &SessionSnapshot) -> &'static str {
    if snapshot.is_exhausted() {
        EXHAUSTED_PROMPT
    } else {
        PROMPT
    }
}
