//! Chat section validation (quota, history window, texts).

use crate::schema::LitvinovConfig;

use super::helpers::{validate_non_blank, validate_range};

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &LitvinovConfig) {
    let chat = &config.chat;
    validate_range(errors, "chat.quota_limit", chat.quota_limit, 1, 1000);
    validate_range(errors, "chat.history_window", chat.history_window, 0, 100);
    validate_non_blank(errors, "chat.greeting", &chat.greeting);
    validate_non_blank(errors, "chat.fallback_error", &chat.fallback_error);
    validate_non_blank(errors, "chat.connection_error", &chat.connection_error);
}
