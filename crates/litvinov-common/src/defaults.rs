//! Product texts shared by the chat core and its configuration.

pub const DEFAULT_GREETING: &str =
    "Привет! Я LitvinovGPT — твой личный ИИ-ассистент. Как я могу помочь?";

/// Shown when the service fails without saying why.
pub const DEFAULT_FALLBACK_ERROR: &str = "Ошибка получения ответа. Проверьте настройки API ключа.";

/// Shown when the service cannot be reached.
pub const DEFAULT_CONNECTION_ERROR: &str = "Ошибка соединения с сервером. Попробуйте позже.";

/// Persona sent as the system message to OpenAI-compatible upstreams.
pub const DEFAULT_SYSTEM_PROMPT: &str = "Ты — LitvinovGPT, умный и дружелюбный ИИ-ассистент. \
Отвечай кратко, по делу и полезно. Помогай с вопросами, задачами, кодом и идеями.";
