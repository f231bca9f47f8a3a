//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# LitvinovGPT Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[chat]
# quota_limit = 10        # 1-1000, successful replies per session
# history_window = 10     # 0-100, prior messages sent as context
# greeting = "Привет! Я LitvinovGPT — твой личный ИИ-ассистент. Как я могу помочь?"
# fallback_error = "Ошибка получения ответа. Проверьте настройки API ключа."
# connection_error = "Ошибка соединения с сервером. Попробуйте позже."

[service]
backend = "endpoint"      # endpoint, openai

[service.endpoint]
# url = "https://functions.poehali.dev/b97cb280-e6f5-4d55-a641-3b1adc8edcf1"
# connect_timeout = 10    # seconds, 1-120
# request_timeout = 60    # seconds, 1-600

[service.openai]
# base_url = "https://api.openai.com/v1"
# api_key = ""            # empty = $OPENAI_API_KEY
# model = "gpt-4o-mini"
# max_tokens = 500        # 1-16384
# temperature = 0.7       # 0.0-2.0
# request_timeout = 60    # seconds, 1-600

[logging]
# level = "INFO"          # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
