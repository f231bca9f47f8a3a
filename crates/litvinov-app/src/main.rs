mod cli;
mod repl;
mod setup;
mod transcript;

use std::process::ExitCode;
use std::sync::Arc;

use litvinov_chat::ChatSession;
use litvinov_common::EventBus;
use litvinov_config::LitvinovConfig;
use tracing_subscriber::EnvFilter;

const EVENT_CAPACITY: usize = 64;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        std::path::PathBuf::from(".env"),
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        let Ok(contents) = std::fs::read_to_string(path) else {
            continue;
        };
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                if std::env::var_os(key).is_none() {
                    std::env::set_var(key, value);
                }
            }
        }
        return;
    }
}

fn log_filter(level: &str) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env();
    for target in ["litvinov_app", "litvinov_chat", "litvinov_config"] {
        if let Ok(directive) = format!("{target}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();
    let args = cli::parse();

    // Logging is not up yet, so keep the error until it is.
    let loaded = match &args.config {
        Some(path) => litvinov_config::load_config_from(path),
        None => litvinov_config::load_config(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (LitvinovConfig::default(), Some(e)),
    };

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_directive().to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&level))
        .init();

    tracing::info!("LitvinovGPT v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Some(url) = args.endpoint {
        config.service.endpoint.url = url;
    }
    if let Some(backend) = args.backend {
        config.service.backend = backend;
    }

    let service = match setup::build_service(&config.service) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Failed to create reply service: {e}");
            return ExitCode::FAILURE;
        }
    };

    let bus = Arc::new(EventBus::new(EVENT_CAPACITY));
    let session = Arc::new(
        ChatSession::new(service)
            .with_settings(setup::chat_settings(&config.chat))
            .with_event_bus(Arc::clone(&bus)),
    );
    tracing::info!(
        session = %session.id(),
        backend = ?config.service.backend,
        quota = session.quota_limit(),
        "Session started"
    );

    let result = match args.message {
        Some(text) => repl::run_once(&session, text).await,
        None => repl::run_interactive(Arc::clone(&session), bus).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
