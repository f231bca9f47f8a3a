use std::path::PathBuf;

use clap::Parser;
use litvinov_config::schema::ServiceBackend;

/// LitvinovGPT, a personal AI assistant in your terminal.
#[derive(Parser, Debug)]
#[command(name = "litvinov", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Reply endpoint URL override.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Reply backend override (endpoint, openai).
    #[arg(long)]
    pub backend: Option<ServiceBackend>,

    /// Send one message, print the reply and exit.
    #[arg(short = 'm', long)]
    pub message: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "litvinov",
            "--backend",
            "openai",
            "--endpoint",
            "http://localhost:8080/chat",
            "-m",
            "Hello",
        ])
        .unwrap();
        assert_eq!(args.backend, Some(ServiceBackend::OpenAi));
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:8080/chat"));
        assert_eq!(args.message.as_deref(), Some("Hello"));
        assert!(args.config.is_none());
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Args::try_parse_from(["litvinov", "--backend", "grpc"]).is_err());
    }
}
