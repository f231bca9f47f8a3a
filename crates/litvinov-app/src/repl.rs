//! Interactive and one-shot chat loops.

use std::io::Write;
use std::sync::Arc;

use litvinov_chat::{ChatSession, RejectReason, SendOutcome};
use litvinov_common::{Event, EventBus, LitvinovError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use crate::transcript::{format_message, prompt, quota_line, EXHAUSTED_PROMPT, TYPING};

/// Print every message from `from` onward; returns the new printed count.
fn print_from(session: &ChatSession, from: usize) -> usize {
    let messages = session.messages();
    for message in messages.iter().skip(from) {
        println!("{}", format_message(message));
    }
    messages.len()
}

/// Show the busy line whenever an exchange starts.
fn spawn_typing_indicator(bus: &EventBus) -> tokio::task::JoinHandle<()> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(Event::PendingChanged(true)) => println!("{TYPING}"),
                Ok(Event::Shutdown) | Err(RecvError::Closed) => break,
                Ok(_) | Err(RecvError::Lagged(_)) => {}
            }
        }
    })
}

/// Apply one line of user input. Returns false when the user asked to leave.
async fn handle_line(session: &ChatSession, line: &str, printed: &mut usize) -> bool {
    match line.trim() {
        "/quit" | "/exit" => return false,
        "/status" => {
            println!("{}", quota_line(session.requests_used(), session.quota_limit()));
            return true;
        }
        _ => {}
    }

    session.set_draft(line);
    match session.submit().await {
        SendOutcome::Rejected(RejectReason::QuotaExhausted) => println!("{EXHAUSTED_PROMPT}"),
        SendOutcome::Rejected(reason) => tracing::debug!(?reason, "Input ignored"),
        _ => {
            *printed = print_from(session, *printed);
            println!("{}", quota_line(session.requests_used(), session.quota_limit()));
        }
    }
    true
}

pub(crate) async fn run_interactive(
    session: Arc<ChatSession>,
    bus: Arc<EventBus>,
) -> litvinov_common::Result<()> {
    let indicator = spawn_typing_indicator(&bus);

    let mut printed = print_from(&session, 0);
    println!("{}", quota_line(session.requests_used(), session.quota_limit()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} > ", prompt(&session.snapshot()));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if !handle_line(&session, &line, &mut printed).await {
            break;
        }
    }

    bus.publish(Event::Shutdown);
    let _ = indicator.await;
    tracing::info!(used = session.requests_used(), "Session closed");
    Ok(())
}

pub(crate) async fn run_once(session: &ChatSession, message: String) -> litvinov_common::Result<()> {
    let outcome = session.send_message(message).await;
    if let SendOutcome::Rejected(reason) = &outcome {
        return Err(LitvinovError::Other(format!("message not sent: {reason:?}")));
    }

    print_from(session, 0);
    println!("{}", quota_line(session.requests_used(), session.quota_limit()));

    match outcome {
        SendOutcome::TransportError(_) => {
            Err(LitvinovError::Service("reply service unreachable".into()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use litvinov_chat::{Message, Reply, ReplyError, ReplyService};

    struct Echo;

    #[async_trait]
    impl ReplyService for Echo {
        async fn ask(&self, message: &str, _history: &[Message]) -> Result<Reply, ReplyError> {
            Ok(Reply::new(format!("echo: {message}")))
        }
    }

    struct Down;

    #[async_trait]
    impl ReplyService for Down {
        async fn ask(&self, _message: &str, _history: &[Message]) -> Result<Reply, ReplyError> {
            Err(ReplyError::Network("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn quit_and_status_do_not_send() {
        let session = ChatSession::new(Arc::new(Echo));
        let mut printed = 1;

        assert!(handle_line(&session, "/status", &mut printed).await);
        assert!(!handle_line(&session, "/quit", &mut printed).await);
        assert_eq!(session.message_count(), 1);
    }

    #[tokio::test]
    async fn line_is_sent_and_printed() {
        let session = ChatSession::new(Arc::new(Echo));
        let mut printed = 1;

        assert!(handle_line(&session, "Hello", &mut printed).await);
        assert_eq!(printed, 3);
        assert_eq!(session.messages()[2].text, "echo: Hello");
        assert_eq!(session.draft(), "");
    }

    #[tokio::test]
    async fn blank_line_changes_nothing() {
        let session = ChatSession::new(Arc::new(Echo));
        let mut printed = 1;

        assert!(handle_line(&session, "   ", &mut printed).await);
        assert_eq!(printed, 1);
        assert_eq!(session.message_count(), 1);
    }

    #[tokio::test]
    async fn one_shot_reports_unreachable_service() {
        let session = ChatSession::new(Arc::new(Down));
        let err = run_once(&session, "test".into()).await.unwrap_err();
        assert!(matches!(err, LitvinovError::Service(_)));
        assert_eq!(session.message_count(), 3);
    }

    #[tokio::test]
    async fn one_shot_rejects_blank_message() {
        let session = ChatSession::new(Arc::new(Echo));
        assert!(run_once(&session, " ".into()).await.is_err());
        assert_eq!(session.message_count(), 1);
    }
}
