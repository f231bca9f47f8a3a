//! Display events published by a chat session.
//!
//! Front ends subscribe to the bus to redraw the transcript, the busy
//! indicator and the quota bar without polling the session.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    MessageAppended {
        id: u64,
        sender: String,
        text: String,
    },
    PendingChanged(bool),
    QuotaUpdated {
        used: u32,
        limit: u32,
    },
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that saw the event.
    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::PendingChanged(true));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::PendingChanged(true)));
    }

    #[tokio::test]
    async fn events_arrive_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::MessageAppended {
            id: 2,
            sender: "user".into(),
            text: "Hello".into(),
        });
        bus.publish(Event::QuotaUpdated { used: 1, limit: 10 });
        bus.publish(Event::PendingChanged(false));

        let e1 = rx.recv().await.unwrap();
        assert!(
            matches!(e1, Event::MessageAppended { id: 2, ref sender, ref text } if sender == "user" && text == "Hello")
        );
        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, Event::QuotaUpdated { used: 1, limit: 10 }));
        let e3 = rx.recv().await.unwrap();
        assert!(matches!(e3, Event::PendingChanged(false)));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(Event::Shutdown), 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        assert_eq!(bus.publish(Event::Shutdown), 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomethingNew","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }
}
