use serde_json::Value;
use tokio::sync::broadcast;

/// Serializable envelope carrying a per-user topic and its payload.
#[derive(Clone, Debug)]
pub struct PushEvent {
    pub topic: String,
    pub payload: Value,
}

/// Lightweight broadcast bus that fans out push events to any connected
/// subscribers. There is no delivery guarantee and no replay: a subscriber
/// that connects after a publish sees only the next one.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<PushEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PushEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, topic: impl Into<String>, payload: Value) {
        // Lagging or absent listeners are ignored to avoid blocking producers.
        let _ = self.sender.send(PushEvent {
            topic: topic.into(),
            payload,
        });
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(crate::constants::PUSH_BUS_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        bus.publish("totalsUpdated:u1", json!({"totalBalance": 10}));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.topic, "totalsUpdated:u1");
        assert_eq!(event.payload["totalBalance"], 10);
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus = EventBus::new(8);
        bus.publish("totalsUpdated:u1", json!(null));
    }
}
