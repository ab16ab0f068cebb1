//! Domain event emission over NATS.
//!
//! Events are JSON-encoded and published on the subject returned by
//! [`DomainEvent::subject`]. Delivery is at-least-once and unordered; request
//! handlers use [`EventBus::emit`], which never fails the caller.

use std::sync::Arc;

use anyhow::{Context, Result};
use bytes::Bytes;
use tracing::{debug, warn};

use super::NatsPublisher;
use crate::domains::inquiries::DomainEvent;

#[derive(Clone)]
pub struct EventBus {
    publisher: Arc<dyn NatsPublisher>,
}

impl EventBus {
    pub fn new(publisher: Arc<dyn NatsPublisher>) -> Self {
        Self { publisher }
    }

    pub async fn publish(&self, event: &DomainEvent) -> Result<()> {
        let subject = event.subject();
        let payload = serde_json::to_vec(event)
            .with_context(|| format!("failed to encode event for {}", subject))?;

        debug!(subject = %subject, "Publishing event");
        self.publisher.publish(subject, Bytes::from(payload)).await
    }

    /// Fire-and-forget publish: failures are logged and swallowed.
    pub async fn emit(&self, event: DomainEvent) {
        if let Err(e) = self.publish(&event).await {
            warn!(subject = %event.subject(), error = %e, "Failed to emit event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::InquiryId;
    use crate::kernel::TestNats;

    #[tokio::test]
    async fn test_emit_publishes_json_on_event_subject() {
        let nats = Arc::new(TestNats::new());
        let bus = EventBus::new(nats.clone());
        let inquiry_id = InquiryId::new();

        bus.emit(DomainEvent::WatchlistArtistInquiry { inquiry_id }).await;

        let messages = nats.messages_for_subject("events.watchlist.artist_inquiry");
        assert_eq!(messages.len(), 1);
        let decoded: DomainEvent = nats.deserialize_message(&messages[0]).unwrap();
        assert_eq!(decoded, DomainEvent::WatchlistArtistInquiry { inquiry_id });
    }

    #[tokio::test]
    async fn test_emit_swallows_publish_failures() {
        let nats = Arc::new(TestNats::failing("no servers available"));
        let bus = EventBus::new(nats.clone());

        bus.emit(DomainEvent::read_inquiry(InquiryId::new())).await;

        assert!(bus
            .publish(&DomainEvent::read_inquiry(InquiryId::new()))
            .await
            .is_err());
        assert_eq!(nats.publish_count(), 0);
    }
}
