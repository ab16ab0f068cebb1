//! NATS client abstraction for production and testing.
//!
//! The event bus publishes through [`NatsPublisher`] so tests can swap the
//! real connection for [`TestNats`] and inspect what went out.

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::RwLock;

/// A published message.
#[derive(Debug, Clone)]
pub struct PublishedMessage {
    pub subject: String,
    pub payload: Bytes,
}

/// Trait for NATS publish operations.
#[async_trait]
pub trait NatsPublisher: Send + Sync {
    /// Publish a message to a subject.
    async fn publish(&self, subject: String, payload: Bytes) -> Result<()>;
}

/// Real NATS client publisher.
pub struct NatsClientPublisher {
    client: async_nats::Client,
}

impl NatsClientPublisher {
    pub fn new(client: async_nats::Client) -> Self {
        Self { client }
    }

    pub async fn connect(url: &str) -> Result<Self> {
        let client = async_nats::connect(url).await?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl NatsPublisher for NatsClientPublisher {
    async fn publish(&self, subject: String, payload: Bytes) -> Result<()> {
        self.client.publish(subject, payload).await?;
        Ok(())
    }
}

/// Mock NATS client that records published messages.
#[derive(Default)]
pub struct TestNats {
    published: RwLock<Vec<PublishedMessage>>,
    /// When set, every publish fails with this message.
    failure: RwLock<Option<String>>,
}

impl TestNats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publisher whose every publish fails, for exercising fire-and-forget paths.
    pub fn failing(message: &str) -> Self {
        let nats = Self::default();
        *nats.failure.write().unwrap_or_else(|e| e.into_inner()) = Some(message.to_string());
        nats
    }

    pub fn record_publish(&self, subject: String, payload: Bytes) {
        self.published
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(PublishedMessage { subject, payload });
    }

    pub fn published_messages(&self) -> Vec<PublishedMessage> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn messages_for_subject(&self, subject: &str) -> Vec<PublishedMessage> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|m| m.subject == subject)
            .cloned()
            .collect()
    }

    /// Subjects in publish order.
    pub fn subjects(&self) -> Vec<String> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|m| m.subject.clone())
            .collect()
    }

    pub fn was_published_to(&self, subject: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|m| m.subject == subject)
    }

    pub fn publish_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn publish_count_for(&self, subject: &str) -> usize {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|m| m.subject == subject)
            .count()
    }

    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    /// Deserialize a published message payload as JSON.
    pub fn deserialize_message<T: serde::de::DeserializeOwned>(
        &self,
        msg: &PublishedMessage,
    ) -> std::result::Result<T, serde_json::Error> {
        serde_json::from_slice(&msg.payload)
    }
}

#[async_trait]
impl NatsPublisher for TestNats {
    async fn publish(&self, subject: String, payload: Bytes) -> Result<()> {
        let failure = self
            .failure
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(message) = failure {
            anyhow::bail!("{}", message);
        }
        self.record_publish(subject, payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_published_messages() {
        let nats = TestNats::new();

        nats.publish("events.read.inquiry".to_string(), Bytes::from(r#"{"id":"1"}"#))
            .await
            .unwrap();
        nats.publish("events.crm.x".to_string(), Bytes::new())
            .await
            .unwrap();

        assert_eq!(nats.publish_count(), 2);
        assert_eq!(nats.publish_count_for("events.read.inquiry"), 1);
        assert!(!nats.was_published_to("events.read.gig_invite"));
        assert_eq!(nats.subjects(), vec!["events.read.inquiry", "events.crm.x"]);
    }

    #[tokio::test]
    async fn test_failing_publisher_records_nothing() {
        let nats = TestNats::failing("connection refused");

        let result = nats.publish("events.any".to_string(), Bytes::new()).await;

        assert!(result.is_err());
        assert_eq!(nats.publish_count(), 0);
    }

    #[test]
    fn test_clear() {
        let nats = TestNats::new();
        nats.record_publish("test".to_string(), Bytes::new());
        nats.clear();
        assert_eq!(nats.publish_count(), 0);
    }
}
