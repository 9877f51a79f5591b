use crate::kafka::common_config::CommonKafkaConfig;
use rdkafka::config::ClientConfig;
use std::time::Duration;

/// Configuration for the transaction producer
#[derive(Debug, Clone)]
pub struct ProducerConfig {
    /// Common configuration shared with consumer
    pub common: CommonKafkaConfig,
    /// Topic records are published to
    pub topic: String,
    /// Time librdkafka may spend delivering a message before reporting failure
    pub message_timeout: Duration,
    /// Ack mode
    pub acks: AckMode,
    /// Upper bound on the blocking flush at the end of a batch
    pub flush_timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckMode {
    /// Don't wait for acknowledgment
    None,
    /// Wait for leader acknowledgment only
    Leader,
    /// Wait for all in-sync replicas
    All,
}

impl AckMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AckMode::None => "0",
            AckMode::Leader => "1",
            AckMode::All => "all",
        }
    }
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            common: CommonKafkaConfig::default(),
            topic: "transactions".to_string(),
            message_timeout: Duration::from_secs(30),
            acks: AckMode::All,
            flush_timeout: Duration::from_secs(60),
        }
    }
}

impl ProducerConfig {
    /// Create a new config with brokers and target topic
    pub fn new(brokers: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            common: CommonKafkaConfig::new(brokers),
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// Set client ID
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.common = self.common.client_id(client_id);
        self
    }

    /// Set message timeout
    pub fn message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    /// Set ack mode
    pub fn acks(mut self, acks: AckMode) -> Self {
        self.acks = acks;
        self
    }

    /// Set flush timeout
    pub fn flush_timeout(mut self, timeout: Duration) -> Self {
        self.flush_timeout = timeout;
        self
    }

    /// Add custom configuration property
    pub fn custom_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.common = self.common.custom_property(key, value);
        self
    }

    pub fn brokers(&self) -> &str {
        &self.common.brokers
    }

    pub fn to_client_config(&self) -> ClientConfig {
        let mut config = self.common.to_client_config();
        config
            .set(
                "message.timeout.ms",
                self.message_timeout.as_millis().to_string(),
            )
            .set("acks", self.acks.as_str());
        // Re-apply so user overrides win over the producer defaults above
        for (key, value) in &self.common.custom_config {
            config.set(key, value);
        }
        config
    }
}
