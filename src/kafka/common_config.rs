use rdkafka::config::ClientConfig;
use std::collections::HashMap;
use std::time::Duration;

/// Common configuration fields shared between producer, consumer and admin clients
#[derive(Debug, Clone)]
pub struct CommonKafkaConfig {
    /// Kafka broker list (e.g., "localhost:9092" or "broker1:9092,broker2:9092")
    pub brokers: String,
    /// Client ID for this client instance
    pub client_id: Option<String>,
    /// Request timeout for Kafka operations
    pub request_timeout: Duration,
    /// Additional custom configuration properties
    pub custom_config: HashMap<String, String>,
}

impl Default for CommonKafkaConfig {
    fn default() -> Self {
        Self {
            brokers: "localhost:9092".to_string(),
            client_id: None,
            request_timeout: Duration::from_secs(30),
            custom_config: HashMap::new(),
        }
    }
}

impl CommonKafkaConfig {
    /// Create a new common configuration with brokers
    pub fn new(brokers: impl Into<String>) -> Self {
        Self {
            brokers: brokers.into(),
            ..Default::default()
        }
    }

    /// Set client ID
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Add custom configuration property
    pub fn custom_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_config.insert(key.into(), value.into());
        self
    }

    /// Render into a fresh rdkafka `ClientConfig`.
    ///
    /// Custom properties are applied last so they can override anything set here.
    pub fn to_client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", &self.brokers)
            .set(
                "request.timeout.ms",
                self.request_timeout.as_millis().to_string(),
            );
        if let Some(client_id) = &self.client_id {
            config.set("client.id", client_id);
        }
        for (key, value) in &self.custom_config {
            config.set(key, value);
        }
        config
    }
}
