use crate::kafka::common_config::CommonKafkaConfig;
use rdkafka::config::ClientConfig;
use std::time::Duration;

/// Configuration for the transaction consumer with sensible defaults
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// Common configuration shared with producer
    pub common: CommonKafkaConfig,
    /// Consumer group ID
    pub group_id: String,
    /// Static membership identity (`group.instance.id`)
    pub group_instance_id: Option<String>,
    /// Auto offset reset behavior
    pub auto_offset_reset: OffsetReset,
    /// Enable auto commit
    pub enable_auto_commit: bool,
    /// Auto commit interval
    pub auto_commit_interval: Duration,
    /// Session timeout
    pub session_timeout: Duration,
    /// Partition assignment strategy
    pub assignment_strategy: AssignmentStrategy,
    /// Bound on each poll; an empty poll just loops
    pub poll_timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetReset {
    /// Reset to earliest available offset
    Earliest,
    /// Reset to latest offset
    Latest,
    /// Throw error if no initial offset
    None,
}

impl OffsetReset {
    pub fn as_str(&self) -> &'static str {
        match self {
            OffsetReset::Earliest => "earliest",
            OffsetReset::Latest => "latest",
            OffsetReset::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStrategy {
    Range,
    RoundRobin,
    CooperativeSticky,
}

impl AssignmentStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStrategy::Range => "range",
            AssignmentStrategy::RoundRobin => "roundrobin",
            AssignmentStrategy::CooperativeSticky => "cooperative-sticky",
        }
    }
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            common: CommonKafkaConfig::default(),
            group_id: "test_consumers".to_string(),
            group_instance_id: None,
            auto_offset_reset: OffsetReset::Earliest,
            enable_auto_commit: true,
            auto_commit_interval: Duration::from_secs(5),
            session_timeout: Duration::from_secs(45),
            assignment_strategy: AssignmentStrategy::CooperativeSticky,
            poll_timeout: Duration::from_secs(1),
        }
    }
}

impl ConsumerConfig {
    /// Create a new config with brokers and group ID
    pub fn new(brokers: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            common: CommonKafkaConfig::new(brokers),
            group_id: group_id.into(),
            ..Default::default()
        }
    }

    /// Set client ID
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.common = self.common.client_id(client_id);
        self
    }

    /// Join the group with a static member identity
    pub fn group_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.group_instance_id = Some(instance_id.into());
        self
    }

    /// Set auto offset reset behavior
    pub fn auto_offset_reset(mut self, reset: OffsetReset) -> Self {
        self.auto_offset_reset = reset;
        self
    }

    /// Configure auto commit
    pub fn auto_commit(mut self, enable: bool, interval: Duration) -> Self {
        self.enable_auto_commit = enable;
        self.auto_commit_interval = interval;
        self
    }

    /// Set session timeout
    pub fn session_timeout(mut self, timeout: Duration) -> Self {
        self.session_timeout = timeout;
        self
    }

    /// Set partition assignment strategy
    pub fn assignment_strategy(mut self, strategy: AssignmentStrategy) -> Self {
        self.assignment_strategy = strategy;
        self
    }

    /// Set poll timeout
    pub fn poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
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
            .set("group.id", &self.group_id)
            .set("auto.offset.reset", self.auto_offset_reset.as_str())
            .set("enable.auto.commit", self.enable_auto_commit.to_string())
            .set(
                "auto.commit.interval.ms",
                self.auto_commit_interval.as_millis().to_string(),
            )
            .set(
                "session.timeout.ms",
                self.session_timeout.as_millis().to_string(),
            )
            .set(
                "partition.assignment.strategy",
                self.assignment_strategy.as_str(),
            );
        if let Some(instance_id) = &self.group_instance_id {
            config.set("group.instance.id", instance_id);
        }
        for (key, value) in &self.common.custom_config {
            config.set(key, value);
        }
        config
    }
}
