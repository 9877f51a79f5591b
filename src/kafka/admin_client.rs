//! Admin client utilities for Kafka topic management
//!
//! Topic creation is fire-and-forget against the cluster: each requested
//! topic gets its own [`TopicOutcome`] and a topic that already exists is
//! reported, not treated as a failure.

use crate::kafka::common_config::CommonKafkaConfig;
use crate::kafka::kafka_error::KafkaClientError;
use log::{error, info, warn};
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use std::time::Duration;

const ADMIN_TIMEOUT: Duration = Duration::from_secs(30);
const METADATA_TIMEOUT: Duration = Duration::from_secs(10);

/// Desired shape of a topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSpec {
    pub name: String,
    pub partitions: i32,
    pub replication_factor: i32,
}

impl TopicSpec {
    pub fn new(name: impl Into<String>, partitions: i32, replication_factor: i32) -> Self {
        Self {
            name: name.into(),
            partitions,
            replication_factor,
        }
    }
}

/// Per-topic result of a create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicOutcome {
    Created(String),
    AlreadyExists(String),
    Failed { topic: String, reason: String },
}

impl TopicOutcome {
    /// Map the broker's per-topic answer to an outcome
    pub fn from_result(result: Result<String, (String, RDKafkaErrorCode)>) -> Self {
        match result {
            Ok(topic) => TopicOutcome::Created(topic),
            Err((topic, RDKafkaErrorCode::TopicAlreadyExists)) => {
                TopicOutcome::AlreadyExists(topic)
            }
            Err((topic, code)) => TopicOutcome::Failed {
                topic,
                reason: code.to_string(),
            },
        }
    }

    pub fn topic(&self) -> &str {
        match self {
            TopicOutcome::Created(topic) | TopicOutcome::AlreadyExists(topic) => topic,
            TopicOutcome::Failed { topic, .. } => topic,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TopicOutcome::Failed { .. })
    }
}

/// Admin client for managing Kafka topics
pub struct KafkaAdminClient {
    admin: AdminClient<DefaultClientContext>,
}

impl KafkaAdminClient {
    /// Create a new admin client
    pub fn new(config: &CommonKafkaConfig) -> Result<Self, KafkaError> {
        let admin: AdminClient<DefaultClientContext> = config.to_client_config().create()?;
        Ok(Self { admin })
    }

    /// Create every topic in `specs`, logging one line per topic
    ///
    /// Only a request-level failure is returned as `Err`; per-topic failures
    /// are carried in the returned outcomes.
    pub async fn create_topics(
        &self,
        specs: &[TopicSpec],
    ) -> Result<Vec<TopicOutcome>, KafkaClientError> {
        let new_topics: Vec<NewTopic<'_>> = specs
            .iter()
            .map(|spec| {
                NewTopic::new(
                    &spec.name,
                    spec.partitions,
                    TopicReplication::Fixed(spec.replication_factor),
                )
            })
            .collect();

        let admin_opts = AdminOptions::new()
            .operation_timeout(Some(ADMIN_TIMEOUT))
            .request_timeout(Some(ADMIN_TIMEOUT));

        let results = self.admin.create_topics(&new_topics, &admin_opts).await?;

        let outcomes: Vec<TopicOutcome> =
            results.into_iter().map(TopicOutcome::from_result).collect();
        for outcome in &outcomes {
            log_outcome(outcome, specs);
        }
        Ok(outcomes)
    }

    /// Check if a topic exists
    pub fn topic_exists(&self, topic_name: &str) -> Result<bool, KafkaClientError> {
        let metadata = self
            .admin
            .inner()
            .fetch_metadata(Some(topic_name), METADATA_TIMEOUT)?;

        Ok(metadata
            .topics()
            .iter()
            .any(|topic| topic.name() == topic_name && topic.error().is_none()))
    }

    /// Get topic partition count, `None` when the topic is unknown
    pub fn partition_count(&self, topic_name: &str) -> Result<Option<usize>, KafkaClientError> {
        let metadata = self
            .admin
            .inner()
            .fetch_metadata(Some(topic_name), METADATA_TIMEOUT)?;

        Ok(metadata
            .topics()
            .iter()
            .find(|topic| topic.name() == topic_name && topic.error().is_none())
            .map(|topic| topic.partitions().len()))
    }
}

fn log_outcome(outcome: &TopicOutcome, specs: &[TopicSpec]) {
    match outcome {
        TopicOutcome::Created(topic) => {
            match specs.iter().find(|spec| &spec.name == topic) {
                Some(spec) => info!(
                    "Topic {} created with {} partition(s), replication factor {}",
                    topic, spec.partitions, spec.replication_factor
                ),
                None => info!("Topic {} created", topic),
            }
        }
        TopicOutcome::AlreadyExists(topic) => {
            warn!("Topic {} already exists, continuing", topic)
        }
        TopicOutcome::Failed { topic, reason } => {
            error!("Failed to create topic {}: {}", topic, reason)
        }
    }
}
