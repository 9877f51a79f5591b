//! Runtime configuration, loaded once at startup and passed down explicitly

use crate::error::{AppError, AppResult};
use crate::kafka::{CommonKafkaConfig, ConsumerConfig, ProducerConfig, TopicSpec};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the comma-separated bootstrap broker list
pub const BROKERS_ENV_VAR: &str = "KAFKA_BROKERS";

pub const DEFAULT_TOPIC: &str = "transactions";
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_CONSUMER_ID: &str = "test_consumer_1";
pub const DEFAULT_CONSUMER_GROUP: &str = "test_consumers";

/// Load a `.env` file from the working directory or its parents
///
/// Variables already set in the environment win. A missing file is not an
/// error; an unreadable or malformed one is.
pub fn load_dotenv() -> AppResult<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(AppError::config(format!("Failed to load .env file: {}", e))),
    }
}

/// Load a specific env file; returns whether it existed
pub fn load_dotenv_from(path: &Path) -> AppResult<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(AppError::config(format!(
            "Failed to load {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Read the broker list from the process environment
pub fn brokers_from_env() -> AppResult<String> {
    brokers_from_lookup(|name| std::env::var(name).ok())
}

/// Read the broker list through `lookup`; missing or blank is a config error
pub fn brokers_from_lookup<F>(lookup: F) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(BROKERS_ENV_VAR) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Some(_) => Err(AppError::config(format!(
            "{} is set but empty",
            BROKERS_ENV_VAR
        ))),
        None => Err(AppError::config(format!(
            "Could not read bootstrap servers from environment variable {}",
            BROKERS_ENV_VAR
        ))),
    }
}

/// Everything one action invocation needs
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub brokers: String,
    pub topic: TopicSpec,
    pub batch_size: usize,
    pub consumer_group: String,
    pub consumer_id: String,
    pub poll_timeout: Duration,
}

impl AppConfig {
    pub fn new(brokers: impl Into<String>) -> Self {
        Self {
            brokers: brokers.into(),
            topic: TopicSpec::new(DEFAULT_TOPIC, 1, 3),
            batch_size: DEFAULT_BATCH_SIZE,
            consumer_group: DEFAULT_CONSUMER_GROUP.to_string(),
            consumer_id: DEFAULT_CONSUMER_ID.to_string(),
            poll_timeout: Duration::from_secs(1),
        }
    }

    pub fn admin_config(&self) -> CommonKafkaConfig {
        CommonKafkaConfig::new(&self.brokers).client_id("transaction-stream-admin")
    }

    pub fn producer_config(&self) -> ProducerConfig {
        ProducerConfig::new(&self.brokers, &self.topic.name).client_id("transaction-stream-producer")
    }

    pub fn consumer_config(&self) -> ConsumerConfig {
        ConsumerConfig::new(&self.brokers, &self.consumer_group)
            .client_id(&self.consumer_id)
            .group_instance_id(&self.consumer_id)
            .poll_timeout(self.poll_timeout)
    }
}
