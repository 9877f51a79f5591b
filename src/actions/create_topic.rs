use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::kafka::{KafkaAdminClient, TopicOutcome};

/// Create the configured topic; a topic that already exists is not an error
pub async fn run_create_topic(config: &AppConfig) -> AppResult<Vec<TopicOutcome>> {
    let admin = KafkaAdminClient::new(&config.admin_config())
        .map_err(|e| AppError::kafka(e, "creating admin client"))?;

    admin
        .create_topics(std::slice::from_ref(&config.topic))
        .await
        .map_err(|e| AppError::kafka(e, format!("creating topic {}", config.topic.name)))
}
