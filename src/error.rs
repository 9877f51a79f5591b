/*!
# Application Error Types

Top-level error handling for the CLI. Only the variants here can end the
process with a failure exit code; everything below them is logged and
recovered where it happens.
*/

use crate::kafka::kafka_error::KafkaClientError;
use rdkafka::error::KafkaError;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration errors, reported before any broker interaction
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Kafka-related errors with context
    #[error("Kafka operation failed: {message}")]
    Kafka {
        #[source]
        source: KafkaClientError,
        message: String,
    },

    /// Installing the interrupt handler failed
    #[error("Failed to install signal handler")]
    Signal(#[from] std::io::Error),
}

impl AppError {
    /// Helper to create configuration errors
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Helper to create Kafka errors with context
    pub fn kafka(source: impl Into<KafkaClientError>, message: impl Into<String>) -> Self {
        Self::Kafka {
            source: source.into(),
            message: message.into(),
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

impl From<KafkaError> for AppError {
    fn from(err: KafkaError) -> Self {
        Self::kafka(err, "client operation")
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
