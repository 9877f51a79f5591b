use crate::kafka::serialization::SerializationError;
use rdkafka::error::KafkaError;

/// Unified error type for Kafka producer, consumer and admin operations
#[derive(Debug)]
pub enum KafkaClientError {
    /// Underlying Kafka library error
    KafkaError(KafkaError),
    /// Serialization/deserialization error
    SerializationError(SerializationError),
    /// A consumed message carried no payload
    NoPayload { partition: i32, offset: i64 },
}

impl std::fmt::Display for KafkaClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KafkaClientError::KafkaError(e) => write!(f, "Kafka error: {}", e),
            KafkaClientError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            KafkaClientError::NoPayload { partition, offset } => write!(
                f,
                "Message at partition {} offset {} has no payload",
                partition, offset
            ),
        }
    }
}

impl std::error::Error for KafkaClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KafkaClientError::KafkaError(e) => Some(e),
            KafkaClientError::SerializationError(e) => Some(e),
            KafkaClientError::NoPayload { .. } => None,
        }
    }
}

impl From<KafkaError> for KafkaClientError {
    fn from(err: KafkaError) -> Self {
        KafkaClientError::KafkaError(err)
    }
}

impl From<SerializationError> for KafkaClientError {
    fn from(err: SerializationError) -> Self {
        KafkaClientError::SerializationError(err)
    }
}

/// Type alias for producer operations
pub type ProducerError = KafkaClientError;

/// Type alias for consumer operations
pub type ConsumerError = KafkaClientError;
