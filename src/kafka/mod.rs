pub mod admin_client;
pub mod client_context;
pub mod common_config;
pub mod consumer_config;
pub mod kafka_consumer;
pub mod kafka_error;
pub mod kafka_producer;
pub mod message;
pub mod producer_config;
pub mod serialization;
pub mod utils;

pub use admin_client::{KafkaAdminClient, TopicOutcome, TopicSpec};
pub use client_context::{DeliveryStats, LoggingConsumerContext, LoggingProducerContext};
pub use common_config::CommonKafkaConfig;
pub use consumer_config::{AssignmentStrategy, ConsumerConfig, OffsetReset};
pub use kafka_consumer::{KafkaConsumer, RecordSource, decode_message};
pub use kafka_error::{ConsumerError, KafkaClientError, ProducerError};
pub use kafka_producer::{KafkaProducer, RecordPublisher};
pub use message::Message;
pub use producer_config::{AckMode, ProducerConfig};
pub use serialization::{JsonSerializer, SerializationError, Serializer};
pub use utils::convert_kafka_log_level;
