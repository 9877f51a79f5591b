// Common imports and re-exports for tests

pub use transaction_stream::actions::{
    BatchReport, ConsumerLoopSummary, ConsumerState, format_record, produce_batch,
    run_consumer_loop,
};
pub use transaction_stream::config::AppConfig;
pub use transaction_stream::kafka::{
    ConsumerError, DeliveryStats, JsonSerializer, KafkaClientError, Message, ProducerError,
    RecordPublisher, RecordSource, SerializationError, Serializer,
};
pub use transaction_stream::records::{TransactionGenerator, TransactionKey, TransactionValue};

pub use serial_test::serial;
pub use std::time::Duration;
pub use uuid::Uuid;

pub use crate::unit::test_utils::*;
