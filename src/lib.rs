//! # transaction-stream
//!
//! A small harness that produces and consumes JSON-encoded card transactions
//! against a Kafka topic, built on `rdkafka` and `tokio`.
//!
//! The binary runs exactly one action per invocation:
//!
//! - `create_topic`: create the topic (already existing is fine)
//! - `produce`: publish a batch of random [`TransactionKey`]/[`TransactionValue`]
//!   pairs and flush
//! - `consume`: join a consumer group and print records until interrupted
//!
//! ```rust,no_run
//! use transaction_stream::kafka::{JsonSerializer, KafkaProducer, ProducerConfig, RecordPublisher};
//! use transaction_stream::records::{TransactionGenerator, TransactionKey, TransactionValue};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProducerConfig::new("localhost:9092", "transactions");
//! let producer = KafkaProducer::<TransactionKey, TransactionValue, _, _>::new(
//!     &config,
//!     JsonSerializer,
//!     JsonSerializer,
//! )?;
//!
//! let (key, value) = TransactionGenerator::new(None).generate();
//! producer.publish(&key, &value)?;
//! let stats = producer.flush(Duration::from_secs(10))?;
//! println!("delivered {} record(s)", stats.delivered);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod kafka;
pub mod records;
pub mod shutdown;

pub use error::{AppError, AppResult};
pub use records::{TransactionKey, TransactionValue};
