//! rdkafka client contexts that route librdkafka callbacks into the `log` facade
//!
//! The producer context doubles as the delivery-report sink: every send ends
//! in exactly one `delivery` callback, which is counted in [`DeliveryStats`].

use crate::kafka::utils::convert_kafka_log_level;
use log::{debug, error, warn};
use rdkafka::config::RDKafkaLogLevel;
use rdkafka::consumer::ConsumerContext;
use rdkafka::error::{KafkaError, KafkaResult};
use rdkafka::message::DeliveryResult;
use rdkafka::producer::ProducerContext;
use rdkafka::topic_partition_list::TopicPartitionList;
use rdkafka::{ClientContext, Message};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Snapshot of terminal delivery outcomes seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryStats {
    pub delivered: usize,
    pub failed: usize,
}

impl DeliveryStats {
    /// Number of sends that reached a terminal state
    pub fn completed(&self) -> usize {
        self.delivered + self.failed
    }
}

#[derive(Debug, Default)]
pub struct LoggingProducerContext {
    delivered: AtomicUsize,
    failed: AtomicUsize,
}

impl LoggingProducerContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> DeliveryStats {
        DeliveryStats {
            delivered: self.delivered.load(Ordering::Acquire),
            failed: self.failed.load(Ordering::Acquire),
        }
    }
}

impl ClientContext for LoggingProducerContext {
    fn log(&self, level: RDKafkaLogLevel, fac: &str, message: &str) {
        log::log!(
            convert_kafka_log_level(level),
            "Kafka log ({}): {}",
            fac,
            message
        );
    }

    fn error(&self, error: KafkaError, reason: &str) {
        error!("Kafka client error: {:?}, reason: {}", error, reason);
    }
}

impl ProducerContext for LoggingProducerContext {
    type DeliveryOpaque = ();

    fn delivery(&self, delivery_result: &DeliveryResult<'_>, _delivery_opaque: Self::DeliveryOpaque) {
        match delivery_result {
            Ok(message) => {
                self.delivered.fetch_add(1, Ordering::AcqRel);
                debug!(
                    "Delivered record to {} [{}] at offset {}",
                    message.topic(),
                    message.partition(),
                    message.offset()
                );
            }
            Err((err, message)) => {
                self.failed.fetch_add(1, Ordering::AcqRel);
                error!(
                    "Failed to deliver record to {} [{}]: {}",
                    message.topic(),
                    message.partition(),
                    err
                );
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct LoggingConsumerContext;

impl ClientContext for LoggingConsumerContext {
    fn log(&self, level: RDKafkaLogLevel, fac: &str, message: &str) {
        log::log!(
            convert_kafka_log_level(level),
            "Kafka log ({}): {}",
            fac,
            message
        );
    }

    fn error(&self, error: KafkaError, reason: &str) {
        error!("Kafka client error: {:?}, reason: {}", error, reason);
    }
}

impl ConsumerContext for LoggingConsumerContext {
    fn commit_callback(&self, result: KafkaResult<()>, offsets: &TopicPartitionList) {
        match result {
            Ok(()) => debug!("Committed offsets for {} partition(s)", offsets.count()),
            Err(e) => warn!("Offset commit failed: {}", e),
        }
    }
}
