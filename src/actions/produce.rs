use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::kafka::{
    DeliveryStats, JsonSerializer, KafkaProducer, ProducerError, RecordPublisher,
};
use crate::records::{TransactionGenerator, TransactionKey, TransactionValue};
use log::{debug, error, info, warn};
use std::time::Duration;

/// What happened to one produced batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Publish calls made
    pub issued: usize,
    /// Records accepted into the producer queue
    pub enqueued: usize,
    /// Records rejected before reaching the queue
    pub enqueue_failures: usize,
    /// Terminal delivery outcomes after the flush
    pub deliveries: DeliveryStats,
}

impl BatchReport {
    /// Enqueued records that still had no delivery report after the flush
    pub fn unconfirmed(&self) -> usize {
        self.enqueued.saturating_sub(self.deliveries.completed())
    }
}

/// Publish `count` generated transactions, then block on a single flush
///
/// Enqueue failures are logged and counted without stopping the batch.
/// Only a failed flush is returned as an error.
pub fn produce_batch<P>(
    publisher: &P,
    generator: &mut TransactionGenerator,
    count: usize,
    flush_timeout: Duration,
) -> Result<BatchReport, ProducerError>
where
    P: RecordPublisher<TransactionKey, TransactionValue>,
{
    let mut report = BatchReport::default();

    for (key, value) in generator.by_ref().take(count) {
        report.issued += 1;
        match publisher.publish(&key, &value) {
            Ok(()) => {
                report.enqueued += 1;
                debug!("Enqueued transaction {}", value);
            }
            Err(e) => {
                report.enqueue_failures += 1;
                error!("Failed to enqueue transaction for {}: {}", key, e);
            }
        }
    }

    report.deliveries = publisher.flush(flush_timeout)?;

    info!(
        "Produced batch: {} issued, {} delivered, {} failed, {} rejected before send",
        report.issued,
        report.deliveries.delivered,
        report.deliveries.failed,
        report.enqueue_failures
    );
    if report.unconfirmed() > 0 {
        warn!(
            "{} record(s) had no delivery report after flush",
            report.unconfirmed()
        );
    }
    Ok(report)
}

pub fn run_produce(config: &AppConfig) -> AppResult<BatchReport> {
    let producer_config = config.producer_config();
    let producer = KafkaProducer::<TransactionKey, TransactionValue, _, _>::new(
        &producer_config,
        JsonSerializer,
        JsonSerializer,
    )
    .map_err(|e| AppError::kafka(e, "creating producer"))?;

    let mut generator = TransactionGenerator::new(None);
    produce_batch(
        &producer,
        &mut generator,
        config.batch_size,
        producer_config.flush_timeout,
    )
    .map_err(|e| AppError::kafka(e, "flushing produced batch"))
}
