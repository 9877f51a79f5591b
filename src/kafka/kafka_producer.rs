use crate::kafka::client_context::{DeliveryStats, LoggingProducerContext};
use crate::kafka::kafka_error::ProducerError;
use crate::kafka::producer_config::ProducerConfig;
use crate::kafka::serialization::Serializer;
use log::{debug, error, info};
use rdkafka::error::KafkaError;
use rdkafka::producer::{BaseProducer, BaseRecord, Producer};
use std::marker::PhantomData;
use std::time::Duration;

/// Asynchronous, callback-reported publishing of typed key/value records
///
/// `publish` only enqueues; the broker outcome of every call arrives later
/// through the delivery report. `flush` is the barrier that waits for all
/// outstanding sends to reach a terminal state.
pub trait RecordPublisher<K, V> {
    fn publish(&self, key: &K, value: &V) -> Result<(), ProducerError>;

    fn flush(&self, timeout: Duration) -> Result<DeliveryStats, ProducerError>;
}

/// A typed wrapper around rdkafka's `BaseProducer` bound to one topic
///
/// Delivery callbacks are served by polling inline after each send and
/// during `flush`, so no background poll thread is needed.
pub struct KafkaProducer<K, V, KS, VS>
where
    KS: Serializer<K>,
    VS: Serializer<V>,
{
    producer: BaseProducer<LoggingProducerContext>,
    topic: String,
    key_serializer: KS,
    value_serializer: VS,
    _phantom_key: PhantomData<K>,
    _phantom_value: PhantomData<V>,
}

impl<K, V, KS, VS> KafkaProducer<K, V, KS, VS>
where
    KS: Serializer<K>,
    VS: Serializer<V>,
{
    /// Creates a producer from a `ProducerConfig`
    pub fn new(
        config: &ProducerConfig,
        key_serializer: KS,
        value_serializer: VS,
    ) -> Result<Self, KafkaError> {
        let producer: BaseProducer<LoggingProducerContext> = config
            .to_client_config()
            .create_with_context(LoggingProducerContext::new())?;

        info!(
            "Created KafkaProducer connected to {} for topic {}",
            config.brokers(),
            config.topic
        );

        Ok(KafkaProducer {
            producer,
            topic: config.topic.clone(),
            key_serializer,
            value_serializer,
            _phantom_key: PhantomData,
            _phantom_value: PhantomData,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Messages queued in librdkafka that have no delivery report yet
    pub fn in_flight_count(&self) -> i32 {
        self.producer.in_flight_count()
    }

    /// Delivery outcomes reported so far
    pub fn delivery_stats(&self) -> DeliveryStats {
        self.producer.context().stats()
    }
}

impl<K, V, KS, VS> RecordPublisher<K, V> for KafkaProducer<K, V, KS, VS>
where
    KS: Serializer<K>,
    VS: Serializer<V>,
{
    fn publish(&self, key: &K, value: &V) -> Result<(), ProducerError> {
        let key_bytes = self.key_serializer.serialize(key)?;
        let payload = self.value_serializer.serialize(value)?;

        let record: BaseRecord<'_, [u8], [u8]> = BaseRecord::to(&self.topic)
            .key(key_bytes.as_slice())
            .payload(payload.as_slice());

        self.producer.send(record).map_err(|(err, _)| err)?;
        // Serve any delivery callbacks that are already due
        self.producer.poll(Duration::ZERO);

        debug!("Enqueued record for topic '{}'", self.topic);
        Ok(())
    }

    fn flush(&self, timeout: Duration) -> Result<DeliveryStats, ProducerError> {
        debug!(
            "Flushing {} in-flight record(s) to topic '{}'",
            self.in_flight_count(),
            self.topic()
        );
        if let Err(e) = self.producer.flush(timeout) {
            error!(
                "Flush of topic '{}' gave up with {} record(s) still in flight",
                self.topic(),
                self.in_flight_count()
            );
            return Err(e.into());
        }
        Ok(self.delivery_stats())
    }
}
