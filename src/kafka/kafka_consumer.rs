use crate::kafka::client_context::LoggingConsumerContext;
use crate::kafka::consumer_config::ConsumerConfig;
use crate::kafka::kafka_error::{ConsumerError, KafkaClientError};
use crate::kafka::message::Message;
use crate::kafka::serialization::Serializer;
use async_trait::async_trait;
use log::{debug, info, warn};
use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::message::Message as KafkaMessage;
use std::marker::PhantomData;
use std::time::Duration;

/// A source of decoded records that can be polled with a bound and closed once
#[async_trait]
pub trait RecordSource<K, V>: Send + Sync
where
    K: Send,
    V: Send,
{
    /// Wait up to `timeout` for the next record; `Ok(None)` means the wait elapsed.
    async fn poll(&self, timeout: Duration) -> Result<Option<Message<K, V>>, ConsumerError>;

    /// Commit pending offsets and release group membership.
    fn close(&self) -> Result<(), ConsumerError>;
}

/// Decode a raw Kafka message into a typed `Message`
///
/// The key is optional on the wire; the payload is required.
pub fn decode_message<K, V, KS, VS, M>(
    raw: &M,
    key_serializer: &KS,
    value_serializer: &VS,
) -> Result<Message<K, V>, ConsumerError>
where
    KS: Serializer<K>,
    VS: Serializer<V>,
    M: KafkaMessage,
{
    let payload = raw.payload().ok_or(KafkaClientError::NoPayload {
        partition: raw.partition(),
        offset: raw.offset(),
    })?;
    let value = value_serializer.deserialize(payload)?;

    let key = match raw.key() {
        Some(key_bytes) => Some(key_serializer.deserialize(key_bytes)?),
        None => None,
    };

    Ok(Message::new(key, value, raw.partition(), raw.offset())
        .with_timestamp(raw.timestamp().to_millis()))
}

/// A Kafka consumer that deserializes keys and values as they arrive
pub struct KafkaConsumer<K, V, KS, VS>
where
    KS: Serializer<K>,
    VS: Serializer<V>,
{
    consumer: StreamConsumer<LoggingConsumerContext>,
    key_serializer: KS,
    value_serializer: VS,
    _phantom: PhantomData<fn() -> (K, V)>,
}

impl<K, V, KS, VS> KafkaConsumer<K, V, KS, VS>
where
    KS: Serializer<K>,
    VS: Serializer<V>,
{
    /// Creates a consumer from a `ConsumerConfig`
    pub fn new(
        config: &ConsumerConfig,
        key_serializer: KS,
        value_serializer: VS,
    ) -> Result<Self, KafkaError> {
        let consumer: StreamConsumer<LoggingConsumerContext> = config
            .to_client_config()
            .create_with_context(LoggingConsumerContext)?;

        info!(
            "Created KafkaConsumer connected to {} in group {} (instance {})",
            config.brokers(),
            config.group_id,
            config.group_instance_id.as_deref().unwrap_or("<dynamic>")
        );

        Ok(KafkaConsumer {
            consumer,
            key_serializer,
            value_serializer,
            _phantom: PhantomData,
        })
    }

    /// Subscribe to topics
    pub fn subscribe(&self, topics: &[&str]) -> Result<(), KafkaError> {
        self.consumer.subscribe(topics)?;
        info!("Subscribed to {:?}", topics);
        Ok(())
    }

    /// Commit the current consumer state synchronously
    pub fn commit(&self) -> Result<(), KafkaError> {
        self.consumer.commit_consumer_state(CommitMode::Sync)
    }
}

#[async_trait]
impl<K, V, KS, VS> RecordSource<K, V> for KafkaConsumer<K, V, KS, VS>
where
    K: Send,
    V: Send,
    KS: Serializer<K> + Send + Sync,
    VS: Serializer<V> + Send + Sync,
{
    async fn poll(&self, timeout: Duration) -> Result<Option<Message<K, V>>, ConsumerError> {
        match tokio::time::timeout(timeout, self.consumer.recv()).await {
            Err(_elapsed) => Ok(None),
            Ok(Err(e)) => Err(KafkaClientError::KafkaError(e)),
            Ok(Ok(raw)) => {
                decode_message(&raw, &self.key_serializer, &self.value_serializer).map(Some)
            }
        }
    }

    fn close(&self) -> Result<(), ConsumerError> {
        match self.commit() {
            Ok(()) => info!("Committed consumer offsets"),
            Err(KafkaError::ConsumerCommit(RDKafkaErrorCode::NoOffset)) => {
                debug!("No new offsets to commit on close")
            }
            Err(e) => warn!("Final offset commit failed: {}", e),
        }
        self.consumer.unsubscribe();
        info!("Unsubscribed consumer");
        Ok(())
    }
}
