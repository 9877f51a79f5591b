use async_trait::async_trait;
use rdkafka::message::{OwnedMessage, Timestamp};
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::net::TcpStream;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use transaction_stream::kafka::{
    ConsumerError, DeliveryStats, JsonSerializer, KafkaClientError, Message, ProducerError,
    RecordPublisher, RecordSource, SerializationError, Serializer, decode_message,
};
use uuid::Uuid;

pub(crate) const TEST_BROKERS: &str = "localhost:9092";

pub(crate) fn is_kafka_running() -> bool {
    match TcpStream::connect(TEST_BROKERS) {
        Ok(_) => true,
        Err(_) => {
            println!("WARNING: Kafka is not running at {}", TEST_BROKERS);
            println!("Tests requiring Kafka will be skipped.");
            false
        }
    }
}

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn init() -> bool {
    init_logger();
    is_kafka_running()
}

pub(crate) fn generate_topic(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

pub(crate) fn generate_group_id(prefix: &str) -> String {
    format!("{}-group-{}", prefix, Uuid::new_v4())
}

/// Publisher that records every call and can reject chosen sends
pub(crate) struct RecordingPublisher<K, V> {
    pub published: Mutex<Vec<(K, V)>>,
    pub flushes: AtomicUsize,
    /// Zero-based publish call indexes that fail to enqueue
    pub reject: Vec<usize>,
    pub fail_flush: bool,
    calls: AtomicUsize,
}

impl<K, V> RecordingPublisher<K, V> {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            flushes: AtomicUsize::new(0),
            reject: Vec::new(),
            fail_flush: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(mut self, calls: &[usize]) -> Self {
        self.reject = calls.to_vec();
        self
    }

    pub fn failing_flush(mut self) -> Self {
        self.fail_flush = true;
        self
    }

    pub fn published_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl<K: Clone, V: Clone> RecordPublisher<K, V> for RecordingPublisher<K, V> {
    fn publish(&self, key: &K, value: &V) -> Result<(), ProducerError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reject.contains(&call) {
            return Err(KafkaClientError::SerializationError(
                SerializationError::SerializationFailed("queue full".to_string()),
            ));
        }
        self.published
            .lock()
            .unwrap()
            .push((key.clone(), value.clone()));
        Ok(())
    }

    fn flush(&self, _timeout: Duration) -> Result<DeliveryStats, ProducerError> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        if self.fail_flush {
            return Err(KafkaClientError::KafkaError(
                rdkafka::error::KafkaError::Flush(rdkafka::types::RDKafkaErrorCode::MessageTimedOut),
            ));
        }
        Ok(DeliveryStats {
            delivered: self.published_count(),
            failed: 0,
        })
    }
}

/// Source that replays scripted poll results, then idles
pub(crate) struct ScriptedSource<K, V> {
    script: Mutex<VecDeque<Result<Option<Message<K, V>>, ConsumerError>>>,
    pub closes: AtomicUsize,
}

impl<K, V> ScriptedSource<K, V> {
    pub fn new(script: Vec<Result<Option<Message<K, V>>, ConsumerError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            closes: AtomicUsize::new(0),
        }
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<K: Send, V: Send> RecordSource<K, V> for ScriptedSource<K, V> {
    async fn poll(&self, timeout: Duration) -> Result<Option<Message<K, V>>, ConsumerError> {
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(result) => result,
            None => {
                tokio::time::sleep(timeout).await;
                Ok(None)
            }
        }
    }

    fn close(&self) -> Result<(), ConsumerError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Build a raw broker message on partition 0
pub(crate) fn raw_message(offset: i64, key: Option<&[u8]>, payload: Option<&[u8]>) -> OwnedMessage {
    OwnedMessage::new(
        payload.map(|p| p.to_vec()),
        key.map(|k| k.to_vec()),
        "transactions".to_string(),
        Timestamp::CreateTime(1_700_000_000_000),
        0,
        offset,
        None,
    )
}

/// Source that decodes queued raw messages with `JsonSerializer`, then idles
pub(crate) struct RawMessageSource<K, V> {
    queue: Mutex<VecDeque<OwnedMessage>>,
    pub closes: AtomicUsize,
    _phantom: PhantomData<fn() -> (K, V)>,
}

impl<K, V> RawMessageSource<K, V> {
    pub fn new(messages: Vec<OwnedMessage>) -> Self {
        Self {
            queue: Mutex::new(messages.into()),
            closes: AtomicUsize::new(0),
            _phantom: PhantomData,
        }
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<K: Send, V: Send> RecordSource<K, V> for RawMessageSource<K, V>
where
    JsonSerializer: Serializer<K> + Serializer<V>,
{
    async fn poll(&self, timeout: Duration) -> Result<Option<Message<K, V>>, ConsumerError> {
        let next = self.queue.lock().unwrap().pop_front();
        match next {
            Some(raw) => decode_message(&raw, &JsonSerializer, &JsonSerializer).map(Some),
            None => {
                tokio::time::sleep(timeout).await;
                Ok(None)
            }
        }
    }

    fn close(&self) -> Result<(), ConsumerError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
