use super::*;
use std::sync::Mutex;
use tokio::sync::oneshot;
use transaction_stream::actions::{run_create_topic, run_produce};
use transaction_stream::kafka::{
    KafkaAdminClient, KafkaConsumer, KafkaProducer, TopicOutcome, TopicSpec,
};

fn local_config(prefix: &str) -> AppConfig {
    let mut config = AppConfig::new(TEST_BROKERS);
    config.topic = TopicSpec::new(generate_topic(prefix), 2, 1);
    config.consumer_group = generate_group_id(prefix);
    config.consumer_id = format!("{}-consumer-{}", prefix, Uuid::new_v4());
    config.poll_timeout = Duration::from_millis(500);
    config
}

#[tokio::test]
#[serial]
async fn test_create_topic_twice() {
    if !init() {
        return;
    }
    let config = local_config("create-twice");

    let first = run_create_topic(&config).await.expect("admin request failed");
    assert_eq!(first, vec![TopicOutcome::Created(config.topic.name.clone())]);

    let second = run_create_topic(&config).await.expect("admin request failed");
    assert_eq!(
        second,
        vec![TopicOutcome::AlreadyExists(config.topic.name.clone())]
    );
    assert!(!second[0].is_failure());

    let admin = KafkaAdminClient::new(&config.admin_config()).unwrap();
    assert!(admin.topic_exists(&config.topic.name).unwrap());
    assert_eq!(admin.partition_count(&config.topic.name).unwrap(), Some(2));
}

/// Forwards to a real producer and remembers every record it enqueued
struct RecordingKafkaPublisher {
    inner: KafkaProducer<TransactionKey, TransactionValue, JsonSerializer, JsonSerializer>,
    sent: Mutex<Vec<(TransactionKey, TransactionValue)>>,
}

impl RecordPublisher<TransactionKey, TransactionValue> for RecordingKafkaPublisher {
    fn publish(&self, key: &TransactionKey, value: &TransactionValue) -> Result<(), ProducerError> {
        self.inner.publish(key, value)?;
        self.sent.lock().unwrap().push((key.clone(), value.clone()));
        Ok(())
    }

    fn flush(&self, timeout: Duration) -> Result<DeliveryStats, ProducerError> {
        self.inner.flush(timeout)
    }
}

#[tokio::test]
#[serial]
async fn test_consumer_receives_exactly_the_produced_batch() {
    if !init() {
        return;
    }
    let config = local_config("produce-consume");
    run_create_topic(&config).await.expect("admin request failed");

    let consumer = KafkaConsumer::<TransactionKey, TransactionValue, _, _>::new(
        &config.consumer_config(),
        JsonSerializer,
        JsonSerializer,
    )
    .expect("Failed to create consumer");
    consumer
        .subscribe(&[config.topic.name.as_str()])
        .expect("Failed to subscribe");

    let expected = config.batch_size;
    let (tx, rx) = oneshot::channel::<()>();
    let mut tx = Some(tx);
    let mut received = Vec::new();
    let shutdown = async {
        tokio::select! {
            _ = rx => {}
            _ = tokio::time::sleep(Duration::from_secs(30)) => {}
        }
    };

    // The consumer loop is already polling when production starts
    let consume = run_consumer_loop(&consumer, config.poll_timeout, shutdown, |message| {
        received.push(message);
        if received.len() == expected {
            if let Some(tx) = tx.take() {
                let _ = tx.send(());
            }
        }
    });
    let producer_config = config.producer_config();
    let topic = config.topic.name.clone();
    let produce = async move {
        tokio::time::sleep(Duration::from_secs(1)).await;
        tokio::task::spawn_blocking(move || {
            let publisher = RecordingKafkaPublisher {
                inner: KafkaProducer::new(&producer_config, JsonSerializer, JsonSerializer)
                    .expect("Failed to create producer"),
                sent: Mutex::new(Vec::new()),
            };
            assert_eq!(publisher.inner.topic(), topic);
            let mut generator = TransactionGenerator::new(Some(2024));
            let report = produce_batch(
                &publisher,
                &mut generator,
                expected,
                producer_config.flush_timeout,
            )
            .expect("flush failed");
            (report, publisher.sent.into_inner().unwrap())
        })
        .await
        .expect("producer task panicked")
    };

    let (summary, (report, sent)) = tokio::join!(consume, produce);

    assert_eq!(report.issued, expected);
    assert_eq!(report.deliveries.delivered, expected);
    assert_eq!(report.deliveries.failed, 0);
    assert_eq!(sent.len(), expected);

    assert_eq!(summary.errors, 0);
    assert_eq!(summary.final_state, ConsumerState::Closed);
    assert_eq!(received.len(), expected);

    let mut unmatched = sent;
    for message in &received {
        let key = message.key().expect("every produced record has a key");
        let position = unmatched
            .iter()
            .position(|(k, v)| k == key && v == message.value())
            .unwrap_or_else(|| panic!("consumed a record that was never produced: {}", key));
        unmatched.swap_remove(position);
    }
    assert!(unmatched.is_empty());
}

#[tokio::test]
#[serial]
async fn test_produce_action_delivers_whole_batch() {
    if !init() {
        return;
    }
    let config = local_config("produce-action");
    run_create_topic(&config).await.expect("admin request failed");

    let report = run_produce(&config).expect("produce failed");
    assert_eq!(report.issued, config.batch_size);
    assert_eq!(report.deliveries.delivered, config.batch_size);
    assert_eq!(report.unconfirmed(), 0);
}
