use super::common::*;

#[test]
fn test_batch_publishes_every_record_and_flushes_once() {
    init_logger();
    let publisher = RecordingPublisher::<TransactionKey, TransactionValue>::new();
    let mut generator = TransactionGenerator::new(Some(7));

    let report = produce_batch(&publisher, &mut generator, 10, Duration::from_secs(1))
        .expect("batch should succeed");

    assert_eq!(publisher.published_count(), 10);
    assert_eq!(publisher.flush_count(), 1);
    assert_eq!(report.issued, 10);
    assert_eq!(report.enqueued, 10);
    assert_eq!(report.enqueue_failures, 0);
    assert_eq!(report.deliveries.delivered, 10);
    assert_eq!(report.unconfirmed(), 0);
}

#[test]
fn test_published_values_repeat_their_keys() {
    let publisher = RecordingPublisher::<TransactionKey, TransactionValue>::new();
    let mut generator = TransactionGenerator::new(Some(11));

    produce_batch(&publisher, &mut generator, 25, Duration::from_secs(1)).unwrap();

    for (key, value) in publisher.published.lock().unwrap().iter() {
        assert_eq!(&value.key(), key);
        assert!((1..=1000).contains(&value.transaction_dollars));
        assert!((0..=99).contains(&value.transaction_cents));
    }
}

#[test]
fn test_enqueue_failures_do_not_stop_the_batch() {
    let publisher =
        RecordingPublisher::<TransactionKey, TransactionValue>::new().rejecting(&[0, 4]);
    let mut generator = TransactionGenerator::new(Some(3));

    let report = produce_batch(&publisher, &mut generator, 6, Duration::from_secs(1))
        .expect("enqueue failures are not fatal");

    assert_eq!(report.issued, 6);
    assert_eq!(report.enqueued, 4);
    assert_eq!(report.enqueue_failures, 2);
    assert_eq!(publisher.published_count(), 4);
    assert_eq!(publisher.flush_count(), 1);
}

#[test]
fn test_empty_batch_still_flushes() {
    let publisher = RecordingPublisher::<TransactionKey, TransactionValue>::new();
    let mut generator = TransactionGenerator::new(Some(1));

    let report = produce_batch(&publisher, &mut generator, 0, Duration::from_secs(1)).unwrap();

    assert_eq!(report, BatchReport::default());
    assert_eq!(publisher.flush_count(), 1);
}

#[test]
fn test_flush_failure_is_returned() {
    let publisher = RecordingPublisher::<TransactionKey, TransactionValue>::new().failing_flush();
    let mut generator = TransactionGenerator::new(Some(5));

    let result = produce_batch(&publisher, &mut generator, 3, Duration::from_millis(10));

    assert!(matches!(result, Err(KafkaClientError::KafkaError(_))));
    assert_eq!(publisher.published_count(), 3);
}

#[test]
fn test_unconfirmed_counts_missing_reports() {
    let report = BatchReport {
        issued: 10,
        enqueued: 10,
        enqueue_failures: 0,
        deliveries: DeliveryStats {
            delivered: 7,
            failed: 1,
        },
    };
    assert_eq!(report.unconfirmed(), 2);
}
