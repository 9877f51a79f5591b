use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::kafka::{JsonSerializer, KafkaConsumer, Message, RecordSource};
use crate::records::{TransactionKey, TransactionValue};
use crate::shutdown::install_shutdown_signal;
use log::{debug, error, info};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Lifecycle of the consumer loop
///
/// `Subscribing -> Polling <-> (Idle | Delivering) -> ShuttingDown -> Closed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerState {
    Subscribing,
    Polling,
    Idle,
    Delivering,
    ShuttingDown,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumerLoopSummary {
    pub polls: u64,
    pub delivered: u64,
    pub idle_polls: u64,
    pub errors: u64,
    pub final_state: ConsumerState,
}

impl Default for ConsumerLoopSummary {
    fn default() -> Self {
        Self {
            polls: 0,
            delivered: 0,
            idle_polls: 0,
            errors: 0,
            final_state: ConsumerState::Subscribing,
        }
    }
}

impl ConsumerLoopSummary {
    fn transition(&mut self, next: ConsumerState) {
        debug!("Consumer state {:?} -> {:?}", self.final_state, next);
        self.final_state = next;
    }
}

/// Poll `source` until `shutdown` resolves, handing each record to `on_record`
///
/// A poll that times out just loops. A record that fails to decode or
/// arrives with an error is logged and skipped. When `shutdown` resolves the
/// source is closed exactly once before returning.
pub async fn run_consumer_loop<K, V, S, F, H>(
    source: &S,
    poll_timeout: Duration,
    shutdown: F,
    mut on_record: H,
) -> ConsumerLoopSummary
where
    K: Send,
    V: Send,
    S: RecordSource<K, V> + ?Sized,
    F: Future,
    H: FnMut(Message<K, V>),
{
    let mut summary = ConsumerLoopSummary::default();
    tokio::pin!(shutdown);

    summary.transition(ConsumerState::Polling);
    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => break,

            result = source.poll(poll_timeout) => {
                summary.polls += 1;
                match result {
                    Ok(Some(message)) => {
                        summary.transition(ConsumerState::Delivering);
                        summary.delivered += 1;
                        on_record(message);
                        summary.transition(ConsumerState::Polling);
                    }
                    Ok(None) => {
                        summary.transition(ConsumerState::Idle);
                        summary.idle_polls += 1;
                        summary.transition(ConsumerState::Polling);
                    }
                    Err(e) => {
                        summary.errors += 1;
                        error!("Consumer error: {}", e);
                    }
                }
            }
        }
    }

    summary.transition(ConsumerState::ShuttingDown);
    info!("Shutting down consumer");
    if let Err(e) = source.close() {
        error!("Error while closing consumer: {}", e);
    }
    summary.transition(ConsumerState::Closed);

    info!(
        "Consumer closed after {} poll(s): {} delivered, {} idle, {} error(s)",
        summary.polls, summary.delivered, summary.idle_polls, summary.errors
    );
    summary
}

/// Render a consumed record the way the CLI prints it
pub fn format_record<K: Display, V: Display>(message: &Message<K, V>) -> String {
    let key = message
        .key()
        .map(ToString::to_string)
        .unwrap_or_else(|| "<none>".to_string());
    format!(
        "Consumed record with key {} and value {}",
        key,
        message.value()
    )
}

pub async fn run_consume(config: &AppConfig) -> AppResult<ConsumerLoopSummary> {
    let shutdown = install_shutdown_signal()?;

    let consumer = KafkaConsumer::<TransactionKey, TransactionValue, _, _>::new(
        &config.consumer_config(),
        JsonSerializer,
        JsonSerializer,
    )
    .map_err(|e| AppError::kafka(e, "creating consumer"))?;

    consumer
        .subscribe(&[config.topic.name.as_str()])
        .map_err(|e| AppError::kafka(e, "subscribing"))?;

    let summary = run_consumer_loop(&consumer, config.poll_timeout, shutdown, |message| {
        println!("{}", format_record(&message))
    })
    .await;
    Ok(summary)
}
