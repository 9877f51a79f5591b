//! The three things the CLI can do, one per process invocation

pub mod consume;
pub mod create_topic;
pub mod produce;

pub use consume::{ConsumerLoopSummary, ConsumerState, format_record, run_consume, run_consumer_loop};
pub use create_topic::run_create_topic;
pub use produce::{BatchReport, produce_batch, run_produce};

use crate::config::AppConfig;
use crate::error::AppResult;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Subscribe to the topic and print records until interrupted
    Consume,
    /// Publish a batch of random transactions
    Produce,
    /// Create the topic
    #[value(name = "create_topic")]
    CreateTopic,
}

/// Run one action to completion
pub async fn run(action: Action, config: &AppConfig) -> AppResult<()> {
    match action {
        Action::Consume => {
            run_consume(config).await?;
        }
        Action::Produce => {
            run_produce(config)?;
        }
        Action::CreateTopic => {
            run_create_topic(config).await?;
        }
    }
    Ok(())
}
