use crate::actions::Action;
use crate::config::{
    AppConfig, DEFAULT_BATCH_SIZE, DEFAULT_CONSUMER_GROUP, DEFAULT_CONSUMER_ID, DEFAULT_TOPIC,
};
use crate::kafka::TopicSpec;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "transaction-stream")]
#[command(about = "Create a topic, produce random transactions to it, or consume and print them")]
#[command(version)]
pub struct Cli {
    /// Which action to run
    #[arg(long, value_enum)]
    pub action: Action,

    /// Static group member identity of this consumer
    #[arg(long = "consumer_id", default_value = DEFAULT_CONSUMER_ID)]
    pub consumer_id: String,

    /// Consumer group to join
    #[arg(long = "consumer_group", default_value = DEFAULT_CONSUMER_GROUP)]
    pub consumer_group: String,

    /// Topic to create, produce to, or consume from
    #[arg(long, default_value = DEFAULT_TOPIC)]
    pub topic: String,

    /// Records per produce invocation
    #[arg(long = "num_records", default_value_t = DEFAULT_BATCH_SIZE)]
    pub num_records: usize,

    /// Partition count used by create_topic
    #[arg(long, default_value_t = 1)]
    pub partitions: i32,

    /// Replication factor used by create_topic
    #[arg(long = "replication_factor", default_value_t = 3)]
    pub replication_factor: i32,

    /// Consumer poll timeout in milliseconds
    #[arg(long = "poll_timeout_ms", default_value_t = 1000)]
    pub poll_timeout_ms: u64,
}

impl Cli {
    /// Combine the parsed arguments with the broker list into one config
    pub fn into_config(self, brokers: impl Into<String>) -> AppConfig {
        AppConfig {
            brokers: brokers.into(),
            topic: TopicSpec::new(self.topic, self.partitions, self.replication_factor),
            batch_size: self.num_records,
            consumer_group: self.consumer_group,
            consumer_id: self.consumer_id,
            poll_timeout: Duration::from_millis(self.poll_timeout_ms),
        }
    }
}
