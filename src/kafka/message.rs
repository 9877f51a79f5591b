/// A consumed message with deserialized key and value plus its log position
///
/// ```rust
/// # use transaction_stream::kafka::Message;
/// let message = Message::new(Some("key".to_string()), "value".to_string(), 0, 17);
/// assert_eq!(message.key(), Some(&"key".to_string()));
/// let (key, value) = message.into_parts();
/// assert_eq!(value, "value");
/// # let _ = key;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Message<K, V> {
    pub key: Option<K>,
    pub value: V,
    pub partition: i32,
    pub offset: i64,
    /// Broker or producer timestamp in milliseconds, when available
    pub timestamp: Option<i64>,
}

impl<K, V> Message<K, V> {
    pub fn new(key: Option<K>, value: V, partition: i32, offset: i64) -> Self {
        Self {
            key,
            value,
            partition,
            offset,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: Option<i64>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn partition(&self) -> i32 {
        self.partition
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Consumes the message and returns the owned key and value
    pub fn into_parts(self) -> (Option<K>, V) {
        (self.key, self.value)
    }
}
