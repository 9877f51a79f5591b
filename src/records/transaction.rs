//! Key and value records describing a single card transaction
//!
//! Both records travel as independent JSON objects whose field names match
//! the struct fields exactly. Decoding is strict: a missing, mistyped or
//! unknown field is an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message key of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionKey {
    pub account_id: String,
    /// Kept as a string so leading zeros survive
    pub transaction_zip_code: String,
    pub receiving_entity: String,
}

impl TransactionKey {
    /// Avro-style description of the key. Documentation only, never enforced.
    pub const SCHEMA: &'static str = r#"{
    "type": "record",
    "namespace": "kafka-example.transaction",
    "name": "TransactionKey",
    "fields": [
        {"name": "account_id", "type": "string"},
        {"name": "transaction_zip_code", "type": "string"},
        {"name": "receiving_entity", "type": "string"}
    ]
}"#;

    pub fn new(
        account_id: impl Into<String>,
        transaction_zip_code: impl Into<String>,
        receiving_entity: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            transaction_zip_code: transaction_zip_code.into(),
            receiving_entity: receiving_entity.into(),
        }
    }
}

impl fmt::Display for TransactionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} ({})",
            self.account_id, self.receiving_entity, self.transaction_zip_code
        )
    }
}

/// Message value of a transaction: the key fields plus amount and time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionValue {
    pub account_id: String,
    pub transaction_zip_code: String,
    pub receiving_entity: String,
    pub transaction_dollars: i64,
    /// Intended range 0-99, not enforced
    pub transaction_cents: i64,
    /// Must be finite; NaN and infinities fail to serialize
    #[serde(serialize_with = "serialize_finite")]
    pub transaction_epoch_seconds: f64,
}

fn serialize_finite<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(serde::ser::Error::custom(format!(
            "transaction_epoch_seconds must be finite, got {}",
            value
        )))
    }
}

impl TransactionValue {
    /// Avro-style description of the value. Documentation only, never enforced.
    pub const SCHEMA: &'static str = r#"{
    "type": "record",
    "namespace": "kafka-example.transaction",
    "name": "TransactionValue",
    "fields": [
        {"name": "account_id", "type": "string"},
        {"name": "transaction_zip_code", "type": "string"},
        {"name": "receiving_entity", "type": "string"},
        {"name": "transaction_dollars", "type": "int"},
        {"name": "transaction_cents", "type": "int"},
        {"name": "transaction_epoch_seconds", "type": "float"}
    ]
}"#;

    /// Build a value that repeats the fields of `key`
    pub fn from_key(
        key: &TransactionKey,
        transaction_dollars: i64,
        transaction_cents: i64,
        transaction_epoch_seconds: f64,
    ) -> Self {
        Self {
            account_id: key.account_id.clone(),
            transaction_zip_code: key.transaction_zip_code.clone(),
            receiving_entity: key.receiving_entity.clone(),
            transaction_dollars,
            transaction_cents,
            transaction_epoch_seconds,
        }
    }

    /// Project the key fields back out of the value
    pub fn key(&self) -> TransactionKey {
        TransactionKey {
            account_id: self.account_id.clone(),
            transaction_zip_code: self.transaction_zip_code.clone(),
            receiving_entity: self.receiving_entity.clone(),
        }
    }
}

impl fmt::Display for TransactionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} paid ${}.{:02} to {} ({}) at {:.3}",
            self.account_id,
            self.transaction_dollars,
            self.transaction_cents,
            self.receiving_entity,
            self.transaction_zip_code,
            self.transaction_epoch_seconds
        )
    }
}
