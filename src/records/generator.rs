//! Synthetic transaction generation
//!
//! Every field is drawn uniformly from a small fixed reference set or range.
//! The timestamp is the wall clock at generation time.

use crate::records::transaction::{TransactionKey, TransactionValue};
use chrono::Utc;
use rand::prelude::*;
use std::ops::RangeInclusive;

pub const ACCOUNT_IDS: &[&str] = &["account_1", "account_2", "account_3"];

pub const ZIP_CODES: &[&str] = &["10001", "10002", "10003", "10004", "10005", "10006"];

pub const RECEIVING_ENTITIES: &[&str] = &[
    "market_basket",
    "starbucks",
    "walmart",
    "target",
    "whole_foods",
    "cvs",
    "walgreens",
    "rite_aid",
    "kroger",
];

pub const DOLLAR_RANGE: RangeInclusive<i64> = 1..=1000;

pub const CENT_RANGE: RangeInclusive<i64> = 0..=99;

/// Generates random transaction key/value pairs
pub struct TransactionGenerator {
    rng: StdRng,
}

impl TransactionGenerator {
    /// Create new generator with optional seed
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generate one transaction stamped with the current time
    pub fn generate(&mut self) -> (TransactionKey, TransactionValue) {
        self.generate_at(epoch_seconds_now())
    }

    /// Generate one transaction with an explicit timestamp
    pub fn generate_at(&mut self, epoch_seconds: f64) -> (TransactionKey, TransactionValue) {
        let key = TransactionKey::new(
            pick(&mut self.rng, ACCOUNT_IDS),
            pick(&mut self.rng, ZIP_CODES),
            pick(&mut self.rng, RECEIVING_ENTITIES),
        );
        let dollars = self.rng.gen_range(DOLLAR_RANGE);
        let cents = self.rng.gen_range(CENT_RANGE);
        let value = TransactionValue::from_key(&key, dollars, cents, epoch_seconds);
        (key, value)
    }
}

impl Default for TransactionGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Iterator for TransactionGenerator {
    type Item = (TransactionKey, TransactionValue);

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}

/// Current wall-clock time as fractional seconds since the Unix epoch
pub fn epoch_seconds_now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

fn pick(rng: &mut StdRng, choices: &[&'static str]) -> &'static str {
    choices.choose(rng).copied().unwrap_or_default()
}
