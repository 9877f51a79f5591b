pub mod generator;
pub mod transaction;

pub use generator::TransactionGenerator;
pub use transaction::{TransactionKey, TransactionValue};
