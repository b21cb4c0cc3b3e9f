//! Data access for transaction records.
//!
//! The filter pipeline only ever sees the narrow [TransactionStore]
//! interface, so it can be tested independently of whatever holds the data.

mod demo;

pub use demo::DemoTransactionStore;

#[cfg(test)]
pub(crate) use demo::demo_transactions;

use crate::{Error, transaction::Transaction};

/// Produces the ordered sequence of transaction records.
pub trait TransactionStore: Send + Sync {
    /// Return all transactions in their stored order.
    fn list_transactions(&self) -> Result<Vec<Transaction>, Error>;
}
