//! An in-memory transaction source with demonstration data.

use time::{Date, Duration, OffsetDateTime};

use crate::{
    Error,
    stores::TransactionStore,
    timezone::local_offset,
    transaction::{Category, Transaction},
};

/// Serves a fixed set of demonstration transactions.
///
/// The rows are regenerated on every call so that their dates stay relative
/// to the current day in the configured timezone.
pub struct DemoTransactionStore {
    local_timezone: String,
}

impl DemoTransactionStore {
    /// Create a store that dates its rows relative to today in `local_timezone`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Manila".
    pub fn new(local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
        }
    }
}

impl TransactionStore for DemoTransactionStore {
    fn list_transactions(&self) -> Result<Vec<Transaction>, Error> {
        let local_offset = local_offset(&self.local_timezone)?;
        let today = OffsetDateTime::now_utc().to_offset(local_offset).date();

        Ok(demo_transactions(today))
    }
}

/// The demonstration rows, dated relative to `today`.
pub(crate) fn demo_transactions(today: Date) -> Vec<Transaction> {
    vec![
        Transaction::new(500.00, today, Category::Food, "Cash"),
        Transaction::new(
            1200.00,
            today - Duration::days(1),
            Category::Transport,
            "Credit Card",
        ),
        Transaction::new(800.00, today - Duration::days(3), Category::Bills, "Online"),
        Transaction::new(200.00, today - Duration::days(5), Category::Snacks, "GCash"),
        Transaction::new(150.00, today - Duration::days(2), Category::Food, "Cash"),
    ]
}
