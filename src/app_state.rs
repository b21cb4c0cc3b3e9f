//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::stores::TransactionStore;

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Manila".
    pub local_timezone: String,

    /// The source of transaction records.
    pub transaction_store: Arc<dyn TransactionStore>,
}

impl AppState {
    /// Create a new [AppState] around a transaction store.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Manila".
    pub fn new(transaction_store: Arc<dyn TransactionStore>, local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
            transaction_store,
        }
    }
}
