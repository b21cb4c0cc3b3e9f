//! The transaction history page and its PDF report.
//!
//! This module contains everything related to reviewing transactions:
//! - The filter-and-aggregate pipeline (`filter`, `summary`)
//! - Query normalization shared by the page and the report (`query`)
//! - The page handler, views, and pie chart (`page`, `view`, `chart`)
//! - The PDF export of the displayed rows (`pdf`)

mod chart;
mod filter;
mod page;
mod pdf;
mod query;
mod summary;
mod view;

pub use page::get_history_page;
pub use pdf::get_history_report;
