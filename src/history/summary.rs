//! Grouping and totals for the filtered transaction set.
//!
//! Provides the per-category breakdown used by both the text summary and the
//! pie chart. Everything here is recomputed on every query and never stored.

use crate::transaction::{Category, Transaction};

/// The per-category totals of one filtered transaction set.
#[derive(Debug, PartialEq, Default)]
pub(crate) struct Summary {
    /// Sum of every row's amount.
    pub(crate) total: f64,
    /// (category, subtotal) pairs, ordered by the first appearance of each
    /// category in the rows.
    pub(crate) by_category: Vec<(Category, f64)>,
}

impl Summary {
    /// Whether there were no rows to summarize.
    pub(crate) fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

/// Group the rows by category and sum the amounts.
///
/// # Returns
/// A [Summary] whose mapping iterates in first-seen category order. An empty
/// input produces a zero total and an empty mapping.
pub(crate) fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for transaction in transactions {
        summary.total += transaction.amount;

        let group = summary
            .by_category
            .iter_mut()
            .find(|(category, _)| *category == transaction.category);

        match group {
            Some((_, subtotal)) => *subtotal += transaction.amount,
            None => summary
                .by_category
                .push((transaction.category, transaction.amount)),
        }
    }

    summary
}

/// Convert a summary into chart-ready (label, value) pairs.
///
/// Same grouping and order as the summary itself.
pub(crate) fn chart_series(summary: &Summary) -> Vec<(String, f64)> {
    summary
        .by_category
        .iter()
        .map(|(category, subtotal)| (category.to_string(), *subtotal))
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{stores::demo_transactions, transaction::Category};

    use super::{chart_series, summarize};

    #[test]
    fn sums_the_seed_rows_by_category_in_first_seen_order() {
        let transactions = demo_transactions(date!(2025 - 06 - 15));

        let summary = summarize(&transactions);

        assert_eq!(summary.total, 2850.00);
        assert_eq!(
            summary.by_category,
            vec![
                (Category::Food, 650.00),
                (Category::Transport, 1200.00),
                (Category::Bills, 800.00),
                (Category::Snacks, 200.00),
            ]
        );
    }

    #[test]
    fn total_equals_the_sum_of_all_rows() {
        let transactions = demo_transactions(date!(2025 - 06 - 15));

        let summary = summarize(&transactions);

        let row_sum: f64 = transactions.iter().map(|t| t.amount).sum();
        assert_eq!(summary.total, row_sum);
    }

    #[test]
    fn empty_input_produces_an_empty_summary() {
        let summary = summarize(&[]);

        assert_eq!(summary.total, 0.0);
        assert!(summary.is_empty());
    }

    #[test]
    fn chart_series_matches_the_summary_order() {
        let transactions = demo_transactions(date!(2025 - 06 - 15));

        let series = chart_series(&summarize(&transactions));

        assert_eq!(
            series,
            vec![
                ("Food".to_owned(), 650.00),
                ("Transport".to_owned(), 1200.00),
                ("Bills".to_owned(), 800.00),
                ("Snacks".to_owned(), 200.00),
            ]
        );
    }
}
