//! The filtering half of the history pipeline.
//!
//! A [FilterSpec] combines the date, category, and amount constraints derived
//! from the form values of one query. Filtering is a pure function of the
//! transaction sequence and the spec; the only signal besides the output is
//! [AmountFilter::Invalid], which the page handler turns into a warning.

use time::Date;

use crate::transaction::{CategoryFilter, Transaction};

/// The amount constraint parsed from the raw filter text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum AmountFilter {
    /// Blank input; no constraint.
    #[default]
    None,
    /// Keep rows whose amount equals the value exactly.
    Exact(f64),
    /// Keep rows whose amount lies within the inclusive range.
    ///
    /// `min <= max` is not checked; an inverted range matches nothing.
    Range {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Unparsable input. Applied as no constraint so the query can still run
    /// on the other filters; the caller raises an input warning.
    Invalid,
}

impl AmountFilter {
    /// Whether `amount` satisfies this constraint.
    fn matches(self, amount: f64) -> bool {
        match self {
            AmountFilter::None | AmountFilter::Invalid => true,
            AmountFilter::Exact(value) => amount == value,
            AmountFilter::Range { min, max } => min <= amount && amount <= max,
        }
    }

    /// Whether the raw text failed to parse.
    pub(crate) fn is_invalid(self) -> bool {
        self == AmountFilter::Invalid
    }
}

/// Parse the raw amount-filter text into an [AmountFilter].
///
/// The text mini-grammar, parsed once per query:
/// - blank text means no constraint;
/// - text with a single `-` separating two decimals means an inclusive range,
///   e.g. "100-500";
/// - text without a `-` that parses as a decimal means an exact match;
/// - anything else is invalid.
pub(crate) fn parse_amount_filter(text: &str) -> AmountFilter {
    let text = text.trim();

    if text.is_empty() {
        return AmountFilter::None;
    }

    if text.contains('-') {
        let parts: Vec<&str> = text.split('-').collect();

        if parts.len() == 2 {
            let min = parts[0].trim().parse::<f64>();
            let max = parts[1].trim().parse::<f64>();

            if let (Ok(min), Ok(max)) = (min, max) {
                return AmountFilter::Range { min, max };
            }
        }

        return AmountFilter::Invalid;
    }

    match text.parse::<f64>() {
        Ok(value) => AmountFilter::Exact(value),
        Err(_) => AmountFilter::Invalid,
    }
}

/// The combined date/category/amount constraints for one query.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FilterSpec {
    /// Inclusive lower date bound.
    pub(crate) date_from: Date,
    /// Inclusive upper date bound.
    ///
    /// `date_from <= date_to` is a caller precondition and is not enforced
    /// here; an inverted window matches nothing.
    pub(crate) date_to: Date,
    /// The category constraint, with [CategoryFilter::All] as the wildcard.
    pub(crate) category: CategoryFilter,
    /// The amount constraint.
    pub(crate) amount: AmountFilter,
}

/// Retain the transactions that satisfy every active constraint.
///
/// The output preserves the relative order of the input and is a subset of
/// it; no rows are synthesized. An empty result is not an error.
pub(crate) fn filter_transactions(
    transactions: &[Transaction],
    spec: &FilterSpec,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| {
            spec.date_from <= transaction.date
                && transaction.date <= spec.date_to
                && spec.category.matches(transaction.category)
                && spec.amount.matches(transaction.amount)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use time::{Date, Duration, macros::date};

    use crate::{
        stores::demo_transactions,
        transaction::{Category, CategoryFilter, Transaction},
    };

    use super::{AmountFilter, FilterSpec, filter_transactions, parse_amount_filter};

    const TODAY: Date = date!(2025 - 06 - 15);

    fn seed() -> Vec<Transaction> {
        demo_transactions(TODAY)
    }

    fn spec_with_amount(amount: AmountFilter) -> FilterSpec {
        FilterSpec {
            date_from: TODAY - Duration::days(5),
            date_to: TODAY,
            category: CategoryFilter::All,
            amount,
        }
    }

    #[test]
    fn parses_blank_text_as_no_constraint() {
        assert_eq!(parse_amount_filter(""), AmountFilter::None);
        assert_eq!(parse_amount_filter("   "), AmountFilter::None);
    }

    #[test]
    fn parses_a_single_decimal_as_exact() {
        assert_eq!(parse_amount_filter("500"), AmountFilter::Exact(500.0));
        assert_eq!(parse_amount_filter(" 12.5 "), AmountFilter::Exact(12.5));
    }

    #[test]
    fn parses_min_max_as_a_range() {
        assert_eq!(
            parse_amount_filter("100-500"),
            AmountFilter::Range {
                min: 100.0,
                max: 500.0
            }
        );
        assert_eq!(
            parse_amount_filter(" 100 - 500 "),
            AmountFilter::Range {
                min: 100.0,
                max: 500.0
            }
        );
    }

    #[test]
    fn rejects_malformed_text_as_invalid() {
        assert_eq!(parse_amount_filter("abc"), AmountFilter::Invalid);
        assert_eq!(parse_amount_filter("100-"), AmountFilter::Invalid);
        assert_eq!(parse_amount_filter("-500"), AmountFilter::Invalid);
        assert_eq!(parse_amount_filter("100-200-300"), AmountFilter::Invalid);
        assert_eq!(parse_amount_filter("100-abc"), AmountFilter::Invalid);
    }

    #[test]
    fn returns_every_row_within_the_full_window() {
        let rows = filter_transactions(&seed(), &spec_with_amount(AmountFilter::None));

        assert_eq!(rows, seed());
    }

    #[test]
    fn retains_only_rows_within_the_date_bounds() {
        let spec = FilterSpec {
            date_from: TODAY - Duration::days(2),
            date_to: TODAY,
            category: CategoryFilter::All,
            amount: AmountFilter::None,
        };

        let rows = filter_transactions(&seed(), &spec);

        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert!(spec.date_from <= row.date && row.date <= spec.date_to);
        }
    }

    #[test]
    fn retains_only_rows_with_the_selected_category() {
        let spec = FilterSpec {
            category: CategoryFilter::Only(Category::Food),
            ..spec_with_amount(AmountFilter::None)
        };

        let rows = filter_transactions(&seed(), &spec);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.category == Category::Food));
        assert_eq!(rows[0].amount, 500.00);
        assert_eq!(rows[1].amount, 150.00);
    }

    #[test]
    fn exact_amount_keeps_only_equal_amounts() {
        let rows = filter_transactions(&seed(), &spec_with_amount(AmountFilter::Exact(500.0)));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 500.00);
    }

    #[test]
    fn amount_range_bounds_are_inclusive() {
        let spec = spec_with_amount(AmountFilter::Range {
            min: 100.0,
            max: 500.0,
        });

        let rows = filter_transactions(&seed(), &spec);

        let amounts: Vec<f64> = rows.iter().map(|row| row.amount).collect();
        assert_eq!(amounts, vec![500.00, 200.00, 150.00]);
    }

    #[test]
    fn inverted_amount_range_matches_nothing() {
        let spec = spec_with_amount(AmountFilter::Range {
            min: 500.0,
            max: 100.0,
        });

        assert!(filter_transactions(&seed(), &spec).is_empty());
    }

    #[test]
    fn inverted_date_window_matches_nothing() {
        let spec = FilterSpec {
            date_from: TODAY,
            date_to: TODAY - Duration::days(5),
            category: CategoryFilter::All,
            amount: AmountFilter::None,
        };

        assert!(filter_transactions(&seed(), &spec).is_empty());
    }

    #[test]
    fn invalid_amount_text_behaves_like_no_constraint() {
        for text in ["abc", "100-", "100-200-300"] {
            let filter = parse_amount_filter(text);
            assert!(filter.is_invalid());

            let rows = filter_transactions(&seed(), &spec_with_amount(filter));
            let unconstrained =
                filter_transactions(&seed(), &spec_with_amount(AmountFilter::None));
            assert_eq!(rows, unconstrained, "for input {text:?}");
        }
    }

    #[test]
    fn output_preserves_relative_order() {
        let rows = filter_transactions(
            &seed(),
            &spec_with_amount(AmountFilter::Range {
                min: 100.0,
                max: 1000.0,
            }),
        );

        let amounts: Vec<f64> = rows.iter().map(|row| row.amount).collect();
        assert_eq!(amounts, vec![500.00, 800.00, 200.00, 150.00]);
    }
}
