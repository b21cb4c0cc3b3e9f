//! Query-string handling for the history page and its PDF report.
//!
//! The entire filter form state lives in the URL, so the page and the report
//! endpoints see exactly the same filters. Requests with missing parameters
//! are normalized to defaults and redirected to the fully-specified URL.

use serde::Deserialize;
use time::{Date, Duration};

use crate::transaction::CategoryFilter;

use super::filter::{FilterSpec, parse_amount_filter};

/// Days shown by default when no date bounds are given.
const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Raw query parameters as they arrive from the browser.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct HistoryQuery {
    /// Inclusive lower date bound.
    pub(crate) from: Option<Date>,
    /// Inclusive upper date bound.
    pub(crate) to: Option<Date>,
    /// Category name or the "All" sentinel.
    pub(crate) category: Option<String>,
    /// Raw amount-filter text, kept verbatim so it can be echoed back into
    /// the form and re-parsed by the report endpoint.
    pub(crate) amount: Option<String>,
}

/// Fully-specified, normalized filter state for one query.
///
/// This is the source of truth for behavior (defaults applied, category
/// canonicalized); it also builds consistent URLs back to itself.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HistoryParams {
    /// Inclusive lower date bound.
    pub(crate) date_from: Date,
    /// Inclusive upper date bound.
    pub(crate) date_to: Date,
    /// The category constraint.
    pub(crate) category: CategoryFilter,
    /// Raw amount-filter text.
    pub(crate) amount_text: String,
}

/// The outcome of normalizing a raw query.
pub(crate) enum QueryDecision {
    /// The query was missing or carried non-canonical parameters; redirect to
    /// the fully-specified URL.
    Redirect(String),
    /// The query was already fully specified.
    Normalized(HistoryParams),
}

/// Apply defaults to a raw query and decide whether to redirect.
///
/// Missing dates default to the window ending at `today`, a missing or
/// unrecognized category defaults to "All", and missing amount text defaults
/// to blank. The redirect points back at `route` so the page and the report
/// each normalize onto themselves.
pub(crate) fn normalize_query(query: HistoryQuery, today: Date, route: &str) -> QueryDecision {
    let has_missing_params = query.from.is_none()
        || query.to.is_none()
        || query.category.is_none()
        || query.amount.is_none();

    let category = query.category.as_deref().map(CategoryFilter::parse);
    let category_not_canonical = matches!(category, Some(None));

    let params = HistoryParams {
        date_from: query
            .from
            .unwrap_or(today - Duration::days(DEFAULT_WINDOW_DAYS)),
        date_to: query.to.unwrap_or(today),
        category: category.flatten().unwrap_or_default(),
        amount_text: query.amount.unwrap_or_default(),
    };

    if has_missing_params || category_not_canonical {
        QueryDecision::Redirect(params.to_url(route))
    } else {
        QueryDecision::Normalized(params)
    }
}

impl HistoryParams {
    /// The filter spec for these parameters, with the amount text parsed.
    pub(crate) fn to_filter_spec(&self) -> FilterSpec {
        FilterSpec {
            date_from: self.date_from,
            date_to: self.date_to,
            category: self.category,
            amount: parse_amount_filter(&self.amount_text),
        }
    }

    pub(crate) fn to_query_string(&self) -> String {
        serde_urlencoded::to_string([
            ("from", self.date_from.to_string()),
            ("to", self.date_to.to_string()),
            ("category", self.category.as_str().to_owned()),
            ("amount", self.amount_text.clone()),
        ])
        .unwrap_or_default()
    }

    pub(crate) fn to_url(&self, route: &str) -> String {
        format!("{route}?{}", self.to_query_string())
    }
}
