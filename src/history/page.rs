//! Defines the route handler for the transaction history page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use time::{Date, OffsetDateTime};

use crate::{AppState, Error, endpoints, stores::TransactionStore, timezone::local_offset};

use super::{
    chart::spending_chart,
    filter::filter_transactions,
    query::{HistoryQuery, QueryDecision, normalize_query},
    summary::summarize,
    view::history_view,
};

/// The state needed for the history page and its PDF report.
#[derive(Clone)]
pub struct HistoryState {
    /// The source of transaction records.
    pub transactions: Arc<dyn TransactionStore>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Manila".
    pub local_timezone: String,
}

impl FromRef<AppState> for HistoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transaction_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the transaction history with the active filters applied.
pub async fn get_history_page(
    State(state): State<HistoryState>,
    Query(query_params): Query<HistoryQuery>,
) -> Result<Response, Error> {
    let now_local = current_local_date(&state.local_timezone)?;
    let params = match normalize_query(query_params, now_local, endpoints::HISTORY_VIEW) {
        QueryDecision::Normalized(params) => params,
        QueryDecision::Redirect(redirect_url) => {
            return Ok(Redirect::to(&redirect_url).into_response());
        }
    };

    let transactions = state
        .transactions
        .list_transactions()
        .inspect_err(|error| tracing::error!("could not load transactions: {error}"))?;

    let spec = params.to_filter_spec();
    let rows = filter_transactions(&transactions, &spec);
    let summary = summarize(&rows);
    let chart = (!summary.is_empty()).then(|| spending_chart(&summary));

    Ok(history_view(
        &params,
        &rows,
        &summary,
        chart.as_ref(),
        spec.amount.is_invalid(),
    )
    .into_response())
}

pub(super) fn current_local_date(local_timezone: &str) -> Result<Date, Error> {
    let local_offset = local_offset(local_timezone)
        .inspect_err(|error| tracing::error!("could not resolve local timezone: {error}"))?;

    Ok(OffsetDateTime::now_utc().to_offset(local_offset).date())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        extract::{Query, State},
        http::{Response, StatusCode},
    };
    use scraper::{Html, Selector};
    use time::{Duration, OffsetDateTime};

    use crate::{DemoTransactionStore, endpoints};

    use super::{HistoryQuery, HistoryState, get_history_page};

    fn get_test_state() -> HistoryState {
        HistoryState {
            transactions: Arc::new(DemoTransactionStore::new("Etc/UTC")),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn full_query(category: &str, amount: &str) -> HistoryQuery {
        let today = OffsetDateTime::now_utc().date();

        HistoryQuery {
            from: Some(today - Duration::days(5)),
            to: Some(today),
            category: Some(category.to_owned()),
            amount: Some(amount.to_owned()),
        }
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    fn count_table_rows(html: &Html) -> usize {
        let selector = Selector::parse("tbody tr").unwrap();
        html.select(&selector).count()
    }

    fn total_text(html: &Html) -> String {
        let selector = Selector::parse("#total-spending").unwrap();
        html.select(&selector)
            .next()
            .expect("expected a total line")
            .text()
            .collect()
    }

    fn alert_count(html: &Html) -> usize {
        let selector = Selector::parse("div[role='alert']").unwrap();
        html.select(&selector).count()
    }

    #[tokio::test]
    async fn missing_params_redirect_to_the_normalized_url() {
        let response = get_history_page(
            State(get_test_state()),
            Query(HistoryQuery::default()),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap().to_str().unwrap();
        assert!(location.starts_with(endpoints::HISTORY_VIEW));
        for param in ["from=", "to=", "category=All", "amount="] {
            assert!(location.contains(param), "missing {param} in {location}");
        }
    }

    #[tokio::test]
    async fn displays_every_row_in_the_full_window() {
        let response = get_history_page(State(get_test_state()), Query(full_query("All", "")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert_valid_html(&html);

        assert_eq!(count_table_rows(&html), 5);
        assert_eq!(total_text(&html), "Total Spending: ₱2,850.00");
        assert_eq!(alert_count(&html), 0);

        let summary_selector = Selector::parse("#category-summary li").unwrap();
        let summary_entries: Vec<String> = html
            .select(&summary_selector)
            .map(|entry| entry.text().collect())
            .collect();
        assert_eq!(
            summary_entries,
            vec![
                "Food: ₱650.00",
                "Transport: ₱1,200.00",
                "Bills: ₱800.00",
                "Snacks: ₱200.00"
            ]
        );

        let chart_selector = Selector::parse("#category-spending-chart").unwrap();
        assert!(
            html.select(&chart_selector).next().is_some(),
            "expected the chart container"
        );
    }

    #[tokio::test]
    async fn filters_by_category() {
        let response = get_history_page(State(get_test_state()), Query(full_query("Food", "")))
            .await
            .unwrap();

        let html = parse_html(response).await;
        assert_valid_html(&html);

        assert_eq!(count_table_rows(&html), 2);
        assert_eq!(total_text(&html), "Total Spending: ₱650.00");
    }

    #[tokio::test]
    async fn filters_by_amount_range() {
        let response = get_history_page(
            State(get_test_state()),
            Query(full_query("All", "100-500")),
        )
        .await
        .unwrap();

        let html = parse_html(response).await;
        assert_valid_html(&html);

        assert_eq!(count_table_rows(&html), 3);
        assert_eq!(total_text(&html), "Total Spending: ₱850.00");
    }

    #[tokio::test]
    async fn malformed_amount_text_warns_and_ignores_the_constraint() {
        let response = get_history_page(State(get_test_state()), Query(full_query("All", "abc")))
            .await
            .unwrap();

        let html = parse_html(response).await;
        assert_valid_html(&html);

        assert_eq!(alert_count(&html), 1);
        // The other filters still apply, so all five rows are shown.
        assert_eq!(count_table_rows(&html), 5);
        assert_eq!(total_text(&html), "Total Spending: ₱2,850.00");
    }

    #[tokio::test]
    async fn empty_result_shows_the_no_data_placeholder() {
        let today = OffsetDateTime::now_utc().date();
        let query = HistoryQuery {
            // An inverted window matches nothing.
            from: Some(today),
            to: Some(today - Duration::days(5)),
            category: Some("All".to_owned()),
            amount: Some(String::new()),
        };

        let response = get_history_page(State(get_test_state()), Query(query))
            .await
            .unwrap();

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let table_selector = Selector::parse("table").unwrap();
        assert!(html.select(&table_selector).next().is_none());

        let chart_selector = Selector::parse("#category-spending-chart").unwrap();
        assert!(html.select(&chart_selector).next().is_none());

        let body_text: String = html.root_element().text().collect();
        assert!(
            body_text.contains("No transactions match these filters."),
            "expected the no-data message"
        );
    }
}
