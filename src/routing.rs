//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    AppState, endpoints,
    history::{get_history_page, get_history_report},
    home::get_home_page,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(endpoints::HISTORY_VIEW, get(get_history_page))
        .route(endpoints::HISTORY_REPORT, get(get_history_report))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}
