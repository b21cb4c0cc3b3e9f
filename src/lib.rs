//! Gastos is a web app for reviewing personal expenses.
//!
//! This library provides a REST API that directly serves HTML pages: a
//! transaction history with date, category, and amount filters, a spending
//! summary with a pie chart, and a PDF export of the displayed rows.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod history;
mod home;
mod html;
mod internal_server_error;
mod navigation;
mod not_found;
mod routing;
mod stores;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use routing::build_router;
pub use stores::{DemoTransactionStore, TransactionStore};
pub use transaction::{Category, CategoryFilter, Transaction};

use crate::internal_server_error::InternalServerError;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The configured timezone is not a valid, canonical timezone name.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The PDF report could not be rendered.
    ///
    /// Carries the underlying error text so it can be shown to the user.
    #[error("could not render the PDF report: {0}")]
    PdfRender(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezone(timezone) => {
                let fix = format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string."
                );

                InternalServerError {
                    description: "Invalid Timezone Settings",
                    fix: &fix,
                }
                .into_response()
            }
            Error::PdfRender(message) => {
                let fix = format!("The report could not be generated: {message}");

                InternalServerError {
                    description: "PDF Export Failed",
                    fix: &fix,
                }
                .into_response()
            }
        }
    }
}
