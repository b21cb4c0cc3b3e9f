//! The API endpoints URIs.

/// The landing page.
pub const ROOT: &str = "/";
/// The page for browsing and filtering the transaction history.
pub const HISTORY_VIEW: &str = "/history";
/// The PDF download of the currently displayed transaction rows.
pub const HISTORY_REPORT: &str = "/history/report.pdf";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
