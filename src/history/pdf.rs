//! PDF rendering of the displayed transaction rows.
//!
//! The report endpoint re-runs the same normalize/filter pipeline as the
//! page, so the document always matches what the page displays for the same
//! query string. The document is rendered into an in-memory buffer and
//! served as a download; a failed render never produces a partial file.

use std::io::BufWriter;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::{Error, endpoints, transaction::Transaction};

use super::{
    filter::filter_transactions,
    page::{HistoryState, current_local_date},
    query::{HistoryQuery, QueryDecision, normalize_query},
};

/// The title printed at the top of the report.
const REPORT_TITLE: &str = "Transaction History";
/// The file name suggested to the browser.
const REPORT_FILE_NAME: &str = "TransactionReport.pdf";

/// The displayed column headers, reused as the first table row.
const COLUMN_HEADERS: [&str; 4] = ["Amount", "Date", "Category", "Payment Method"];

// A4 portrait with 10 mm margins.
const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 10.0;

const TITLE_FONT_SIZE: f64 = 16.0;
const HEADER_FONT_SIZE: f64 = 12.0;
const CELL_FONT_SIZE: f64 = 11.0;
const ROW_HEIGHT: f64 = 7.0;

/// The left edge of each table column, in millimetres.
const COLUMN_X: [f64; 4] = [MARGIN, 62.0, 107.0, 152.0];

/// Serve the currently displayed transaction rows as a PDF download.
pub async fn get_history_report(
    State(state): State<HistoryState>,
    Query(query_params): Query<HistoryQuery>,
) -> Result<Response, Error> {
    let now_local = current_local_date(&state.local_timezone)?;
    let params = match normalize_query(query_params, now_local, endpoints::HISTORY_REPORT) {
        QueryDecision::Normalized(params) => params,
        QueryDecision::Redirect(redirect_url) => {
            return Ok(Redirect::to(&redirect_url).into_response());
        }
    };

    let transactions = state
        .transactions
        .list_transactions()
        .inspect_err(|error| tracing::error!("could not load transactions: {error}"))?;

    let rows = filter_transactions(&transactions, &params.to_filter_spec());

    let document = render_report(&rows)
        .inspect_err(|error| tracing::error!("could not render the PDF report: {error}"))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        document,
    )
        .into_response())
}

/// Render the report document into an in-memory buffer.
///
/// The layout mirrors the page's table: a centered bold title, then the
/// column headers, then one line per displayed row. Rows that do not fit
/// continue on additional pages.
pub(super) fn render_report(rows: &[Transaction]) -> Result<Vec<u8>, Error> {
    let (document, first_page, first_layer) =
        PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");

    let regular = document
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = document
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut layer = document.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT - MARGIN - 8.0;

    let title_width = approximate_text_width(REPORT_TITLE, TITLE_FONT_SIZE);
    layer.use_text(
        REPORT_TITLE,
        TITLE_FONT_SIZE,
        Mm((PAGE_WIDTH - title_width) / 2.0),
        Mm(y),
        &bold,
    );
    // The title row plus a blank line.
    y -= 2.0 * ROW_HEIGHT;

    let headers = COLUMN_HEADERS.map(str::to_owned);
    write_row(&layer, &headers, HEADER_FONT_SIZE, &regular, y);
    y -= ROW_HEIGHT;

    for row in rows {
        if y < MARGIN + ROW_HEIGHT {
            let (page, page_layer) =
                document.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");
            layer = document.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT - MARGIN - ROW_HEIGHT;
        }

        // The peso sign is not part of the WinAnsi encoding used by the
        // builtin fonts, so amounts are written as plain decimals.
        let cells = [
            format!("{:.2}", row.amount),
            row.date.to_string(),
            row.category.to_string(),
            row.payment_method.clone(),
        ];
        write_row(&layer, &cells, CELL_FONT_SIZE, &regular, y);
        y -= ROW_HEIGHT;
    }

    let mut buffer = BufWriter::new(Vec::new());
    document.save(&mut buffer).map_err(pdf_error)?;

    buffer
        .into_inner()
        .map_err(|error| Error::PdfRender(error.to_string()))
}

fn write_row(
    layer: &PdfLayerReference,
    cells: &[String; 4],
    font_size: f64,
    font: &IndirectFontRef,
    y: f64,
) {
    for (text, x) in cells.iter().zip(COLUMN_X) {
        layer.use_text(text.clone(), font_size, Mm(x), Mm(y), font);
    }
}

// Helvetica glyphs average roughly half the font size in width, which is
// close enough to center a short title.
fn approximate_text_width(text: &str, font_size: f64) -> f64 {
    const PT_TO_MM: f64 = 0.352_778;

    text.chars().count() as f64 * font_size * 0.5 * PT_TO_MM
}

fn pdf_error(error: printpdf::Error) -> Error {
    Error::PdfRender(error.to_string())
}
