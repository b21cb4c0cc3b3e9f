//! HTML rendering for the transaction history page.

use maud::{Markup, html};

use crate::{
    alert::Alert,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency, link,
    },
    navigation::NavBar,
    transaction::{Category, CategoryFilter, Transaction},
};

use super::{
    chart::{HistoryChart, chart_script},
    query::HistoryParams,
    summary::Summary,
};

/// The URL of the ECharts library loaded on pages that draw the chart.
const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

pub(super) fn history_view(
    params: &HistoryParams,
    rows: &[Transaction],
    summary: &Summary,
    chart: Option<&HistoryChart>,
    amount_invalid: bool,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::HISTORY_VIEW).into_html();
    let export_url = params.to_url(endpoints::HISTORY_REPORT);

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl" id="history-content"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transaction History" }

                    (link(endpoints::ROOT, "Back"))
                }

                @if amount_invalid {
                    (Alert::warning(
                        "Invalid amount filter.",
                        "Use a single value like 500 or a range like 100-500. \
                        The amount filter was ignored for this search.",
                    ).into_html())
                }

                (filter_form(params))

                @if rows.is_empty() {
                    p class="text-gray-600 dark:text-gray-400"
                    {
                        "No transactions match these filters. No data to summarize."
                    }
                } @else {
                    (transaction_table(rows))
                    (summary_block(summary))

                    @if let Some(chart) = chart {
                        div
                            id=(chart.id)
                            class="min-h-[380px] rounded dark:bg-gray-100"
                        {}
                    }

                    (link(&export_url, "Export PDF"))
                }
            }
        }
    };

    let scripts: Vec<HeadElement> = match chart {
        Some(chart) => vec![
            HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
            chart_script(chart),
        ],
        None => Vec::new(),
    };

    base("Transaction History", &scripts, &content)
}

/// The filter controls. Submitting the form re-runs the query with the
/// chosen values in the URL; changing the category resubmits immediately.
fn filter_form(params: &HistoryParams) -> Markup {
    html! {
        form
            method="get"
            action=(endpoints::HISTORY_VIEW)
            class="flex flex-wrap items-end gap-4 bg-gray-50 dark:bg-gray-800 p-4 rounded-lg"
        {
            div
            {
                label for="from" class=(FORM_LABEL_STYLE) { "From" }
                input
                    type="date"
                    name="from"
                    id="from"
                    value=(params.date_from)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="to" class=(FORM_LABEL_STYLE) { "To" }
                input
                    type="date"
                    name="to"
                    id="to"
                    value=(params.date_to)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                select
                    name="category"
                    id="category"
                    onchange="this.form.submit()"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option
                        value="All"
                        selected[params.category == CategoryFilter::All]
                    {
                        "All"
                    }

                    @for category in Category::ALL {
                        option
                            value=(category.as_str())
                            selected[params.category == CategoryFilter::Only(category)]
                        {
                            (category.as_str())
                        }
                    }
                }
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    type="text"
                    name="amount"
                    id="amount"
                    value=(params.amount_text)
                    placeholder="e.g. 500 or 100-500"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Search" }
            }
        }
    }
}

fn transaction_table(rows: &[Transaction]) -> Markup {
    html! {
        div class="relative overflow-x-auto rounded"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Payment Method" }
                    }
                }

                tbody
                {
                    @for row in rows {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (format_currency(row.amount)) }
                            td class=(TABLE_CELL_STYLE) { (row.date) }
                            td class=(TABLE_CELL_STYLE) { (row.category) }
                            td class=(TABLE_CELL_STYLE) { (row.payment_method) }
                        }
                    }
                }
            }
        }
    }
}

fn summary_block(summary: &Summary) -> Markup {
    html! {
        section class="bg-gray-50 dark:bg-gray-800 p-4 rounded-lg"
        {
            p class="font-semibold mb-2" id="total-spending"
            {
                "Total Spending: " (format_currency(summary.total))
            }

            ul class="space-y-1 text-sm" id="category-summary"
            {
                @for (category, subtotal) in &summary.by_category {
                    li { (category) ": " (format_currency(*subtotal)) }
                }
            }
        }
    }
}
