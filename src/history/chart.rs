//! Pie chart of spending by category.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered into an HTML container by generated initialization JavaScript.

use charming::{
    Chart,
    component::{Legend, Title},
    datatype::DataPoint,
    element::{JsFunction, Label, Tooltip, Trigger},
    series::Pie,
};
use maud::PreEscaped;

use crate::html::HeadElement;

use super::summary::{Summary, chart_series};

/// A chart with its HTML container ID and ECharts configuration.
pub(super) struct HistoryChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub(super) id: &'static str,
    /// The ECharts configuration as a JSON string
    pub(super) options: String,
}

/// Build the spending-by-category pie chart for a summary.
pub(super) fn spending_chart(summary: &Summary) -> HistoryChart {
    HistoryChart {
        id: "category-spending-chart",
        options: category_pie(summary).to_string(),
    }
}

fn category_pie(summary: &Summary) -> Chart {
    let series = chart_series(summary);
    let data: Vec<DataPoint> = series
        .iter()
        .map(|(label, subtotal)| DataPoint::from((*subtotal, label.as_str())))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().top("bottom"))
        .series(
            Pie::new()
                .name("SpendingByCategory")
                .radius("55%")
                .label(Label::new().show(true).formatter(currency_label_formatter()))
                .data(data),
        )
}

/// Generates JavaScript initialization code for the chart.
///
/// Creates a script that initializes the ECharts instance with dark mode
/// support and responsive resizing.
pub(super) fn chart_script(chart: &HistoryChart) -> HeadElement {
    let script_content = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }})();"#,
        chart.id, chart.options
    );

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-PH', {
              style: 'currency',
              currency: 'PHP'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

// Pie slice labels show the category and its subtotal, e.g. "Food: ₱650.00".
fn currency_label_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "params",
        "const currencyFormatter = new Intl.NumberFormat('en-PH', {
              style: 'currency',
              currency: 'PHP'
            });
            return params.name + ': ' + currencyFormatter.format(params.value);",
    )
}
