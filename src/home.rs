//! Defines the route handler for the landing page, the app's entry point.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// Render the landing page.
pub async fn get_home_page() -> Response {
    home_view().into_response()
}

fn home_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="max-w-md w-full text-center"
            {
                h1 class="text-3xl font-bold mb-2" { "Gastos" }

                p class="mb-6 text-gray-600 dark:text-gray-400"
                {
                    "Track where the money goes: browse your transactions, \
                    filter them by date, category, and amount, and export the \
                    results as a PDF report."
                }

                a
                    href=(endpoints::HISTORY_VIEW)
                    class=(BUTTON_PRIMARY_STYLE)
                {
                    "View Transaction History"
                }
            }
        }
    );

    base("Home", &[], &content)
}
