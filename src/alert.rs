//! Alert partial for surfacing input problems to the user.

use maud::{Markup, html};

/// An inline warning banner rendered above the page content.
pub struct Alert<'a> {
    message: &'a str,
    details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new warning alert.
    pub fn warning(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/alerts/
        html!(
            div
                class="flex items-center p-4 mb-4 text-sm text-yellow-800 rounded-lg \
                    bg-yellow-50 dark:bg-gray-800 dark:text-yellow-300"
                role="alert"
            {
                span class="font-medium" { (self.message) }
                " "
                (self.details)
            }
        )
    }
}

#[cfg(test)]
mod alert_tests {
    use super::Alert;

    #[test]
    fn renders_message_and_details() {
        let markup = Alert::warning("Invalid amount filter.", "It was ignored.").into_html();
        let html = markup.into_string();

        assert!(html.contains("Invalid amount filter."));
        assert!(html.contains("It was ignored."));
        assert!(html.contains("role=\"alert\""));
    }
}
