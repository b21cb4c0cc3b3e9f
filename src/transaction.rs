//! The transaction record and its closed set of spending categories.

use std::fmt;

use time::Date;

/// A single expense record.
///
/// Transactions are immutable values; they have no identity beyond the
/// combination of their fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The amount of money spent in this transaction.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// The spending category of this transaction.
    pub category: Category,
    /// How the transaction was paid for, e.g. "Cash" or "GCash".
    ///
    /// A free-form label that is displayed but never filtered on.
    pub payment_method: String,
}

impl Transaction {
    /// Create a new transaction record.
    pub fn new(amount: f64, date: Date, category: Category, payment_method: &str) -> Self {
        Self {
            amount,
            date,
            category,
            payment_method: payment_method.to_owned(),
        }
    }
}

/// The closed set of spending categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Groceries and meals.
    Food,
    /// Fares and fuel.
    Transport,
    /// Utilities and other recurring charges.
    Bills,
    /// Small treats outside regular meals.
    Snacks,
}

impl Category {
    /// Every category, in the order it is offered by the filter controls.
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Snacks,
    ];

    /// The display name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Snacks => "Snacks",
        }
    }

    /// Parse a category from its display name, ignoring case.
    ///
    /// Returns `None` for names outside the closed set.
    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category constraint of a filter query: everything, or one category.
///
/// The "All" wildcard is modeled as its own variant rather than a magic
/// string compared against category names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category constraint.
    #[default]
    All,
    /// Keep only transactions with the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether `category` satisfies this constraint.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// Parse a filter from a form value, ignoring case.
    ///
    /// Returns `None` for values that are neither "All" nor a category name.
    pub fn parse(value: &str) -> Option<CategoryFilter> {
        if value.eq_ignore_ascii_case("All") {
            return Some(CategoryFilter::All);
        }

        Category::parse(value).map(CategoryFilter::Only)
    }

    /// The form value for this filter.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}
