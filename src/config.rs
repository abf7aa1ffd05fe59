use tracing::Level;

pub const PRODUCTS_KEY: &str = "products";
pub const CATEGORIES_KEY: &str = "categories";
pub const SEARCH_TERM_KEY: &str = "searchTerm";
pub const FILTER_CATEGORY_KEY: &str = "filterCategory";
pub const SORT_BY_KEY: &str = "sortBy";
pub const DARK_MODE_KEY: &str = "darkMode";

pub const DEBOUNCE_DELAY_MS: u32 = 300;
pub const TOAST_DURATION_MS: u32 = 3000;

/// Category list for a first session with nothing stored yet.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Fruits", "Vegetables", "Dairy"];

pub const LOG_LEVEL: Level = Level::INFO;

/// Tunables for a [`crate::session::GrocerySession`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Maximum number of undo steps kept. `None` keeps everything.
    pub history_limit: Option<usize>,
}

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}
