mod category_filter;
mod category_manager;
mod history_controls;
mod product_form;
mod product_list;
mod search_bar;
mod sort_select;
mod theme_toggle;
mod toasts;

pub use category_filter::CategoryFilter;
pub use category_manager::CategoryManager;
pub use history_controls::HistoryControls;
pub use product_form::ProductForm;
pub use product_list::ProductList;
pub use search_bar::SearchBar;
pub use sort_select::SortSelect;
pub use theme_toggle::ThemeToggle;
pub use toasts::Toasts;
