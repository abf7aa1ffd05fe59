pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod debounce;
pub mod error;
pub mod history;
pub mod logging;
pub mod projection;
pub mod session;
pub mod state;
pub mod storage;
pub mod theme;

pub use error::{CatalogError, IndexError, StorageError, ValidationError};
pub use history::History;
pub use session::{GrocerySession, ListView};
pub use state::{Catalog, Product, ProductDraft, ProductId, ProductStamp, SortKey, ViewParameters};
