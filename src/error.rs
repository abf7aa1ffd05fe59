//! Error types for catalog mutations and persistence.

use thiserror::Error;

/// Malformed input for a product. Shown to the user next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name is required")]
    EmptyName,

    #[error("Category is required")]
    EmptyCategory,

    #[error("Quantity must be a positive whole number (got {0})")]
    InvalidQuantity(i64),
}

/// A reorder index outside the product list. Indicates a UI bug, not user error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reorder index out of range: from {from} to {to} with {len} products")]
pub struct IndexError {
    pub from: usize,
    pub to: usize,
    pub len: usize,
}

/// Errors returned by catalog mutators. The catalog is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Errors from the key-value store. Never propagated into the catalog state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("storage backend error: {message}")]
    Backend { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
