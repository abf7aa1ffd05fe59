//! Pure edits on a [`Catalog`] snapshot.
//!
//! Every function borrows the current snapshot and returns the next one; none
//! of them touch history. Each edit leaves every product category either
//! `""` or present in `categories`.

use crate::error::{CatalogResult, IndexError, ValidationError};
use crate::state::{Catalog, Product, ProductDraft, ProductId, ProductStamp};

/// Validates `draft` and appends it as a new product.
///
/// A draft category not yet in the category list is registered alongside it.
pub fn add_product(catalog: &Catalog, draft: &ProductDraft, stamp: ProductStamp) -> CatalogResult<Catalog> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    let category = draft.category.trim();
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory.into());
    }

    let quantity = u32::try_from(draft.quantity)
        .ok()
        .filter(|q| *q > 0)
        .ok_or(ValidationError::InvalidQuantity(draft.quantity))?;

    let mut next = catalog.clone();
    if !next.has_category(category) {
        next.categories.push(category.to_string());
    }
    next.products.push(Product {
        id: stamp.id,
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        date_added: stamp.date_added,
    });
    Ok(next)
}

pub fn delete_product(catalog: &Catalog, id: &ProductId) -> Catalog {
    Catalog {
        products: catalog.products.iter().filter(|p| &p.id != id).cloned().collect(),
        categories: catalog.categories.clone(),
    }
}

/// Moves the product at `from` so that it ends up at index `to`.
pub fn reorder_product(catalog: &Catalog, from: usize, to: usize) -> CatalogResult<Catalog> {
    let len = catalog.products.len();
    if from >= len || to >= len {
        return Err(IndexError { from, to, len }.into());
    }

    let mut next = catalog.clone();
    let item = next.products.remove(from);
    next.products.insert(to, item);
    Ok(next)
}

pub fn add_category(catalog: &Catalog, name: &str) -> Catalog {
    let name = name.trim();
    let mut next = catalog.clone();
    if !name.is_empty() && !catalog.has_category(name) {
        next.categories.push(name.to_string());
    }
    next
}

/// Renames `old_name` in place and moves its products along with it.
///
/// Unchanged when `new_name` trims to empty, names another existing category,
/// or `old_name` is unknown.
pub fn rename_category(catalog: &Catalog, old_name: &str, new_name: &str) -> Catalog {
    let new_name = new_name.trim();
    let Some(index) = catalog.categories.iter().position(|c| c == old_name) else {
        return catalog.clone();
    };
    if new_name.is_empty() || new_name == old_name || catalog.has_category(new_name) {
        return catalog.clone();
    }

    let mut next = catalog.clone();
    next.categories[index] = new_name.to_string();
    for product in next.products.iter_mut().filter(|p| p.category == old_name) {
        product.category = new_name.to_string();
    }
    next
}

/// Removes `name`; its products become uncategorized rather than deleted.
pub fn delete_category(catalog: &Catalog, name: &str) -> Catalog {
    if !catalog.has_category(name) {
        return catalog.clone();
    }

    let mut next = catalog.clone();
    next.categories.retain(|c| c != name);
    for product in next.products.iter_mut().filter(|p| p.category == name) {
        product.category.clear();
    }
    next
}
