//! The grocery list core: history, view parameters and persistence behind one
//! set of entry points for the presentation layer.

use crate::catalog;
use crate::config::{
    default_categories, SessionOptions, CATEGORIES_KEY, FILTER_CATEGORY_KEY, PRODUCTS_KEY, SEARCH_TERM_KEY,
    SORT_BY_KEY,
};
use crate::error::CatalogResult;
use crate::history::History;
use crate::projection::{project, used_categories};
use crate::state::{Catalog, Product, ProductDraft, ProductId, ProductStamp, SortKey, ViewParameters};
use crate::storage::{load, load_entries, save, KeyValueStore};
use serde::Serialize;

/// Everything the presentation layer renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ListView {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub can_undo: bool,
    pub can_redo: bool,
}

pub struct GrocerySession<S> {
    history: History<Catalog>,
    view: ViewParameters,
    store: S,
    save_pending: bool,
}

impl<S: KeyValueStore> GrocerySession<S> {
    /// Restores the previous session from `store`, falling back to defaults
    /// for anything missing or unreadable.
    pub fn load(store: S, options: SessionOptions) -> Self {
        let products: Vec<Product> = load_entries(&store, PRODUCTS_KEY).unwrap_or_default();
        let categories: Vec<String> = load(&store, CATEGORIES_KEY).unwrap_or_else(default_categories);
        let catalog = Catalog::reconciled(products, categories);

        let view = ViewParameters {
            search_term: load(&store, SEARCH_TERM_KEY).unwrap_or_default(),
            filter_category: load(&store, FILTER_CATEGORY_KEY).unwrap_or_default(),
            sort_key: load(&store, SORT_BY_KEY).unwrap_or_default(),
        };

        tracing::info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            sort = view.sort_key.as_str(),
            "session loaded"
        );

        Self::new(store, catalog, view, options)
    }

    pub fn new(store: S, catalog: Catalog, view: ViewParameters, options: SessionOptions) -> Self {
        Self {
            history: History::with_limit(catalog, options.history_limit),
            view,
            store,
            save_pending: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.history.current()
    }

    pub fn history(&self) -> &History<Catalog> {
        &self.history
    }

    pub fn view_parameters(&self) -> &ViewParameters {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the most recent catalog write failed and has not yet been
    /// superseded by a successful one.
    pub fn save_pending(&self) -> bool {
        self.save_pending
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn projected(&self) -> Vec<Product> {
        project(self.catalog(), &self.view).into_iter().cloned().collect()
    }

    pub fn used_categories(&self) -> Vec<String> {
        used_categories(self.catalog()).into_iter().map(str::to_owned).collect()
    }

    pub fn list_view(&self) -> ListView {
        ListView {
            products: self.projected(),
            categories: self.catalog().categories.clone(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    pub fn add_product(&mut self, draft: &ProductDraft) -> CatalogResult<ProductId> {
        self.add_product_stamped(draft, ProductStamp::now())
    }

    pub fn add_product_stamped(&mut self, draft: &ProductDraft, stamp: ProductStamp) -> CatalogResult<ProductId> {
        let id = stamp.id.clone();
        let next = catalog::add_product(self.catalog(), draft, stamp)?;
        self.apply("add_product", next);
        Ok(id)
    }

    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        let next = catalog::delete_product(self.catalog(), id);
        self.apply("delete_product", next)
    }

    pub fn reorder_product(&mut self, from: usize, to: usize) -> CatalogResult<bool> {
        match catalog::reorder_product(self.catalog(), from, to) {
            Ok(next) => Ok(self.apply("reorder_product", next)),
            Err(err) => {
                tracing::warn!(%err, "refusing reorder");
                Err(err)
            }
        }
    }

    /// Moves `dragged` to the catalog slot currently held by `target`.
    ///
    /// Works on ids because the displayed list may be filtered. Unknown ids
    /// leave the catalog untouched.
    pub fn move_product(&mut self, dragged: &ProductId, target: &ProductId) -> bool {
        let catalog = self.catalog();
        let (Some(from), Some(to)) = (catalog.position(dragged), catalog.position(target)) else {
            tracing::debug!(%dragged, %target, "move with unknown product ignored");
            return false;
        };
        self.reorder_product(from, to).unwrap_or(false)
    }

    pub fn add_category(&mut self, name: &str) -> bool {
        let next = catalog::add_category(self.catalog(), name);
        self.apply("add_category", next)
    }

    pub fn rename_category(&mut self, old_name: &str, new_name: &str) -> bool {
        let next = catalog::rename_category(self.catalog(), old_name, new_name);
        let changed = self.apply("rename_category", next);
        if changed && self.view.filter_category == old_name {
            self.set_filter_category(new_name.trim());
        }
        changed
    }

    pub fn delete_category(&mut self, name: &str) -> bool {
        let next = catalog::delete_category(self.catalog(), name);
        let changed = self.apply("delete_category", next);
        if changed && self.view.filter_category == name {
            self.set_filter_category("");
        }
        changed
    }

    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            tracing::debug!(past = self.history.past().len(), "undo");
            self.persist_catalog();
            self.drop_stale_filter();
        }
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            tracing::debug!(past = self.history.past().len(), "redo");
            self.persist_catalog();
            self.drop_stale_filter();
        }
        moved
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
        self.persist_view(SEARCH_TERM_KEY, &self.view.search_term);
    }

    pub fn set_filter_category(&mut self, category: impl Into<String>) {
        self.view.filter_category = category.into();
        self.persist_view(FILTER_CATEGORY_KEY, &self.view.filter_category);
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.view.sort_key = sort_key;
        self.persist_view(SORT_BY_KEY, &sort_key);
    }

    /// Commits `next` unless it equals the present snapshot.
    fn apply(&mut self, action: &'static str, next: Catalog) -> bool {
        if next == *self.history.current() {
            tracing::debug!(action, "no change, nothing committed");
            return false;
        }

        self.history.commit(next);
        tracing::debug!(action, past = self.history.past().len(), "committed");
        self.persist_catalog();
        true
    }

    /// Clears a filter naming a category the restored snapshot no longer has.
    fn drop_stale_filter(&mut self) {
        let filter = &self.view.filter_category;
        if !filter.is_empty() && !self.catalog().has_category(filter) {
            tracing::debug!(filter = %filter, "filter category gone after history move, clearing");
            self.set_filter_category("");
        }
    }

    fn persist_catalog(&mut self) {
        let catalog = self.history.current();
        let result = save(&self.store, PRODUCTS_KEY, &catalog.products)
            .and_then(|()| save(&self.store, CATEGORIES_KEY, &catalog.categories));

        match result {
            Ok(()) => {
                if self.save_pending {
                    tracing::info!("catalog saved after earlier failure");
                }
                self.save_pending = false;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to save catalog, keeping in-memory state");
                self.save_pending = true;
            }
        }
    }

    fn persist_view<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = save(&self.store, key, value) {
            tracing::warn!(key, %err, "failed to save view setting");
        }
    }
}
