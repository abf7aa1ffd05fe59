use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque product identity. Assigned once at creation and never changed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Name of a category in [`Catalog::categories`], or `""` for uncategorized.
    #[serde(default)]
    pub category: String,
    pub quantity: u32,
    pub date_added: DateTime<Utc>,
}

impl Product {
    pub fn is_uncategorized(&self) -> bool {
        self.category.is_empty()
    }
}

/// Unvalidated user input for a new product, as typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub quantity: i64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
        }
    }
}

/// Identity and creation time handed to a new product.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductStamp {
    pub id: ProductId,
    pub date_added: DateTime<Utc>,
}

impl ProductStamp {
    pub fn new(id: ProductId, date_added: DateTime<Utc>) -> Self {
        Self { id, date_added }
    }

    pub fn now() -> Self {
        Self {
            id: ProductId::generate(),
            date_added: Utc::now(),
        }
    }
}

/// One historized snapshot: the products and the categories they may reference.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Builds a catalog from independently stored parts.
    ///
    /// Category names are trimmed, blanks and repeats dropped (first copy
    /// wins), and any category a product references but the list lacks is
    /// appended.
    pub fn reconciled(mut products: Vec<Product>, categories: Vec<String>) -> Self {
        let mut known: Vec<String> = Vec::with_capacity(categories.len());
        for name in categories {
            let name = name.trim();
            if !name.is_empty() && !known.iter().any(|c| c == name) {
                known.push(name.to_string());
            }
        }
        for product in &mut products {
            let trimmed = product.category.trim();
            if trimmed.len() != product.category.len() {
                product.category = trimmed.to_string();
            }
        }

        let mut catalog = Self::new(products, known);
        let missing: Vec<String> = catalog
            .dangling_categories()
            .into_iter()
            .map(str::to_owned)
            .collect();
        catalog.categories.extend(missing);
        catalog
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| &p.id == id)
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct product categories that are neither `""` nor a known
    /// category, in first-seen order. Empty whenever the catalog is consistent.
    /// Scans every product.
    pub fn dangling_categories(&self) -> Vec<&str> {
        let mut dangling: Vec<&str> = Vec::new();
        for product in &self.products {
            let category = product.category.as_str();
            if !category.is_empty() && !self.has_category(category) && !dangling.contains(&category) {
                dangling.push(category);
            }
        }
        dangling
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Name,
    Category,
    #[serde(alias = "date")]
    DateAdded,
    /// Catalog order, as arranged by drag and drop.
    Manual,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Category,
        SortKey::DateAdded,
        SortKey::Manual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::DateAdded => "dateAdded",
            SortKey::Manual => "manual",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Sort by Name",
            SortKey::Category => "Sort by Category",
            SortKey::DateAdded => "Sort by Date Added",
            SortKey::Manual => "Manual order",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortKey::Name),
            "category" => Some(SortKey::Category),
            "dateAdded" | "date" => Some(SortKey::DateAdded),
            "manual" => Some(SortKey::Manual),
            _ => None,
        }
    }
}

/// Transient display settings. Persisted, but never part of undo history.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewParameters {
    pub search_term: String,
    pub filter_category: String,
    pub sort_key: SortKey,
}
