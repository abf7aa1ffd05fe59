//! Filtered and sorted views of a catalog snapshot. Nothing here mutates.

use crate::state::{Catalog, Product, SortKey, ViewParameters};
use std::cmp::Ordering;

/// Products matching `params`, ordered by its sort key.
///
/// The sort is stable, so products that compare equal keep catalog order.
pub fn project<'a>(catalog: &'a Catalog, params: &ViewParameters) -> Vec<&'a Product> {
    let needle = params.search_term.to_lowercase();

    let mut products: Vec<&Product> = catalog
        .products
        .iter()
        .filter(|p| params.filter_category.is_empty() || p.category == params.filter_category)
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect();

    match params.sort_key {
        SortKey::Name => products.sort_by(|a, b| collate(&a.name, &b.name)),
        SortKey::Category => products.sort_by(|a, b| collate(&a.category, &b.category)),
        // Newest first
        SortKey::DateAdded => products.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        SortKey::Manual => {}
    }

    products
}

/// Categories used by at least one product, in first-seen order.
///
/// Unlike [`Catalog::categories`] this omits unused categories and the
/// uncategorized sentinel.
pub fn used_categories(catalog: &Catalog) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for product in &catalog.products {
        let category = product.category.as_str();
        if !category.is_empty() && !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Case-insensitive ordering of display strings.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProductId;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn product(id: &str, name: &str, category: &str, minute: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            quantity: 1,
            date_added: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap() + Duration::minutes(minute),
        }
    }

    fn catalog(products: Vec<Product>) -> Catalog {
        Catalog::reconciled(products, Vec::new())
    }

    fn params(search: &str, filter: &str, sort_key: SortKey) -> ViewParameters {
        ViewParameters {
            search_term: search.to_string(),
            filter_category: filter.to_string(),
            sort_key,
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn sample() -> Catalog {
        catalog(vec![
            product("a", "banana", "Fruits", 0),
            product("b", "Milk", "Dairy", 1),
            product("c", "Apple", "Fruits", 2),
            product("d", "yogurt", "Dairy", 3),
            product("e", "Cherry", "Fruits", 4),
        ])
    }

    mod sort_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn date_added_is_newest_first() {
            let c = catalog(vec![
                product("A", "A", "", 0),
                product("B", "B", "", 1),
                product("C", "C", "", 2),
            ]);
            let out = project(&c, &params("", "", SortKey::DateAdded));
            assert_eq!(ids(&out), vec!["C", "B", "A"]);
        }

        #[test]
        fn name_ignores_case() {
            let c = sample();
            let out = project(&c, &params("", "", SortKey::Name));
            assert_eq!(ids(&out), vec!["c", "a", "e", "b", "d"]);
        }

        #[test]
        fn category_is_stable_within_ties() {
            let c = sample();
            let out = project(&c, &params("", "", SortKey::Category));
            assert_eq!(ids(&out), vec!["b", "d", "a", "c", "e"]);
        }

        #[test]
        fn manual_keeps_catalog_order() {
            let c = sample();
            let out = project(&c, &params("", "", SortKey::Manual));
            assert_eq!(ids(&out), vec!["a", "b", "c", "d", "e"]);
        }

        #[test]
        fn uncategorized_sorts_first_by_category() {
            let c = catalog(vec![product("x", "Salt", "Spices", 0), product("y", "Tea", "", 1)]);
            let out = project(&c, &params("", "", SortKey::Category));
            assert_eq!(ids(&out), vec!["y", "x"]);
        }
    }

    mod filter_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn filter_category_keeps_only_matches_in_order() {
            let c = sample();
            let out = project(&c, &params("", "Fruits", SortKey::Manual));
            assert_eq!(ids(&out), vec!["a", "c", "e"]);

            let out = project(&c, &params("", "Fruits", SortKey::Name));
            assert_eq!(ids(&out), vec!["c", "a", "e"]);
        }

        #[test]
        fn search_is_case_insensitive_substring() {
            let c = sample();
            let out = project(&c, &params("AN", "", SortKey::Manual));
            assert_eq!(ids(&out), vec!["a"]);

            let out = project(&c, &params("r", "", SortKey::Manual));
            assert_eq!(ids(&out), vec!["d", "e"]);
        }

        #[test]
        fn search_and_filter_combine() {
            let c = sample();
            let out = project(&c, &params("y", "Dairy", SortKey::Manual));
            assert_eq!(ids(&out), vec!["d"]);
        }

        #[test]
        fn unknown_filter_yields_nothing() {
            let c = sample();
            assert!(project(&c, &params("", "Snacks", SortKey::Name)).is_empty());
        }

        #[test]
        fn empty_catalog_projects_empty() {
            assert!(project(&Catalog::default(), &ViewParameters::default()).is_empty());
        }
    }

    mod used_categories_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn first_seen_order_without_duplicates() {
            assert_eq!(used_categories(&sample()), vec!["Fruits", "Dairy"]);
        }

        #[test]
        fn differs_from_known_categories() {
            let mut c = sample();
            c.categories.push("Frozen".to_string());
            c.products.push(product("f", "Salt", "", 9));
            assert_eq!(used_categories(&c), vec!["Fruits", "Dairy"]);
            assert!(c.has_category("Frozen"));
        }
    }

    #[test]
    fn collate_orders_case_insensitively() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Apple", "apple"), Ordering::Equal);
        assert_eq!(collate("", "a"), Ordering::Less);
    }

    proptest! {
        #[test]
        fn projection_is_deterministic_and_sorted(
            entries in proptest::collection::vec(("[a-cA-C]{1,3}", 0usize..3, 0i64..5), 0..30),
            key in prop_oneof![
                Just(SortKey::Name),
                Just(SortKey::Category),
                Just(SortKey::DateAdded),
                Just(SortKey::Manual),
            ]
        ) {
            let cats = ["Fruits", "Dairy", ""];
            let products = entries
                .iter()
                .enumerate()
                .map(|(i, (name, cat, minute))| product(&i.to_string(), name, cats[*cat], *minute))
                .collect();
            let c = catalog(products);
            let p = params("", "", key);

            let first = project(&c, &p);
            let second = project(&c, &p);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), c.products.len());

            // Ties must keep catalog order
            let position = |prod: &Product| c.position(&prod.id).unwrap();
            for pair in first.windows(2) {
                let ordering = match key {
                    SortKey::Name => collate(&pair[0].name, &pair[1].name),
                    SortKey::Category => collate(&pair[0].category, &pair[1].category),
                    SortKey::DateAdded => pair[1].date_added.cmp(&pair[0].date_added),
                    SortKey::Manual => Ordering::Equal,
                };
                prop_assert_ne!(ordering, Ordering::Greater);
                if ordering == Ordering::Equal {
                    prop_assert!(position(pair[0]) < position(pair[1]));
                }
            }
        }
    }
}
