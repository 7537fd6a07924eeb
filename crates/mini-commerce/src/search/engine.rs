//! Filter and sort over a product slice.

use std::cmp::Reverse;

use tracing::debug;

use crate::catalog::Product;
use crate::search::{QueryParams, SortMode};

/// Derive the displayed product list from a catalog.
///
/// Filters by title text (case-insensitive substring) and category, then
/// sorts by price. Both sorts are stable, so products with equal prices keep
/// their catalog order. The input is never modified and an empty result is a
/// valid answer.
pub fn query(catalog: &[Product], params: &QueryParams) -> Vec<Product> {
    let needle = params.search_text.to_lowercase();

    let mut items: Vec<Product> = catalog
        .iter()
        .filter(|p| needle.is_empty() || p.title_contains(&needle))
        .filter(|p| params.category.matches(p.category))
        .cloned()
        .collect();

    match params.sort {
        SortMode::None => {}
        SortMode::PriceAsc => items.sort_by_key(|p| p.price),
        SortMode::PriceDesc => items.sort_by_key(|p| Reverse(p.price)),
    }

    debug!(
        search = %params.search_text,
        category = %params.category,
        sort = %params.sort,
        matched = items.len(),
        total = catalog.len(),
        "catalog query"
    );

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};

    fn titles(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_default_params_return_catalog_order() {
        let catalog = Catalog::builtin();
        let items = query(catalog.products(), &QueryParams::new());
        assert_eq!(
            titles(&items),
            vec!["Laptop", "Phone", "Shoes", "Watch", "Chair", "Table"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let items = query(catalog.products(), &QueryParams::new().with_search("sh"));
        assert_eq!(titles(&items), vec!["Shoes"]);

        let items = query(catalog.products(), &QueryParams::new().with_search("TAB"));
        assert_eq!(titles(&items), vec!["Table"]);
    }

    #[test]
    fn test_search_ignores_category_and_price() {
        let catalog = Catalog::builtin();
        assert!(query(catalog.products(), &QueryParams::new().with_search("fashion")).is_empty());
        assert!(query(catalog.products(), &QueryParams::new().with_search("2000")).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::builtin();
        let items = query(
            catalog.products(),
            &QueryParams::new().with_category(Category::Furniture),
        );
        assert_eq!(titles(&items), vec!["Chair", "Table"]);
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = Catalog::builtin();
        let asc = query(
            catalog.products(),
            &QueryParams::new().with_sort(SortMode::PriceAsc),
        );
        assert_eq!(
            titles(&asc),
            vec!["Chair", "Shoes", "Table", "Watch", "Phone", "Laptop"]
        );

        let desc = query(
            catalog.products(),
            &QueryParams::new().with_sort(SortMode::PriceDesc),
        );
        assert_eq!(
            titles(&desc),
            vec!["Laptop", "Phone", "Watch", "Table", "Shoes", "Chair"]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let products = vec![
            Product::new(1, "Red Mug", 500, Category::Furniture, 1),
            Product::new(2, "Blue Mug", 300, Category::Furniture, 1),
            Product::new(3, "Green Mug", 500, Category::Furniture, 1),
            Product::new(4, "Gray Mug", 300, Category::Furniture, 1),
        ];

        let asc = query(&products, &QueryParams::new().with_sort(SortMode::PriceAsc));
        assert_eq!(titles(&asc), vec!["Blue Mug", "Gray Mug", "Red Mug", "Green Mug"]);

        let desc = query(&products, &QueryParams::new().with_sort(SortMode::PriceDesc));
        assert_eq!(titles(&desc), vec!["Red Mug", "Green Mug", "Blue Mug", "Gray Mug"]);
    }

    #[test]
    fn test_filters_compose() {
        let catalog = Catalog::builtin();
        let params = QueryParams::new()
            .with_search("a")
            .with_category(Category::Electronics)
            .with_sort(SortMode::PriceAsc);
        let items = query(catalog.products(), &params);
        assert_eq!(titles(&items), vec!["Laptop"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::builtin();
        let params = QueryParams::new()
            .with_search("shoe")
            .with_category(Category::Electronics);
        assert!(query(catalog.products(), &params).is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let catalog = Catalog::builtin();
        let before = catalog.clone();
        let _ = query(
            catalog.products(),
            &QueryParams::new().with_sort(SortMode::PriceDesc),
        );
        assert_eq!(catalog, before);
    }
}
