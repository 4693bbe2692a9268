//! Product filters.

use crate::catalog::Product;

/// Whether the product's name contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn matches_name(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    product
        .name
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// The subsequence of `products` whose names contain `query`, ignoring case.
pub fn search_by_name(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The subsequence of `products` sharing a category level with `reference`.
///
/// The reference product itself is kept when it appears in `products`.
pub fn related_products(products: &[Product], reference: &Product) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.is_related_to(reference))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCategory;
    use crate::money::Price;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("1", "Rose", Price::new(10_000)),
            Product::new("2", "Lily", Price::new(20_000)),
            Product::new("3", "Desert Rose", Price::new(30_000)),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let found = search_by_name(&catalog(), "ro");
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let found = search_by_name(&catalog(), "LILY");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        assert_eq!(search_by_name(&catalog(), ""), catalog());
    }

    #[test]
    fn test_search_is_idempotent() {
        let products = catalog();
        assert_eq!(search_by_name(&products, "rose"), search_by_name(&products, "rose"));
    }

    #[test]
    fn test_matches_name() {
        let rose = Product::new("1", "Rose", Price::new(10_000));
        assert!(matches_name(&rose, "OS"));
        assert!(matches_name(&rose, ""));
        assert!(!matches_name(&rose, "lily"));
    }

    #[test]
    fn test_related_products_keep_order() {
        let indoor = |id: &str, lv1: Option<&str>| {
            Product::new(id, id, Price::zero())
                .with_category(ProductCategory::new("Indoor", lv1.map(String::from)))
        };
        let outdoor = Product::new("o", "o", Price::zero())
            .with_category(ProductCategory::new("Outdoor", Some("Fern".into())));
        let reference = indoor("ref", None);
        let products = vec![indoor("a", Some("Fern")), outdoor.clone(), indoor("b", None), reference.clone()];

        let related = related_products(&products, &reference);
        let ids: Vec<&str> = related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "ref"]);

        // Fern links the outdoor plant to "a" through lv1.
        let related = related_products(&products, &outdoor);
        let ids: Vec<&str> = related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "o"]);
    }
}
