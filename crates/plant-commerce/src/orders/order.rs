//! Order types.

use crate::ids::{OrderId, ProductId};
use serde::{Deserialize, Serialize};

/// A placed order, as served by `/orders`.
///
/// The backend nests line items under `products`; `items` is accepted too.
/// Other order fields (customer, status, totals) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Order {
    /// Order identifier.
    pub id: OrderId,
    /// Line items in the order.
    #[serde(rename = "products", alias = "items", default)]
    pub items: Vec<OrderLine>,
}

impl Order {
    /// Create an order with the given line items.
    pub fn new(id: impl Into<OrderId>, items: Vec<OrderLine>) -> Self {
        Self {
            id: id.into(),
            items,
        }
    }
}

/// A line item referencing a product by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrderLine {
    /// Referenced product.
    #[serde(rename = "id", alias = "productId")]
    pub product_id: ProductId,
    /// Units ordered.
    #[serde(default)]
    pub quantity: u64,
}

impl OrderLine {
    /// Create a line item.
    pub fn new(product_id: impl Into<ProductId>, quantity: u64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "id": "o1",
            "customer": "An",
            "products": [{"id": "1", "quantity": 3, "name": "Rose"}, {"id": "2", "quantity": 1}]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product_id.as_str(), "1");
        assert_eq!(order.items[1].quantity, 1);
    }

    #[test]
    fn test_deserialize_alias_shape() {
        let json = r#"{"id": "o2", "items": [{"productId": "9", "quantity": 2}]}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.items, vec![OrderLine::new("9", 2)]);
    }

    #[test]
    fn test_missing_items_is_empty() {
        let order: Order = serde_json::from_str(r#"{"id": "o3"}"#).unwrap();
        assert!(order.items.is_empty());
    }
}
