//! Units-sold aggregation over orders.

use std::collections::HashMap;

use crate::ids::ProductId;
use crate::orders::Order;

/// Sum of the quantities of every line item referencing `product_id`, across
/// all orders. Zero when the product was never ordered; saturates at
/// `u64::MAX` like [`SalesIndex`].
pub fn units_sold(product_id: &ProductId, orders: &[Order]) -> u64 {
    orders
        .iter()
        .flat_map(|order| order.items.iter())
        .filter(|line| &line.product_id == product_id)
        .fold(0u64, |total, line| total.saturating_add(line.quantity))
}

/// Precomputed units sold per product.
///
/// Sorting a table by sales calls the lookup O(n log n) times, so the totals
/// are folded once per order load instead of rescanning every order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesIndex {
    totals: HashMap<ProductId, u64>,
}

impl SalesIndex {
    /// Build the index from a set of orders.
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut totals: HashMap<ProductId, u64> = HashMap::new();
        for line in orders.iter().flat_map(|o| o.items.iter()) {
            let entry = totals.entry(line.product_id.clone()).or_default();
            *entry = entry.saturating_add(line.quantity);
        }
        Self { totals }
    }

    /// Units sold for a product.
    pub fn get(&self, product_id: &ProductId) -> u64 {
        self.totals.get(product_id).copied().unwrap_or(0)
    }
}
