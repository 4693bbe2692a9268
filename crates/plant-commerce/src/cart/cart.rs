//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u64 = 9999;

/// A shopping cart. One line per product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart, in the order they were first added.
    pub items: Vec<CartLine>,
    /// Unix timestamp of last update.
    #[serde(default)]
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// Adding a product already in the cart increases that line's quantity.
    ///
    /// Returns an error if:
    /// - Quantity is zero
    /// - Adding would exceed MAX_QUANTITY_PER_ITEM
    /// - Arithmetic overflow would occur
    pub fn add_item(&mut self, product: &Product, quantity: u64) -> Result<(), CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            existing.update_total()?;
            self.updated_at = current_timestamp();
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(CartLine::new(product, quantity)?);
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Set the quantity of a line. Zero removes it.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u64,
    ) -> Result<(), CommerceError> {
        if quantity == 0 {
            return if self.remove_item(product_id) {
                Ok(())
            } else {
                Err(CommerceError::ItemNotInCart(product_id.to_string()))
            };
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| &i.product_id == product_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(product_id.to_string()))?;
        item.quantity = quantity;
        item.update_total()?;
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Remove a product's line from the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line for a product.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Result<Price, CommerceError> {
        Price::try_sum(self.items.iter().map(|i| &i.total_price)).ok_or(CommerceError::Overflow)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Cover image (denormalized for display).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Quantity.
    pub quantity: u64,
    /// Unit price at the time the product was added.
    pub unit_price: Price,
    /// Total price (unit_price * quantity).
    pub total_price: Price,
}

impl CartLine {
    /// Create a line item for a product.
    pub fn new(product: &Product, quantity: u64) -> Result<Self, CommerceError> {
        let total_price = product
            .price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            image: product.cover_image().map(str::to_string),
            quantity,
            unit_price: product.price,
            total_price,
        })
    }

    /// Update the total price based on quantity.
    pub fn update_total(&mut self) -> Result<(), CommerceError> {
        self.total_price = self
            .unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
