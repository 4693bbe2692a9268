//! Shopping cart module.
//!
//! The cart behind the storefront's add-to-cart action.

mod cart;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
