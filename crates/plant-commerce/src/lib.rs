//! Domain types and pure derivations for the plant storefront.
//!
//! This crate holds everything the view controllers compute without touching
//! the network:
//!
//! - **Catalog**: products, comments, the two-level category hierarchy
//! - **Orders**: order line items and the units-sold aggregate
//! - **Search**: name search, related-product selection, sorting, pagination
//! - **Cart**: the in-memory cart behind the add-to-cart port
//!
//! # Example
//!
//! ```rust
//! use plant_commerce::prelude::*;
//!
//! let rose = Product::new("1", "Rose", Price::new(10_000));
//! let lily = Product::new("2", "Lily", Price::new(20_000));
//! let orders = vec![Order::new("o1", vec![OrderLine::new("1", 3)])];
//!
//! assert_eq!(units_sold(&rose.id, &orders), 3);
//! assert_eq!(units_sold(&lily.id, &orders), 0);
//!
//! let found = search_by_name(&[rose, lily], "ro");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].id.as_str(), "1");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Price;

    // Catalog
    pub use crate::catalog::{
        derived_rating, Category, CategorySelection, Comment, Product, ProductCategory,
    };

    // Orders
    pub use crate::orders::{units_sold, Order, OrderLine, SalesIndex};

    // Search
    pub use crate::search::{
        related_products, search_by_name, window, Pagination, SortDirection, SortKey, SortSpec,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
}
