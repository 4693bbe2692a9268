//! Product catalog module.
//!
//! Contains types for products, comments, and the category hierarchy.

mod category;
mod product;
mod review;

pub use category::{Category, CategorySelection, ProductCategory};
pub use product::Product;
pub use review::{derived_rating, Comment};
