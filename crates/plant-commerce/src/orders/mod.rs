//! Orders module.
//!
//! Orders are read-only here: the admin screen only aggregates them into
//! per-product sales figures.

mod order;
mod sales;

pub use order::{Order, OrderLine};
pub use sales::{units_sold, SalesIndex};
