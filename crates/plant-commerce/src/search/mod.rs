//! Search module.
//!
//! Client-side filtering, ordering and paging over fully materialized lists.

mod filter;
mod results;
mod sort;

pub use filter::{matches_name, related_products, search_by_name};
pub use results::{page_count, window, Pagination};
pub use sort::{collate, collation_key, SortDirection, SortKey, SortSpec};
