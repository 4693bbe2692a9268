//! Observability for the plant storefront.
//!
//! This crate provides:
//! - `init_logging` - installs the `tracing` subscriber (human or JSON)
//! - `FetchTimer` - elapsed-time logging around backend calls

mod logging;
mod timing;

pub use logging::*;
pub use timing::*;
