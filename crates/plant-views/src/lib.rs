//! View controllers for the plant storefront.
//!
//! Two independent controllers, each a fetch, derive and present cycle over
//! a [`StoreApi`](plant_data::StoreApi):
//!
//! - [`ProductManager`]: the admin product table (search, sort, paginate,
//!   create, update, delete, units sold per product)
//! - [`ProductDetail`]: one product page (rating, image gallery, quantity
//!   stepper, add-to-cart, related products paged by four)
//!
//! Side effects that a UI would perform through ambient state (toasts,
//! spinners, navigation, the session and the cart) go through the narrow
//! traits in [`ports`], bundled as [`Ports`].
//!
//! # Example
//!
//! ```rust,ignore
//! use plant_data::StoreClient;
//! use plant_views::{Ports, ProductManager};
//!
//! let client = StoreClient::new(10)?;
//! let mut manager = ProductManager::new(client, Ports::default());
//! manager.load_all().await?;
//! manager.search("ro");
//! for row in manager.rows() {
//!     println!("{} {} {}", row.index, row.product.name, row.units_sold);
//! }
//! ```

pub mod adapters;
pub mod admin;
pub mod detail;
pub mod error;
pub mod form;
pub mod messages;
pub mod ports;

#[cfg(test)]
mod fake;

pub use admin::{ProductManager, ProductRow, DEFAULT_PAGE_SIZE};
pub use detail::{
    DetailRequest, InfoRow, ProductDetail, LOGIN_PATH, RELATED_NAV_WINDOW, RELATED_PAGE_SIZE,
};
pub use error::ViewError;
pub use form::{FormError, FormField, ProductForm};
pub use messages::{Locale, Message};
pub use ports::{AuthStatus, BusySignal, CartPort, Navigator, Notifier, Ports};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::adapters::*;
    pub use crate::{
        FormError, Locale, Message, Ports, ProductDetail, ProductForm, ProductManager, ProductRow,
        ViewError,
    };
}
