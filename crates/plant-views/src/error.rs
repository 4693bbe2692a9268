//! Controller errors.

use plant_commerce::CommerceError;
use plant_data::FetchError;
use thiserror::Error;

use crate::form::FormError;

/// Why a controller operation did not complete.
///
/// The user-facing notice has already been sent through the notifier port
/// when one of these is returned; the value is for callers that want the
/// cause.
#[derive(Error, Debug)]
pub enum ViewError {
    /// A backend request failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The product form has empty or malformed fields.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The cart rejected the item.
    #[error(transparent)]
    Cart(#[from] CommerceError),

    /// Add-to-cart without a signed-in session.
    #[error("sign-in required")]
    LoginRequired,

    /// No product has been loaded yet.
    #[error("no product loaded")]
    NoProduct,

    /// No product with this id in the loaded list.
    #[error("unknown product: {0}")]
    UnknownProduct(String),
}

impl ViewError {
    /// Check if the backend reported a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ViewError::Fetch(e) if e.is_not_found())
    }
}
