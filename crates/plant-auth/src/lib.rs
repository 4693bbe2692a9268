//! Customer sessions for the plant storefront.
//!
//! The storefront only needs to know whether a customer is signed in before
//! an item may be added to the cart. [`AuthSession`] carries that state and
//! can be persisted as JSON between runs.

mod error;
mod session;
mod user;

pub use error::AuthError;
pub use session::{AuthSession, SessionId};
pub use user::User;
