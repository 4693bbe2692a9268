//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No session is stored.
    #[error("session not found")]
    SessionNotFound,

    /// Session expired.
    #[error("session expired")]
    SessionExpired,

    /// The session belongs to a guest.
    #[error("not signed in")]
    NotAuthenticated,

    /// Email address rejected.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AuthError::SessionNotFound | AuthError::SessionExpired | AuthError::NotAuthenticated
        )
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::Serialization(err.to_string())
    }
}
