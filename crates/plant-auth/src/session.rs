//! Session management.

use crate::user::User;
use crate::AuthError;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a session ID from the current time.
    pub fn generate() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        Self(format!("sess_{nanos:x}"))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A storefront session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    /// Session ID.
    pub id: SessionId,
    /// Guest or signed-in customer.
    pub user: User,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp when the session expires.
    pub expires_at: i64,
}

impl AuthSession {
    /// Default session duration: 7 days.
    pub const DEFAULT_DURATION_SECS: i64 = 7 * 24 * 60 * 60;

    /// Create a guest session.
    pub fn guest() -> Self {
        Self::for_user(User::Guest)
    }

    /// Create a session for a signed-in customer.
    pub fn authenticated(user: User) -> Self {
        Self::for_user(user)
    }

    fn for_user(user: User) -> Self {
        let now = current_timestamp();
        Self {
            id: SessionId::generate(),
            user,
            created_at: now,
            expires_at: now + Self::DEFAULT_DURATION_SECS,
        }
    }

    /// Create session with custom duration.
    pub fn with_duration(mut self, duration_secs: i64) -> Self {
        self.expires_at = self.created_at + duration_secs;
        self
    }

    /// Check if session is expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Check if session is valid (not expired).
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }

    /// True for an unexpired session of a signed-in customer.
    pub fn is_authenticated(&self) -> bool {
        self.is_valid() && self.user.is_authenticated()
    }

    /// Validate the session, returning error if invalid.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.is_expired() {
            Err(AuthError::SessionExpired)
        } else if !self.user.is_authenticated() {
            Err(AuthError::NotAuthenticated)
        } else {
            Ok(())
        }
    }

    /// Get time until expiration in seconds.
    pub fn time_to_expiry(&self) -> i64 {
        (self.expires_at - current_timestamp()).max(0)
    }

    /// Serialize for storage.
    pub fn to_json(&self) -> Result<String, AuthError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a stored session.
    pub fn from_json(json: &str) -> Result<Self, AuthError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
