//! User types.

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// The customer behind a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum User {
    /// Guest browsing without signing in.
    Guest,
    /// Signed-in customer.
    Customer {
        /// Email address.
        email: String,
        /// Display name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl User {
    /// Create a signed-in customer, rejecting obviously malformed emails.
    pub fn customer(email: impl Into<String>, name: Option<String>) -> Result<Self, AuthError> {
        let email = email.into().trim().to_string();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(AuthError::InvalidEmail(email));
        }
        Ok(User::Customer { email, name })
    }

    /// Check if user is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, User::Customer { .. })
    }

    /// Email address if signed in.
    pub fn email(&self) -> Option<&str> {
        match self {
            User::Customer { email, .. } => Some(email),
            User::Guest => None,
        }
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        match self {
            User::Customer {
                name: Some(name), ..
            } if !name.is_empty() => name,
            User::Customer { email, .. } => email,
            User::Guest => "guest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_email_validation() {
        assert!(User::customer("lan@example.vn", None).is_ok());
        assert!(matches!(
            User::customer("not-an-email", None),
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(User::customer("@example.vn", None).is_err());
    }

    #[test]
    fn test_display_name() {
        let named = User::customer("lan@example.vn", Some("Lan".into())).unwrap();
        let unnamed = User::customer("lan@example.vn", None).unwrap();
        assert_eq!(named.display_name(), "Lan");
        assert_eq!(unnamed.display_name(), "lan@example.vn");
        assert_eq!(User::Guest.display_name(), "guest");
        assert!(!User::Guest.is_authenticated());
    }
}
