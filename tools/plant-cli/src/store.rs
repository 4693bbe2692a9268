//! Session and cart files in the user data directory.

use std::path::Path;

use anyhow::{Context, Result};
use plant_auth::AuthSession;
use plant_commerce::cart::Cart;
use tracing::debug;

/// The stored session, or `None` when signed out.
pub fn load_session(path: &Path) -> Result<Option<AuthSession>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session: {}", path.display()))?;
    let session = AuthSession::from_json(&content)
        .with_context(|| format!("Corrupt session file: {}", path.display()))?;
    debug!(session = %session.id, expired = session.is_expired(), "session loaded");
    Ok(Some(session))
}

pub fn save_session(path: &Path, session: &AuthSession) -> Result<()> {
    std::fs::write(path, session.to_json()?)
        .with_context(|| format!("Failed to write session: {}", path.display()))
}

/// Remove the stored session. Returns whether there was one.
pub fn clear_session(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(path)
        .with_context(|| format!("Failed to remove session: {}", path.display()))?;
    Ok(true)
}

/// The stored cart, empty when there is none yet.
pub fn load_cart(path: &Path) -> Result<Cart> {
    if !path.exists() {
        return Ok(Cart::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cart: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Corrupt cart file: {}", path.display()))
}

pub fn save_cart(path: &Path, cart: &Cart) -> Result<()> {
    let content = serde_json::to_string_pretty(cart)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write cart: {}", path.display()))
}
