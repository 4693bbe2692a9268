//! Side-effect ports injected into the controllers.

use std::sync::Arc;

use plant_commerce::prelude::*;

use crate::adapters::{NoopBusy, RecordingNavigator, RecordingNotifier, SessionAuth, SharedCart};

/// Whether the current user is signed in.
pub trait AuthStatus: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// Where add-to-cart puts items.
pub trait CartPort: Send + Sync {
    fn add_to_cart(&self, product: &Product, quantity: u64) -> Result<(), CommerceError>;
}

/// Loading indicator, raised while a request is in flight.
pub trait BusySignal: Send + Sync {
    fn set_busy(&self, busy: bool);
}

/// Toast-style notices.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Route changes, e.g. to the login page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// The ports a controller talks to.
///
/// `Ports::default()` is a detached bundle: a guest session, an empty
/// in-memory cart, no busy indicator and recording notifier and navigator.
#[derive(Clone)]
pub struct Ports {
    pub auth: Arc<dyn AuthStatus>,
    pub cart: Arc<dyn CartPort>,
    pub busy: Arc<dyn BusySignal>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

impl Ports {
    pub fn with_auth(mut self, auth: Arc<dyn AuthStatus>) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_cart(mut self, cart: Arc<dyn CartPort>) -> Self {
        self.cart = cart;
        self
    }

    pub fn with_busy(mut self, busy: Arc<dyn BusySignal>) -> Self {
        self.busy = busy;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }
}

impl Default for Ports {
    fn default() -> Self {
        Self {
            auth: Arc::new(SessionAuth::guest()),
            cart: Arc::new(SharedCart::default()),
            busy: Arc::new(NoopBusy),
            notifier: Arc::new(RecordingNotifier::default()),
            navigator: Arc::new(RecordingNavigator::default()),
        }
    }
}

impl std::fmt::Debug for Ports {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ports")
            .field("authenticated", &self.auth.is_authenticated())
            .finish_non_exhaustive()
    }
}

/// Raises the busy signal and lowers it again when dropped, so early returns
/// cannot leave the indicator on.
pub(crate) struct BusyGuard<'a>(&'a dyn BusySignal);

impl<'a> BusyGuard<'a> {
    pub(crate) fn raise(signal: &'a dyn BusySignal) -> Self {
        signal.set_busy(true);
        Self(signal)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set_busy(false);
    }
}
