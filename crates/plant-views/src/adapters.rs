//! Ready-made port implementations.

use std::sync::{Arc, Mutex, MutexGuard};

use plant_auth::AuthSession;
use plant_commerce::prelude::*;

use crate::ports::{AuthStatus, BusySignal, CartPort, Navigator, Notifier};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Auth status backed by a stored session.
#[derive(Debug, Clone, Default)]
pub struct SessionAuth {
    session: Option<AuthSession>,
}

impl SessionAuth {
    pub fn new(session: Option<AuthSession>) -> Self {
        Self { session }
    }

    /// No session at all.
    pub fn guest() -> Self {
        Self { session: None }
    }

    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }
}

impl AuthStatus for SessionAuth {
    fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(AuthSession::is_authenticated)
    }
}

/// An in-memory cart that can be shared with whoever persists it.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    cart: Arc<Mutex<Cart>>,
}

impl SharedCart {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// A copy of the current cart contents.
    pub fn snapshot(&self) -> Cart {
        lock(&self.cart).clone()
    }
}

impl CartPort for SharedCart {
    fn add_to_cart(&self, product: &Product, quantity: u64) -> Result<(), CommerceError> {
        lock(&self.cart).add_item(product, quantity)
    }
}

/// Ignores busy transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBusy;

impl BusySignal for NoopBusy {
    fn set_busy(&self, _busy: bool) {}
}

/// Keeps every busy transition in order.
#[derive(Debug, Default)]
pub struct RecordingBusy {
    transitions: Mutex<Vec<bool>>,
}

impl RecordingBusy {
    pub fn transitions(&self) -> Vec<bool> {
        lock(&self.transitions).clone()
    }

    /// True when the last transition lowered the signal (or none happened).
    pub fn is_idle(&self) -> bool {
        !lock(&self.transitions).last().copied().unwrap_or(false)
    }
}

impl BusySignal for RecordingBusy {
    fn set_busy(&self, busy: bool) {
        lock(&self.transitions).push(busy);
    }
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A notice sent through the notifier port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Keeps every notice in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        lock(&self.notices).clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.texts(NoticeKind::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.texts(NoticeKind::Success)
    }

    pub fn clear(&self) {
        lock(&self.notices).clear();
    }

    fn texts(&self, kind: NoticeKind) -> Vec<String> {
        lock(&self.notices)
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.text.clone())
            .collect()
    }

    fn push(&self, kind: NoticeKind, text: &str) {
        lock(&self.notices).push(Notice {
            kind,
            text: text.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(NoticeKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeKind::Error, message);
    }
}

/// Keeps every requested route in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        lock(&self.paths).clone()
    }

    pub fn last(&self) -> Option<String> {
        lock(&self.paths).last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        lock(&self.paths).push(path.to_string());
    }
}
