//! Reactive holder for the current authentication token.
//!
//! ```rust
//! use pstate::AuthStore;
//!
//! let store = AuthStore::new();
//! assert!(store.get().is_none());
//!
//! store.set_token("abc");
//! assert_eq!(store.get().map(|token| token.expose().to_string()), Some("abc".to_string()));
//!
//! store.set(None);
//! assert!(!store.is_authenticated());
//! ```

use tokio::sync::watch;

use crate::AuthToken;

#[derive(Debug)]
pub struct AuthStore {
    token: watch::Sender<Option<AuthToken>>,
}

impl Default for AuthStore {
    fn default() -> Self {
        let (token, _) = watch::channel(None);
        Self { token }
    }
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<AuthToken>) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }

    pub fn get(&self) -> Option<AuthToken> {
        self.token.borrow().clone()
    }

    pub fn set(&self, token: Option<AuthToken>) {
        self.token.send_replace(token);
    }

    pub fn set_token(&self, token: impl Into<AuthToken>) {
        self.set(Some(token.into()));
    }

    pub fn clear(&self) {
        self.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Receiver that observes every subsequent `set`.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthToken>> {
        self.token.subscribe()
    }
}
