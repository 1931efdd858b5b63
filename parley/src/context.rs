//! Explicit handles to the session stores shared by a client.

use std::sync::Arc;

use pstate::{AuthStore, MessageStore};

/// Auth and message stores passed to whoever needs them, instead of
/// process-wide globals. Cloning shares the same stores.
#[derive(Debug, Clone, Default)]
pub struct ClientContext {
    pub auth: Arc<AuthStore>,
    pub messages: Arc<MessageStore>,
}

impl ClientContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stores(auth: Arc<AuthStore>, messages: Arc<MessageStore>) -> Self {
        Self { auth, messages }
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn messages(&self) -> &MessageStore {
        &self.messages
    }

    /// Signs out and drops the transcript.
    pub fn reset(&self) {
        self.auth.clear();
        self.messages.clear();
    }
}
