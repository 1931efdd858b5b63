//! Client session state: the current auth token and the chat transcript.
//!
//! Both stores are plain values constructed by the application and shared
//! by handle (`Arc`). Each one is backed by a `tokio::sync::watch` channel so
//! views can await changes instead of polling.

mod auth;
mod messages;
mod types;

pub mod prelude {
    pub use crate::{
        AuthStore, AuthToken, ChatMessage, MessageLog, MessageStore, Sender, Transcript, Upsert,
    };
    pub use pcommon::{CheckId, MessageId, MetadataMap};
}

pub use auth::AuthStore;
pub use messages::{MessageLog, MessageStore, Transcript, Upsert};
pub use pcommon::{CheckId, MessageId, MetadataMap};
pub use types::{AuthToken, ChatMessage, Sender};
