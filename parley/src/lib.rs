//! Unified facade over the Parley workspace crates.
//!
//! Most applications only need this crate: it re-exports the HTTP resolver,
//! the session stores, and the observability hooks, and adds [`ApiClient`]
//! which ties them together.
//!
//! ```rust
//! use parley::{ClientContext, chat_messages};
//!
//! let context = ClientContext::new();
//! context.auth().set_token("token-123");
//! context.messages().append_all(chat_messages![
//!     user "1" => "hello",
//!     bot "2" => "hi, how can I help?",
//! ]);
//!
//! assert_eq!(context.messages().len(), 2);
//! context.reset();
//! assert!(!context.auth().is_authenticated());
//! ```

mod macros;

pub mod client;
pub mod context;
pub mod prelude;
pub mod runtime;
pub mod util;

pub use pcommon;
pub use phttp;
pub use pobserve;
pub use pstate;

pub use pcommon::{BoxFuture, CheckId, MessageId, MetadataMap};
#[cfg(feature = "reqwest-transport")]
pub use phttp::ReqwestTransport;
pub use phttp::{
    FetchError, FetchErrorKind, FormValue, HttpFuture, HttpTransport, MultipartForm,
    NoopResolverHooks, Outcome, PreparedRequest, RawResponse, RequestBody, RequestDescriptor,
    ResolverHooks, ResponseBody, ResponseResolver, ResponseResolverBuilder,
};
pub use pobserve::{
    FanoutResolverHooks, MetricsResolverHooks, SafeResolverHooks, TracingResolverHooks,
};
pub use pstate::{
    AuthStore, AuthToken, ChatMessage, MessageLog, MessageStore, Sender, Transcript, Upsert,
};

pub use client::ApiClient;
pub use context::ClientContext;
#[cfg(feature = "reqwest-transport")]
pub use runtime::{reqwest_client, reqwest_client_with};
pub use runtime::{build_client, build_client_with, observed_hooks};
pub use util::{bot_message, get, parse_sender, post_json, user_message};

#[cfg(test)]
mod tests {
    use crate::{MessageId, Sender};

    #[test]
    fn chat_msg_macro_creates_expected_message() {
        let message = crate::chat_msg!(user "1" => "hello");
        assert_eq!(message.sender, Sender::User);
        assert_eq!(message.id, MessageId::from("1"));
        assert_eq!(message.text, "hello");
    }

    #[test]
    fn chat_messages_macro_builds_message_vector() {
        let messages = crate::chat_messages![
            user "1" => "where is my order?",
            bot 2_u64 => "checking now",
        ];

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[1].id.as_str(), "2");
    }

    #[test]
    fn empty_chat_messages_macro_is_empty() {
        let messages = crate::chat_messages![];
        assert!(messages.is_empty());
    }
}
