//! Common imports for most Parley applications.

pub use crate::{
    ApiClient, AuthStore, AuthToken, BoxFuture, ChatMessage, CheckId, ClientContext, FetchError,
    FetchErrorKind, HttpTransport, MessageId, MessageStore, MetadataMap, MultipartForm, Outcome,
    RequestBody, RequestDescriptor, ResolverHooks, ResponseResolver, Sender,
};
pub use crate::{bot_message, get, parse_sender, post_json, user_message};
pub use crate::{build_client, build_client_with, observed_hooks};
pub use crate::{chat_messages, chat_msg};
