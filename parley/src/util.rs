//! Small convenience constructors for common types.

use phttp::{FetchError, RequestDescriptor};
use pstate::{ChatMessage, MessageId, Sender};
use serde::Serialize;

pub fn user_message(id: impl Into<MessageId>, text: impl Into<String>) -> ChatMessage {
    ChatMessage::user(id, text)
}

pub fn bot_message(id: impl Into<MessageId>, text: impl Into<String>) -> ChatMessage {
    ChatMessage::bot(id, text)
}

pub fn get(url: impl Into<String>) -> RequestDescriptor {
    RequestDescriptor::get(url)
}

pub fn post_json<T>(url: impl Into<String>, payload: &T) -> Result<RequestDescriptor, FetchError>
where
    T: Serialize + ?Sized,
{
    RequestDescriptor::post(url).with_json(payload)
}

pub fn parse_sender(value: &str) -> Option<Sender> {
    match value.trim().to_ascii_lowercase().as_str() {
        "user" | "me" | "human" => Some(Sender::User),
        "bot" | "assistant" | "agent" => Some(Sender::Bot),
        _ => None,
    }
}
