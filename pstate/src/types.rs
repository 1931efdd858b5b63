//! Chat message and auth token types.

use pcommon::{MessageId, MetadataMap};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataMap>,
}

impl ChatMessage {
    pub fn new(id: impl Into<MessageId>, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender,
            metadata: None,
        }
    }

    pub fn user(id: impl Into<MessageId>, text: impl Into<String>) -> Self {
        Self::new(id, text, Sender::User)
    }

    pub fn bot(id: impl Into<MessageId>, text: impl Into<String>) -> Self {
        Self::new(id, text, Sender::Bot)
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(MetadataMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.as_ref()?.get(key).map(String::as_str)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    value: String,
}

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<String> for AuthToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for AuthToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

impl Drop for AuthToken {
    fn drop(&mut self) {
        // SAFETY: zero bytes are valid UTF-8.
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthToken, ChatMessage, Sender};

    #[test]
    fn messages_serialize_with_lowercase_sender_and_optional_metadata() {
        let plain = ChatMessage::user("m-1", "hello");
        let encoded = serde_json::to_value(&plain).expect("message should encode");
        assert_eq!(
            encoded,
            serde_json::json!({ "id": "m-1", "text": "hello", "sender": "user" })
        );

        let tagged = ChatMessage::bot("m-2", "hi").with_metadata("intent", "greeting");
        let encoded = serde_json::to_value(&tagged).expect("message should encode");
        assert_eq!(encoded["sender"], "bot");
        assert_eq!(encoded["metadata"]["intent"], "greeting");
    }

    #[test]
    fn messages_decode_numeric_ids_and_missing_metadata() {
        let decoded: ChatMessage =
            serde_json::from_str(r#"{"id": 3, "text": "legacy", "sender": "bot"}"#)
                .expect("legacy message should decode");

        assert_eq!(decoded.id.as_str(), "3");
        assert_eq!(decoded.sender, Sender::Bot);
        assert_eq!(decoded.metadata, None);
        assert_eq!(decoded.metadata_value("anything"), None);
    }

    #[test]
    fn auth_token_debug_is_redacted() {
        let token = AuthToken::from("super-secret");
        assert_eq!(format!("{token:?}"), "AuthToken([REDACTED])");
        assert_eq!(token.expose(), "super-secret");
        assert!(!token.is_empty());
    }
}
