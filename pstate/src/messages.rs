//! Ordered chat transcript with upsert-by-id semantics.
//!
//! ```rust
//! use pstate::{ChatMessage, MessageStore};
//!
//! let store = MessageStore::new();
//! store.append(ChatMessage::user("1", "hello"));
//! store.append(ChatMessage::bot("2", "thinking..."));
//! store.append(ChatMessage::bot("2", "hi there"));
//!
//! let texts: Vec<_> = store.messages().into_iter().map(|m| m.text).collect();
//! assert_eq!(texts, vec!["hello", "hi there"]);
//! ```

use std::collections::HashMap;

use pcommon::{CheckId, MessageId};
use tokio::sync::watch;

use crate::ChatMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Appended(usize),
    Replaced(usize),
}

impl Upsert {
    pub fn position(self) -> usize {
        match self {
            Self::Appended(position) | Self::Replaced(position) => position,
        }
    }
}

/// Messages in arrival order plus an id-to-position index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
    positions: HashMap<MessageId, usize>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces an entry with the same id in place, or appends.
    pub fn upsert(&mut self, message: ChatMessage) -> Upsert {
        if let Some(&position) = self.positions.get(&message.id) {
            self.messages[position] = message;
            return Upsert::Replaced(position);
        }

        let position = self.messages.len();
        self.positions.insert(message.id.clone(), position);
        self.messages.push(message);
        Upsert::Appended(position)
    }

    pub fn extend<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = ChatMessage>,
    {
        for message in messages {
            self.upsert(message);
        }
    }

    pub fn replace_all<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = ChatMessage>,
    {
        self.clear();
        self.extend(messages);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.positions.clear();
    }

    pub fn get(&self, id: &MessageId) -> Option<&ChatMessage> {
        self.position(id).map(|position| &self.messages[position])
    }

    pub fn position(&self, id: &MessageId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<ChatMessage> for MessageLog {
    fn from_iter<I: IntoIterator<Item = ChatMessage>>(iter: I) -> Self {
        let mut log = Self::new();
        log.extend(iter);
        log
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub log: MessageLog,
    pub check_id: Option<CheckId>,
}

/// Reactive transcript container. Every mutation notifies subscribers.
#[derive(Debug)]
pub struct MessageStore {
    state: watch::Sender<Transcript>,
}

impl Default for MessageStore {
    fn default() -> Self {
        let (state, _) = watch::channel(Transcript::default());
        Self { state }
    }
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, message: ChatMessage) {
        self.state.send_modify(|transcript| {
            transcript.log.upsert(message);
        });
    }

    pub fn append_all<I>(&self, messages: I)
    where
        I: IntoIterator<Item = ChatMessage>,
    {
        self.state
            .send_modify(|transcript| transcript.log.extend(messages));
    }

    pub fn replace_all<I>(&self, messages: I)
    where
        I: IntoIterator<Item = ChatMessage>,
    {
        self.state
            .send_modify(|transcript| transcript.log.replace_all(messages));
    }

    pub fn set_check_id(&self, id: impl Into<CheckId>) {
        let id = id.into();
        self.state
            .send_modify(|transcript| transcript.check_id = Some(id));
    }

    pub fn check_id(&self) -> Option<CheckId> {
        self.state.borrow().check_id.clone()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.borrow().log.messages().to_vec()
    }

    pub fn get(&self, id: &MessageId) -> Option<ChatMessage> {
        self.state.borrow().log.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().log.is_empty()
    }

    pub fn snapshot(&self) -> Transcript {
        self.state.borrow().clone()
    }

    /// Drops every message and the check id.
    pub fn clear(&self) {
        self.state.send_replace(Transcript::default());
    }

    pub fn subscribe(&self) -> watch::Receiver<Transcript> {
        self.state.subscribe()
    }
}
