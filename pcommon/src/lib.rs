//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use pcommon::{CheckId, MessageId, MetadataMap};
//!
//! let message = MessageId::from("msg-1");
//! let check = CheckId::new("check-1");
//! let mut metadata = MetadataMap::new();
//! metadata.insert("source".to_string(), "webhook".to_string());
//!
//! assert_eq!(message.as_str(), "msg-1");
//! assert_eq!(check.to_string(), "check-1");
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use pcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Shared metadata and cross-crate identifier newtypes.
    //!
    //! Identifiers are string-typed. Numeric ids coming from older payloads
    //! are accepted by converting them with `MessageId::from(42_u64)`.
    //!
    //! ```rust
    //! use pcommon::{CheckId, MessageId};
    //!
    //! let message = MessageId::from(7_u64);
    //! let check = CheckId::from("check-42");
    //!
    //! assert_eq!(message.as_str(), "7");
    //! assert_eq!(check.as_str(), "check-42");
    //! ```

    use std::collections::HashMap;
    use std::fmt::{Display, Formatter};

    use serde::{Deserialize, Deserializer, Serialize};

    pub type MetadataMap = HashMap<String, String>;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
    #[serde(transparent)]
    pub struct MessageId(String);

    impl MessageId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for MessageId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for MessageId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for MessageId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    impl From<u64> for MessageId {
        fn from(value: u64) -> Self {
            Self(value.to_string())
        }
    }

    impl<'de> Deserialize<'de> for MessageId {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            #[derive(Deserialize)]
            #[serde(untagged)]
            enum RawMessageId {
                Text(String),
                Number(u64),
            }

            Ok(match RawMessageId::deserialize(deserializer)? {
                RawMessageId::Text(value) => Self(value),
                RawMessageId::Number(value) => Self::from(value),
            })
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct CheckId(String);

    impl CheckId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for CheckId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for CheckId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for CheckId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub use context::{CheckId, MessageId, MetadataMap};
pub use future::BoxFuture;
