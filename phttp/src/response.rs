//! Raw responses with read-once bodies.
//!
//! ```rust
//! use phttp::{RawResponse, ResponseBody};
//!
//! let response = RawResponse::new(200, http::HeaderMap::new(), ResponseBody::from_bytes("ok"));
//! assert!(response.is_success());
//! assert!(!response.is_json());
//! ```

use std::borrow::Cow;

use http::HeaderMap;
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::{FetchError, FetchErrorKind, HttpFuture};

/// Source of a response body. Reading consumes the source.
pub trait BodySource: Send {
    fn read(self: Box<Self>) -> HttpFuture<'static, Result<Vec<u8>, FetchError>>;
}

struct BufferedBody(Vec<u8>);

impl BodySource for BufferedBody {
    fn read(self: Box<Self>) -> HttpFuture<'static, Result<Vec<u8>, FetchError>> {
        Box::pin(async move { Ok(self.0) })
    }
}

pub struct ResponseBody {
    source: Box<dyn BodySource>,
}

impl ResponseBody {
    pub fn from_source<S>(source: S) -> Self
    where
        S: BodySource + 'static,
    {
        Self {
            source: Box::new(source),
        }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_source(BufferedBody(bytes.into()))
    }

    pub fn empty() -> Self {
        Self::from_bytes(Vec::new())
    }

    pub async fn bytes(self) -> Result<Vec<u8>, FetchError> {
        self.source.read().await
    }

    /// Reads the body as text. Invalid UTF-8 sequences are replaced rather
    /// than rejected.
    pub async fn text(self) -> Result<String, FetchError> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub async fn json<T>(self) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let bytes = self.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FetchErrorKind::Decode, err.to_string(), None))
    }
}

impl std::fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ResponseBody(..)")
    }
}

#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: ResponseBody,
}

impl RawResponse {
    pub fn new(status: u16, headers: HeaderMap, body: ResponseBody) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Declared content type, decoded lossily so non-ASCII parameters do not
    /// hide the media type. Empty when absent.
    pub fn content_type(&self) -> Cow<'_, str> {
        self.headers
            .get(CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
            .unwrap_or_default()
    }

    pub fn is_json(&self) -> bool {
        is_json_content_type(&self.content_type())
    }
}

/// Case-insensitive substring match, not a media-type parse.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .to_ascii_lowercase()
        .contains(crate::JSON_CONTENT_TYPE)
}
