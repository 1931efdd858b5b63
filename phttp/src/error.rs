//! Fetch error kinds and error value helpers.
//!
//! ```rust
//! use phttp::{FetchError, FetchErrorKind};
//!
//! let http = FetchError::http(404, "not found");
//! assert_eq!(http.kind, FetchErrorKind::Http);
//! assert_eq!(http.status, Some(404));
//!
//! let transport = FetchError::transport("connection refused");
//! assert!(transport.is_transport());
//! assert_eq!(transport.status, None);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// The request could not be sent or no response arrived.
    Transport,
    /// A response arrived with a status outside 2xx.
    Http,
    /// A successful JSON response did not decode into the requested type.
    Decode,
    /// The request descriptor could not be turned into a request.
    InvalidRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            kind,
            message: message.into(),
            status,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Transport, message, None)
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Http, message, Some(status))
    }

    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Decode, message, Some(status))
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::InvalidRequest, message, None)
    }

    pub fn is_transport(&self) -> bool {
        self.kind == FetchErrorKind::Transport
    }

    pub fn is_http(&self) -> bool {
        self.kind == FetchErrorKind::Http
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for FetchError {}

impl From<http::Error> for FetchError {
    fn from(value: http::Error) -> Self {
        FetchError::invalid_request(value.to_string())
    }
}

impl From<http::header::InvalidHeaderName> for FetchError {
    fn from(value: http::header::InvalidHeaderName) -> Self {
        FetchError::invalid_request(value.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for FetchError {
    fn from(value: http::header::InvalidHeaderValue) -> Self {
        FetchError::invalid_request(value.to_string())
    }
}

#[cfg(feature = "reqwest-transport")]
impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_builder() {
            return FetchError::invalid_request(value.to_string());
        }

        FetchError::transport(value.to_string())
    }
}
