//! Request descriptors, request bodies, and outgoing header preparation.
//!
//! ```rust
//! use http::header::CONTENT_TYPE;
//! use phttp::RequestDescriptor;
//!
//! let request = RequestDescriptor::post("/api/messages")
//!     .with_json(&serde_json::json!({ "text": "hi" }))
//!     .expect("payload should serialize")
//!     .prepare();
//!
//! assert_eq!(request.headers.get_all(CONTENT_TYPE).iter().count(), 1);
//! assert_eq!(request.headers[CONTENT_TYPE], "application/json");
//! ```

use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use serde::Serialize;
use serde_json::Value;

use crate::FetchError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    Bytes {
        data: Vec<u8>,
        file_name: Option<String>,
        mime_type: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

/// Opaque multipart form. Its content type and boundary are chosen by the
/// transport, never by header preparation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::Text(value.into()),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        data: impl Into<Vec<u8>>,
        file_name: impl Into<String>,
        mime_type: Option<&str>,
    ) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::Bytes {
                data: data.into(),
                file_name: Some(file_name.into()),
                mime_type: mime_type.map(str::to_string),
            },
        });
        self
    }

    pub fn bytes(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::Bytes {
                data: data.into(),
                file_name: None,
                mime_type: None,
            },
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Raw(Vec<u8>),
    Json(Value),
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn json<T>(value: &T) -> Result<Self, FetchError>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|err| FetchError::invalid_request(err.to_string()))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Raw(value.into().into_bytes())
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }

    /// Wire bytes for non-multipart bodies. Multipart forms return `None`
    /// because only the transport knows how to encode them.
    pub fn to_bytes(&self) -> Result<Option<Vec<u8>>, FetchError> {
        match self {
            Self::Raw(bytes) => Ok(Some(bytes.clone())),
            Self::Json(value) => serde_json::to_vec(value)
                .map(Some)
                .map_err(|err| FetchError::invalid_request(err.to_string())),
            Self::Multipart(_) => Ok(None),
        }
    }
}

impl From<MultipartForm> for RequestBody {
    fn from(value: MultipartForm) -> Self {
        Self::Multipart(value)
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(Method::PATCH, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Sets a header, replacing any existing value under the same
    /// case-insensitive name.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, FetchError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Merges `headers`. Each name present in `headers` replaces the
    /// existing entry and keeps every value it carries.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn with_bearer_token(self, token: &str) -> Result<Self, FetchError> {
        self.with_header(AUTHORIZATION.as_str(), &format!("Bearer {token}"))
    }

    pub fn with_body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_json<T>(self, value: &T) -> Result<Self, FetchError>
    where
        T: Serialize + ?Sized,
    {
        Ok(self.with_body(RequestBody::json(value)?))
    }

    pub fn with_text(self, value: impl Into<String>) -> Self {
        self.with_body(RequestBody::text(value))
    }

    pub fn with_multipart(self, form: MultipartForm) -> Self {
        self.with_body(RequestBody::Multipart(form))
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    pub fn prepare(self) -> PreparedRequest {
        let headers = prepare_headers(&self.headers, self.body.as_ref());

        PreparedRequest {
            url: self.url,
            method: self.method,
            headers,
            body: self.body,
        }
    }
}

/// A descriptor whose headers went through [`prepare_headers`]. This is what
/// transports receive.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

/// Copies `headers` and adds `Content-Type: application/json` when a
/// non-multipart body is present and no content type was set.
pub fn prepare_headers(headers: &HeaderMap, body: Option<&RequestBody>) -> HeaderMap {
    let mut prepared = headers.clone();
    let wants_json = body.is_some_and(|body| !body.is_multipart());

    if wants_json && !prepared.contains_key(CONTENT_TYPE) {
        prepared.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }

    prepared
}
