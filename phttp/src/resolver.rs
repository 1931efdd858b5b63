//! Response resolution: one request in, one typed outcome out.
//!
//! ```rust,no_run
//! use phttp::{Outcome, RequestDescriptor, ResponseResolver};
//!
//! # async fn run() {
//! let resolver = ResponseResolver::reqwest(reqwest::Client::new());
//! let outcome: Outcome<serde_json::Value> = resolver
//!     .resolve(RequestDescriptor::get("https://example.com/api/status"))
//!     .await;
//!
//! match outcome {
//!     Ok(Some(payload)) => println!("payload: {payload}"),
//!     Ok(None) => println!("no payload"),
//!     Err(err) => eprintln!("{}", err.message),
//! }
//! # }
//! ```

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    FetchError, HttpTransport, NoopResolverHooks, RawResponse, RequestDescriptor, ResolverHooks,
};

/// `Ok(None)` is the empty payload: 204/205 or a non-JSON success body.
pub type Outcome<T> = Result<Option<T>, FetchError>;

const NO_CONTENT: u16 = 204;
const RESET_CONTENT: u16 = 205;

#[derive(Clone)]
pub struct ResponseResolver {
    transport: Arc<dyn HttpTransport>,
    hooks: Arc<dyn ResolverHooks>,
}

impl ResponseResolver {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            hooks: Arc::new(NoopResolverHooks),
        }
    }

    #[cfg(feature = "reqwest-transport")]
    pub fn reqwest(client: reqwest::Client) -> Self {
        Self::new(Arc::new(crate::ReqwestTransport::new(client)))
    }

    pub fn builder(transport: Arc<dyn HttpTransport>) -> ResponseResolverBuilder {
        ResponseResolverBuilder::new(transport)
    }

    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Issues the request and normalizes the response.
    ///
    /// Failure statuses become `FetchErrorKind::Http` errors carrying the
    /// extracted message. Transport failures pass through as
    /// `FetchErrorKind::Transport`.
    pub async fn resolve<T>(&self, descriptor: RequestDescriptor) -> Outcome<T>
    where
        T: DeserializeOwned,
    {
        let method = descriptor.method.clone();
        let url = descriptor.url.clone();
        let started = Instant::now();
        self.hooks.on_request_start(&method, &url);

        match self.dispatch(descriptor).await {
            Ok((status, payload)) => {
                self.hooks
                    .on_success(&method, &url, status, started.elapsed());
                Ok(payload)
            }
            Err(error) => {
                self.hooks
                    .on_failure(&method, &url, &error, started.elapsed());
                Err(error)
            }
        }
    }

    async fn dispatch<T>(&self, descriptor: RequestDescriptor) -> Result<(u16, Option<T>), FetchError>
    where
        T: DeserializeOwned,
    {
        let response = self.transport.send(descriptor.prepare()).await?;
        let status = response.status;

        if !response.is_success() {
            let message = extract_error_message(response).await;
            return Err(FetchError::http(status, message));
        }

        if status == NO_CONTENT || status == RESET_CONTENT || !response.is_json() {
            return Ok((status, None));
        }

        let bytes = response.body.bytes().await?;
        let payload = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::decode(status, err.to_string()))?;

        Ok((status, Some(payload)))
    }
}

impl std::fmt::Debug for ResponseResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseResolver")
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

pub struct ResponseResolverBuilder {
    transport: Arc<dyn HttpTransport>,
    hooks: Arc<dyn ResolverHooks>,
}

impl ResponseResolverBuilder {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            hooks: Arc::new(NoopResolverHooks),
        }
    }

    pub fn hooks(mut self, hooks: Arc<dyn ResolverHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn build(self) -> ResponseResolver {
        ResponseResolver {
            transport: self.transport,
            hooks: self.hooks,
        }
    }
}

/// Best-effort message for a failure response. Never fails and never
/// returns an empty string.
pub async fn extract_error_message(response: RawResponse) -> String {
    let status = response.status;

    let message = if response.is_json() {
        response
            .body
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok())
            .and_then(message_from_json)
    } else {
        response
            .body
            .text()
            .await
            .ok()
            .filter(|text| !text.is_empty())
    };

    message.unwrap_or_else(|| fallback_message(status))
}

/// A bare JSON string, or the string `message` field of an object.
///
/// Empty strings count as absent so callers fall back to
/// [`fallback_message`]; `Http` errors never carry an empty message.
pub fn message_from_json(value: Value) -> Option<String> {
    let message = match value {
        Value::String(message) => Some(message),
        Value::Object(mut fields) => match fields.remove("message") {
            Some(Value::String(message)) => Some(message),
            _ => None,
        },
        _ => None,
    };

    message.filter(|message| !message.is_empty())
}

pub fn fallback_message(status: u16) -> String {
    format!("Request failed with status {status}")
}
