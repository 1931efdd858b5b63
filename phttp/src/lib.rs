//! JSON-over-HTTP request resolution.
//!
//! A [`ResponseResolver`] sends a [`RequestDescriptor`] through an
//! [`HttpTransport`] and folds whatever comes back into an [`Outcome`]:
//! a decoded JSON payload, an empty payload, or a [`FetchError`] whose
//! message was extracted from the failure response.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use phttp::{
//!     FetchError, HttpFuture, HttpTransport, PreparedRequest, RawResponse, RequestDescriptor,
//!     ResponseBody, ResponseResolver,
//! };
//!
//! #[derive(Debug)]
//! struct Teapot;
//!
//! impl HttpTransport for Teapot {
//!     fn send<'a>(
//!         &'a self,
//!         _request: PreparedRequest,
//!     ) -> HttpFuture<'a, Result<RawResponse, FetchError>> {
//!         Box::pin(async {
//!             Ok(RawResponse::new(
//!                 418,
//!                 http::HeaderMap::new(),
//!                 ResponseBody::from_bytes("short and stout"),
//!             ))
//!         })
//!     }
//! }
//!
//! let resolver = ResponseResolver::new(Arc::new(Teapot));
//! let outcome = block_on(resolver.resolve::<()>(RequestDescriptor::get("/tea")));
//! assert_eq!(outcome.expect_err("418 is a failure").message, "short and stout");
//!
//! # fn block_on<F: std::future::Future>(future: F) -> F::Output {
//! #     let mut future = std::pin::pin!(future);
//! #     let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
//! #     loop {
//! #         if let std::task::Poll::Ready(value) = future.as_mut().poll(&mut cx) {
//! #             return value;
//! #         }
//! #     }
//! # }
//! ```

mod error;
mod hooks;
mod request;
mod resolver;
mod response;
mod transport;

pub mod prelude;

pub use error::{FetchError, FetchErrorKind};
pub use hooks::{NoopResolverHooks, ResolverHooks};
pub use request::{
    FormPart, FormValue, JSON_CONTENT_TYPE, MultipartForm, PreparedRequest, RequestBody,
    RequestDescriptor, prepare_headers,
};
pub use resolver::{
    Outcome, ResponseResolver, ResponseResolverBuilder, extract_error_message, fallback_message,
    message_from_json,
};
pub use response::{BodySource, RawResponse, ResponseBody, is_json_content_type};
#[cfg(feature = "reqwest-transport")]
pub use transport::ReqwestTransport;
pub use transport::{HttpFuture, HttpTransport};

pub use http::{HeaderMap, Method};
