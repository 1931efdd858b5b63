//! Common `phttp` imports for downstream crates.

#[cfg(feature = "reqwest-transport")]
pub use crate::ReqwestTransport;
pub use crate::{
    FetchError, FetchErrorKind, HttpFuture, HttpTransport, MultipartForm, NoopResolverHooks,
    Outcome, PreparedRequest, RawResponse, RequestBody, RequestDescriptor, ResolverHooks,
    ResponseBody, ResponseResolver,
};
pub use pcommon::BoxFuture;
