//! Operational hook contracts for resolver calls.

use std::time::Duration;

use http::Method;

use crate::FetchError;

pub trait ResolverHooks: Send + Sync {
    fn on_request_start(&self, _method: &Method, _url: &str) {}

    fn on_success(&self, _method: &Method, _url: &str, _status: u16, _elapsed: Duration) {}

    fn on_failure(&self, _method: &Method, _url: &str, _error: &FetchError, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResolverHooks;

impl ResolverHooks for NoopResolverHooks {}
