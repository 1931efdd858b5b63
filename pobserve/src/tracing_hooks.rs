//! Tracing-based observability hooks for resolver calls.
//!
//! ```rust
//! use phttp::ResolverHooks;
//! use pobserve::TracingResolverHooks;
//!
//! fn accepts_resolver_hooks(_hooks: &dyn ResolverHooks) {}
//!
//! let hooks = TracingResolverHooks;
//! accepts_resolver_hooks(&hooks);
//! ```

use std::time::Duration;

use phttp::{FetchError, FetchErrorKind, Method, ResolverHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingResolverHooks;

impl ResolverHooks for TracingResolverHooks {
    fn on_request_start(&self, method: &Method, url: &str) {
        tracing::debug!(
            phase = "http",
            event = "request_start",
            method = %method,
            url
        );
    }

    fn on_success(&self, method: &Method, url: &str, status: u16, elapsed: Duration) {
        tracing::info!(
            phase = "http",
            event = "success",
            method = %method,
            url,
            status,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_failure(&self, method: &Method, url: &str, error: &FetchError, elapsed: Duration) {
        // Server-reported failures log at warn.
        if error.kind == FetchErrorKind::Http {
            tracing::warn!(
                phase = "http",
                event = "failure",
                method = %method,
                url,
                status = error.status,
                elapsed_ms = elapsed.as_millis() as u64,
                error_kind = ?error.kind,
                error = %error
            );
        } else {
            tracing::error!(
                phase = "http",
                event = "failure",
                method = %method,
                url,
                status = error.status,
                elapsed_ms = elapsed.as_millis() as u64,
                error_kind = ?error.kind,
                error = %error
            );
        }
    }
}
