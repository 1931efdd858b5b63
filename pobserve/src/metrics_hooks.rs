//! Metrics-based observability hooks for resolver calls.
//!
//! ```rust
//! use phttp::ResolverHooks;
//! use pobserve::MetricsResolverHooks;
//!
//! fn accepts_resolver_hooks(_hooks: &dyn ResolverHooks) {}
//!
//! let hooks = MetricsResolverHooks;
//! accepts_resolver_hooks(&hooks);
//! ```

use std::time::Duration;

use phttp::{FetchError, Method, ResolverHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsResolverHooks;

impl ResolverHooks for MetricsResolverHooks {
    fn on_request_start(&self, method: &Method, _url: &str) {
        metrics::counter!(
            "parley_http_request_start_total",
            "method" => method.to_string()
        )
        .increment(1);
    }

    fn on_success(&self, method: &Method, _url: &str, status: u16, elapsed: Duration) {
        metrics::counter!(
            "parley_http_success_total",
            "method" => method.to_string(),
            "status" => status.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "parley_http_request_duration_seconds",
            "method" => method.to_string(),
            "outcome" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_failure(&self, method: &Method, _url: &str, error: &FetchError, elapsed: Duration) {
        let status = error
            .status
            .map(|status| status.to_string())
            .unwrap_or_else(|| "none".to_string());

        metrics::counter!(
            "parley_http_failure_total",
            "method" => method.to_string(),
            "status" => status,
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "parley_http_request_duration_seconds",
            "method" => method.to_string(),
            "outcome" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
