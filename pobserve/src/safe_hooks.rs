use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use phttp::{FetchError, Method, ResolverHooks};

/// Runs the inner hooks with panics contained, so an observer can never
/// change a resolver outcome.
pub struct SafeResolverHooks<H> {
    inner: H,
}

impl<H> SafeResolverHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ResolverHooks for SafeResolverHooks<H>
where
    H: ResolverHooks,
{
    fn on_request_start(&self, method: &Method, url: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_request_start(method, url)));
    }

    fn on_success(&self, method: &Method, url: &str, status: u16, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_success(method, url, status, elapsed)
        }));
    }

    fn on_failure(&self, method: &Method, url: &str, error: &FetchError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(method, url, error, elapsed)
        }));
    }
}
