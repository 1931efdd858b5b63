use std::time::Duration;

use phttp::{FetchError, Method, ResolverHooks};

/// Forwards every callback to each registered hook, in registration order.
#[derive(Default)]
pub struct FanoutResolverHooks {
    hooks: Vec<Box<dyn ResolverHooks>>,
}

impl FanoutResolverHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<H>(mut self, hooks: H) -> Self
    where
        H: ResolverHooks + 'static,
    {
        self.hooks.push(Box::new(hooks));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl ResolverHooks for FanoutResolverHooks {
    fn on_request_start(&self, method: &Method, url: &str) {
        for hooks in &self.hooks {
            hooks.on_request_start(method, url);
        }
    }

    fn on_success(&self, method: &Method, url: &str, status: u16, elapsed: Duration) {
        for hooks in &self.hooks {
            hooks.on_success(method, url, status, elapsed);
        }
    }

    fn on_failure(&self, method: &Method, url: &str, error: &FetchError, elapsed: Duration) {
        for hooks in &self.hooks {
            hooks.on_failure(method, url, error, elapsed);
        }
    }
}
