//! Production-friendly observability hooks for resolver calls.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use phttp::ResolverHooks;
//! use pobserve::{FanoutResolverHooks, MetricsResolverHooks, SafeResolverHooks, TracingResolverHooks};
//!
//! let hooks: Arc<dyn ResolverHooks> = Arc::new(SafeResolverHooks::new(
//!     FanoutResolverHooks::new()
//!         .with(TracingResolverHooks)
//!         .with(MetricsResolverHooks),
//! ));
//! # let _ = hooks;
//! ```

mod fanout;
mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use fanout::FanoutResolverHooks;
pub use metrics_hooks::MetricsResolverHooks;
pub use safe_hooks::SafeResolverHooks;
pub use tracing_hooks::TracingResolverHooks;

pub mod prelude {
    pub use crate::{
        FanoutResolverHooks, MetricsResolverHooks, SafeResolverHooks, TracingResolverHooks,
    };
}
