//! Wiring helpers that assemble a ready-to-use [`ApiClient`].

use std::sync::Arc;

use phttp::{HttpTransport, ResolverHooks, ResponseResolver};
use pobserve::{FanoutResolverHooks, MetricsResolverHooks, SafeResolverHooks, TracingResolverHooks};

use crate::{ApiClient, ClientContext};

/// Tracing and metrics hooks behind a panic guard.
pub fn observed_hooks() -> Arc<dyn ResolverHooks> {
    let fanout = FanoutResolverHooks::new()
        .with(TracingResolverHooks)
        .with(MetricsResolverHooks);
    Arc::new(SafeResolverHooks::new(fanout))
}

pub fn build_client(transport: Arc<dyn HttpTransport>) -> ApiClient {
    build_client_with(transport, ClientContext::new(), Some(observed_hooks()))
}

pub fn build_client_with(
    transport: Arc<dyn HttpTransport>,
    context: ClientContext,
    hooks: Option<Arc<dyn ResolverHooks>>,
) -> ApiClient {
    let mut builder = ResponseResolver::builder(transport);
    if let Some(hooks) = hooks {
        builder = builder.hooks(hooks);
    }

    ApiClient::new(builder.build(), context)
}

#[cfg(feature = "reqwest-transport")]
pub fn reqwest_client(base_url: impl Into<String>) -> ApiClient {
    reqwest_client_with(reqwest::Client::new(), base_url)
}

#[cfg(feature = "reqwest-transport")]
pub fn reqwest_client_with(client: reqwest::Client, base_url: impl Into<String>) -> ApiClient {
    let transport = phttp::ReqwestTransport::new(client).with_base_url(base_url);
    build_client(Arc::new(transport))
}
