//! Structured logging hook set.
//!
//! [`LogHooks`] emits one `tracing` event per completed request instead of
//! touching a metrics registry. It carries the same field set the metrics
//! hook set records (sanitized identity, status, elapsed seconds), so it can
//! run alongside [`MetricsHooks`](crate::metrics::MetricsHooks) or stand in
//! where no scrape endpoint exists.

use tracing::info;

use rpclens_core::error::Result;
use rpclens_core::lifecycle::context::RequestContext;
use rpclens_core::lifecycle::hooks::ServerHooks;
use rpclens_core::lifecycle::timing::{mark_request_start, request_start};
use rpclens_core::operation::{OperationIdentity, OutcomeStatus};

/// Field value logged when identity or status is absent at completion.
const UNKNOWN_FIELD: &str = "unknown";

/// Logging hook set. Any number can coexist; nothing is registered anywhere.
#[derive(Debug, Clone)]
pub struct LogHooks {
    namespace: String,
}

impl LogHooks {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl ServerHooks for LogHooks {
    fn on_received(&self, ctx: RequestContext) -> Result<RequestContext> {
        Ok(mark_request_start(ctx))
    }

    fn on_completed(&self, ctx: &RequestContext) {
        let sanitized = ctx.identity().map(OperationIdentity::sanitized);
        let (package, service, method): (&str, &str, &str) = match &sanitized {
            Some([p, s, m]) => (p.as_ref(), s.as_ref(), m.as_ref()),
            None => (UNKNOWN_FIELD, UNKNOWN_FIELD, UNKNOWN_FIELD),
        };
        let status = ctx.status().map_or(UNKNOWN_FIELD, OutcomeStatus::as_str);
        // Elapsed is omitted from the event when no start was marked.
        let elapsed_secs = request_start(ctx).map(|start| start.elapsed().as_secs_f64());

        info!(
            namespace = %self.namespace,
            package,
            service,
            method,
            status,
            elapsed_secs,
            "request completed"
        );
    }
}
