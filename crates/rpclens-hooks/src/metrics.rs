//! Prometheus-backed hook set.
//!
//! One [`MetricsHooks`] registers three series against a caller-supplied
//! registry and updates them from the lifecycle callbacks:
//!
//! - `<ns>_requests_total{package, service, method}`: incremented at routing.
//! - `<ns>_responses_total{package, service, method, status}`: incremented at
//!   completion, always.
//! - `<ns>_request_latency{package, service, method, status}`: one
//!   observation per completed request that carries a start instant.
//!
//! Identity labels pass through the sanitizer; a missing identity or status
//! degrades to the `"unknown"` placeholder. Recording failures are logged
//! and swallowed: instrumentation never changes a request's outcome.

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};
use tracing::warn;

use rpclens_core::error::{Result, RpcLensError};
use rpclens_core::lifecycle::context::RequestContext;
use rpclens_core::lifecycle::hooks::ServerHooks;
use rpclens_core::lifecycle::timing::{mark_request_start, request_start};
use rpclens_core::operation::{OperationIdentity, OutcomeStatus};

use crate::config::{HooksConfig, DEFAULT_LATENCY_BUCKETS};

/// Label value recorded when identity or status is absent at completion.
const UNKNOWN_LABEL: &str = "unknown";

/// Metrics-emitting hook set.
///
/// Cheap to clone; all clones update the same underlying series. The series
/// are registered once, at construction, and live for the process lifetime.
#[derive(Clone, Debug)]
pub struct MetricsHooks {
    requests: IntCounterVec,
    responses: IntCounterVec,
    latency: HistogramVec,
}

impl MetricsHooks {
    /// Register the three series under `namespace` with the default bucket
    /// ladder.
    ///
    /// Fails with [`RpcLensError::Registration`] when the registry already
    /// holds series with these names, which indicates a duplicate
    /// construction and must abort startup.
    pub fn new(namespace: &str, registry: &Registry) -> Result<Self> {
        Self::with_buckets(namespace, DEFAULT_LATENCY_BUCKETS.to_vec(), registry)
    }

    /// Build from a validated config.
    pub fn from_config(cfg: &HooksConfig, registry: &Registry) -> Result<Self> {
        Self::with_buckets(&cfg.namespace, cfg.latency_buckets.clone(), registry)
    }

    fn with_buckets(namespace: &str, buckets: Vec<f64>, registry: &Registry) -> Result<Self> {
        let requests = IntCounterVec::new(
            Opts::new("requests_total", "Counter of total requests received.")
                .namespace(namespace),
            &["package", "service", "method"],
        )
        .map_err(opts_err)?;

        let responses = IntCounterVec::new(
            Opts::new("responses_total", "Counter of total responses sent.")
                .namespace(namespace),
            &["package", "service", "method", "status"],
        )
        .map_err(opts_err)?;

        let latency = HistogramVec::new(
            HistogramOpts::new("request_latency", "Request duration in seconds.")
                .namespace(namespace)
                .buckets(buckets),
            &["package", "service", "method", "status"],
        )
        .map_err(opts_err)?;

        registry
            .register(Box::new(requests.clone()))
            .map_err(registration_err)?;
        registry
            .register(Box::new(responses.clone()))
            .map_err(registration_err)?;
        registry
            .register(Box::new(latency.clone()))
            .map_err(registration_err)?;

        Ok(Self {
            requests,
            responses,
            latency,
        })
    }

    /// Routed-stage increment. No-op when routing never attached identity.
    fn count_request(&self, ctx: &RequestContext) {
        let Some(identity) = ctx.identity() else {
            return;
        };
        let [pkg, service, method] = identity.sanitized();
        let labels: [&str; 3] = [pkg.as_ref(), service.as_ref(), method.as_ref()];

        match self.requests.get_metric_with_label_values(&labels) {
            Ok(counter) => counter.inc(),
            Err(e) => warn!(error = %e, "requests_total update failed"),
        }
    }

    /// Completion-stage increment plus latency observation.
    fn count_response(&self, ctx: &RequestContext) {
        let sanitized = ctx.identity().map(OperationIdentity::sanitized);
        let (pkg, service, method): (&str, &str, &str) = match &sanitized {
            Some([p, s, m]) => (p.as_ref(), s.as_ref(), m.as_ref()),
            None => (UNKNOWN_LABEL, UNKNOWN_LABEL, UNKNOWN_LABEL),
        };
        let status = ctx.status().map_or(UNKNOWN_LABEL, OutcomeStatus::as_str);
        let labels = [pkg, service, method, status];

        match self.responses.get_metric_with_label_values(&labels) {
            Ok(counter) => counter.inc(),
            Err(e) => warn!(error = %e, "responses_total update failed"),
        }

        if let Some(start) = request_start(ctx) {
            match self.latency.get_metric_with_label_values(&labels) {
                Ok(histogram) => histogram.observe(start.elapsed().as_secs_f64()),
                Err(e) => warn!(error = %e, "request_latency update failed"),
            }
        }
    }
}

impl ServerHooks for MetricsHooks {
    fn on_received(&self, ctx: RequestContext) -> Result<RequestContext> {
        Ok(mark_request_start(ctx))
    }

    fn on_routed(&self, ctx: RequestContext) -> Result<RequestContext> {
        self.count_request(&ctx);
        Ok(ctx)
    }

    fn on_completed(&self, ctx: &RequestContext) {
        self.count_response(ctx);
    }
}

fn opts_err(e: prometheus::Error) -> RpcLensError {
    RpcLensError::Config(e.to_string())
}

fn registration_err(e: prometheus::Error) -> RpcLensError {
    RpcLensError::Registration(e.to_string())
}
