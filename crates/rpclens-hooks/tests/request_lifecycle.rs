//! Lifecycle metric emission properties.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::thread;
use std::time::Duration;

use prometheus::Registry;

use rpclens_core::lifecycle::context::RequestContext;
use rpclens_core::lifecycle::hooks::ServerHooks;
use rpclens_core::lifecycle::timing::request_start;
use rpclens_core::operation::{OperationIdentity, OutcomeStatus};
use rpclens_hooks::metrics::MetricsHooks;

use metric_reader::{counter_value, histogram_count, histogram_sum};

/// Simulate the framework: received, optional routing, completion.
fn drive(hooks: &dyn ServerHooks, identity: Option<OperationIdentity>, status: OutcomeStatus) {
    let mut ctx = hooks.on_received(RequestContext::new()).unwrap();
    if let Some(id) = identity {
        ctx.set_identity(id);
        ctx = hooks.on_routed(ctx).unwrap();
    }
    ctx.set_status(status);
    hooks.on_completed(&ctx);
}

#[test]
fn full_lifecycle_emits_exactly_one_of_each() {
    let registry = Registry::new();
    let hooks = MetricsHooks::new("twirp", &registry).unwrap();

    drive(
        &hooks,
        Some(OperationIdentity::new("billing", "Invoices", "Create")),
        OutcomeStatus::Ok,
    );

    let families = registry.gather();
    let id_labels = [
        ("package", "billing"),
        ("service", "Invoices"),
        ("method", "Create"),
    ];
    let full_labels = [
        ("package", "billing"),
        ("service", "Invoices"),
        ("method", "Create"),
        ("status", "ok"),
    ];

    assert_eq!(
        counter_value(&families, "twirp_requests_total", &id_labels),
        1.0
    );
    assert_eq!(
        counter_value(&families, "twirp_responses_total", &full_labels),
        1.0
    );
    assert_eq!(
        histogram_count(&families, "twirp_request_latency", &full_labels),
        1
    );
    assert!(histogram_sum(&families, "twirp_request_latency", &full_labels) >= 0.0);
}

#[test]
fn identity_is_sanitized_at_emit() {
    let registry = Registry::new();
    let hooks = MetricsHooks::new("twirp", &registry).unwrap();

    drive(
        &hooks,
        Some(OperationIdentity::new("my.pkg", "My Service", "Get/Item")),
        OutcomeStatus::Ok,
    );

    let families = registry.gather();
    let labels = [
        ("package", "my_pkg"),
        ("service", "My_Service"),
        ("method", "Get_Item"),
    ];
    assert_eq!(counter_value(&families, "twirp_requests_total", &labels), 1.0);
}

#[test]
fn routed_without_identity_is_noop() {
    let registry = Registry::new();
    let hooks = MetricsHooks::new("twirp", &registry).unwrap();

    let ctx = hooks.on_received(RequestContext::new()).unwrap();
    let _ctx = hooks.on_routed(ctx).unwrap();

    let families = registry.gather();
    assert_eq!(counter_value(&families, "twirp_requests_total", &[]), 0.0);
}

#[test]
fn completion_without_routing_uses_placeholders() {
    let registry = Registry::new();
    let hooks = MetricsHooks::new("twirp", &registry).unwrap();

    // Bad route: dispatch never attached an identity.
    drive(&hooks, None, OutcomeStatus::BadRoute);

    let families = registry.gather();
    let labels = [
        ("package", "unknown"),
        ("service", "unknown"),
        ("method", "unknown"),
        ("status", "bad_route"),
    ];

    // The routed-stage counter never moved.
    assert_eq!(counter_value(&families, "twirp_requests_total", &[]), 0.0);
    assert_eq!(counter_value(&families, "twirp_responses_total", &labels), 1.0);
    // Start was marked at on_received, so latency still lands.
    assert_eq!(
        histogram_count(&families, "twirp_request_latency", &labels),
        1
    );
}

#[test]
fn completion_without_status_uses_placeholder() {
    let registry = Registry::new();
    let hooks = MetricsHooks::new("twirp", &registry).unwrap();

    let mut ctx = hooks.on_received(RequestContext::new()).unwrap();
    ctx.set_identity(OperationIdentity::new("billing", "Invoices", "Create"));
    let ctx = hooks.on_routed(ctx).unwrap();
    hooks.on_completed(&ctx);

    let families = registry.gather();
    let labels = [
        ("package", "billing"),
        ("service", "Invoices"),
        ("method", "Create"),
        ("status", "unknown"),
    ];
    assert_eq!(counter_value(&families, "twirp_responses_total", &labels), 1.0);
}

#[test]
fn no_latency_without_marked_start() {
    let registry = Registry::new();
    let hooks = MetricsHooks::new("twirp", &registry).unwrap();

    // Misuse: completion with no received stage. The counter still lands;
    // the latency observation is skipped.
    let mut ctx = RequestContext::new();
    ctx.set_identity(OperationIdentity::new("billing", "Invoices", "Create"));
    ctx.set_status(OutcomeStatus::Internal);
    hooks.on_completed(&ctx);

    let families = registry.gather();
    let labels = [
        ("package", "billing"),
        ("service", "Invoices"),
        ("method", "Create"),
        ("status", "internal"),
    ];
    assert_eq!(counter_value(&families, "twirp_responses_total", &labels), 1.0);
    assert_eq!(
        histogram_count(&families, "twirp_request_latency", &labels),
        0
    );
}

#[test]
fn repeated_completions_accumulate_per_status() {
    let registry = Registry::new();
    let hooks = MetricsHooks::new("twirp", &registry).unwrap();

    let id = OperationIdentity::new("billing", "Invoices", "Create");
    drive(&hooks, Some(id.clone()), OutcomeStatus::Ok);
    drive(&hooks, Some(id.clone()), OutcomeStatus::Ok);
    drive(&hooks, Some(id), OutcomeStatus::Internal);

    let families = registry.gather();
    assert_eq!(
        counter_value(&families, "twirp_responses_total", &[("status", "ok")]),
        2.0
    );
    assert_eq!(
        counter_value(&families, "twirp_responses_total", &[("status", "internal")]),
        1.0
    );
    assert_eq!(counter_value(&families, "twirp_requests_total", &[]), 3.0);
    assert_eq!(histogram_count(&families, "twirp_request_latency", &[]), 3);
}

#[test]
fn received_twice_keeps_the_first_start() {
    let registry = Registry::new();
    let hooks = MetricsHooks::new("twirp", &registry).unwrap();

    let ctx = hooks.on_received(RequestContext::new()).unwrap();
    let first = request_start(&ctx).unwrap();

    thread::sleep(Duration::from_millis(5));
    let ctx = hooks.on_received(ctx).unwrap();

    assert_eq!(request_start(&ctx), Some(first));
}
