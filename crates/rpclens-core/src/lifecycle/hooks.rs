//! Lifecycle hook seam.
//!
//! The RPC framework drives the three callbacks in order: `on_received` once
//! per inbound request, `on_routed` once operation identity is known,
//! `on_completed` once a response or error exists. Errors may short-circuit
//! routing, so implementations must tolerate `on_completed` arriving without
//! a preceding `on_routed`.

use super::context::RequestContext;
use crate::error::Result;

/// Hook bundle invoked by the RPC framework at fixed lifecycle points.
///
/// All methods default to pass-through, so implementations override only the
/// stages they care about. `on_received`/`on_routed` may reject a request by
/// returning an error; the built-in hook sets never do.
pub trait ServerHooks: Send + Sync {
    /// Fired when a request arrives, before routing.
    fn on_received(&self, ctx: RequestContext) -> Result<RequestContext> {
        Ok(ctx)
    }

    /// Fired once routing has resolved the operation identity.
    fn on_routed(&self, ctx: RequestContext) -> Result<RequestContext> {
        Ok(ctx)
    }

    /// Fired after a response or error has been produced. Must not fail:
    /// instrumentation is invisible to the request outcome.
    fn on_completed(&self, ctx: &RequestContext) {
        let _ = ctx;
    }
}

/// Hook set that does nothing at every stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl ServerHooks for NoopHooks {}
