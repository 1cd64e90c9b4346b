//! Request start timing.
//!
//! The start instant lives in the request context under a private newtype
//! key: framework entries cannot collide with it and nothing outside this
//! module can overwrite it. `Instant` is the monotonic clock, so elapsed
//! time is immune to wall-clock adjustments.

use std::time::Instant;

use super::context::RequestContext;

/// Reserved context entry. Private: only [`mark_request_start`] writes it.
struct RequestStart(Instant);

/// Record the current instant as the request start, unless one is already
/// recorded.
///
/// Called from `on_received`, once per request. A second call leaves the
/// original instant in place.
pub fn mark_request_start(mut ctx: RequestContext) -> RequestContext {
    if ctx.get::<RequestStart>().is_none() {
        ctx.insert(RequestStart(Instant::now()));
    }
    ctx
}

/// Start instant recorded by [`mark_request_start`], or `None` when the
/// request was never marked (short-circuited lifecycle).
pub fn request_start(ctx: &RequestContext) -> Option<Instant> {
    ctx.get::<RequestStart>().map(|s| s.0)
}
