//! Request lifecycle modules (context + timing + hook seam).
//!
//! This module hosts the per-request machinery:
//! - `context`: owned, type-keyed carrier threaded through the hook calls.
//! - `timing`: reserved start-instant entry and its accessors.
//! - `hooks`: the `ServerHooks` trait the RPC framework drives.
//!
//! Everything here is panic-free and framework-agnostic: absent values are
//! reported as `Option`/`Result` instead of assumed, keeping instrumentation
//! invisible to the request outcome.

pub mod context;
pub mod hooks;
pub mod timing;
