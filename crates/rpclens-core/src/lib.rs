//! rpcLens core: framework-facing instrumentation contracts.
//!
//! This crate defines the per-request context, operation identity, lifecycle
//! hook trait, label sanitizer, and error surface shared by the concrete hook
//! sets. It intentionally carries no metrics backend or runtime dependencies
//! so an RPC framework adapter can depend on it alone.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `RpcLensError`/`Result`, and absent
//! per-request data as `Option`, so instrumentation can never crash a
//! serving process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod label;
pub mod lifecycle;
pub mod operation;

/// Shared result type.
pub use error::{Result, RpcLensError};
