//! rpcLens hook sets.
//!
//! This crate provides the two concrete `ServerHooks` implementations — a
//! metrics-emitting set backed by a `prometheus` registry and a structured
//! logging set backed by `tracing` — plus the strict config schema used to
//! build them. It is intended to be consumed by an RPC server binary and by
//! integration tests.
//!
//! Request-time code here is panic-free by the same rule as the core crate:
//! recording failures are logged and swallowed, never propagated.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod logging;
pub mod metrics;
