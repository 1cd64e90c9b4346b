//! Shared error type across rpcLens crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, RpcLensError>;

/// Unified error type used by core and the hook sets.
///
/// Only construction-time paths (config loading, metric registration) return
/// these; per-request hook paths absorb failures instead of propagating them.
#[derive(Debug, Error)]
pub enum RpcLensError {
    #[error("config: {0}")]
    Config(String),
    #[error("metric registration: {0}")]
    Registration(String),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("internal: {0}")]
    Internal(String),
}
