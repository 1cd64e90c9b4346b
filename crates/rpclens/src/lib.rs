//! Top-level facade crate for rpcLens.
//!
//! Re-exports the core contracts and the hook sets so users can depend on a single crate.

pub mod core {
    pub use rpclens_core::*;
}

pub mod hooks {
    pub use rpclens_hooks::*;
}
