//! Hook-set config loader (strict parsing).

pub mod schema;

use std::fs;

use rpclens_core::error::{Result, RpcLensError};

pub use schema::{HooksConfig, DEFAULT_LATENCY_BUCKETS};

pub fn load_from_file(path: &str) -> Result<HooksConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RpcLensError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<HooksConfig> {
    let cfg: HooksConfig = serde_yaml::from_str(s)
        .map_err(|e| RpcLensError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
