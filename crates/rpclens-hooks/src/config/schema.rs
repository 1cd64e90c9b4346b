use serde::Deserialize;

use rpclens_core::error::{Result, RpcLensError};

/// Built-in latency bucket ladder, in seconds.
/// 100us, 500us, 1ms, 5ms, 10ms, 50ms, 100ms, 500ms, 1s.
pub const DEFAULT_LATENCY_BUCKETS: [f64; 9] =
    [0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HooksConfig {
    /// Prefix applied to every metric name.
    pub namespace: String,

    /// Upper bucket bounds for the latency series, in seconds.
    #[serde(default = "default_latency_buckets")]
    pub latency_buckets: Vec<f64>,
}

impl HooksConfig {
    pub fn validate(&self) -> Result<()> {
        validate_namespace(&self.namespace)?;

        if self.latency_buckets.is_empty() {
            return Err(RpcLensError::Config(
                "latency_buckets must not be empty".into(),
            ));
        }
        if self
            .latency_buckets
            .iter()
            .any(|b| !b.is_finite() || *b <= 0.0)
        {
            return Err(RpcLensError::Config(
                "latency_buckets must be finite and positive".into(),
            ));
        }
        if self.latency_buckets.windows(2).any(|w| w[1] <= w[0]) {
            return Err(RpcLensError::Config(
                "latency_buckets must be strictly increasing".into(),
            ));
        }

        Ok(())
    }
}

fn default_latency_buckets() -> Vec<f64> {
    DEFAULT_LATENCY_BUCKETS.to_vec()
}

/// Backend metric-name grammar, checked early for a clear startup error.
fn validate_namespace(ns: &str) -> Result<()> {
    let mut chars = ns.chars();
    let ok = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !ok {
        return Err(RpcLensError::Config(format!(
            "namespace must match [a-zA-Z_][a-zA-Z0-9_]*, got {ns:?}"
        )));
    }
    Ok(())
}
