use serde::{Deserialize, Serialize};

pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 60_000;

fn default_refresh_interval_ms() -> u64 {
    DEFAULT_REFRESH_INTERVAL_MS
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub key_path: String,
    pub cert_path: String,
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64
}
