use serde::{Deserialize, Serialize};
use crate::config::structs::identity_config::IdentityConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::verification_config::VerificationConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub identity: IdentityConfig,
    #[serde(default)]
    pub verification: VerificationConfig,
    pub sentry_config: SentryConfig
}
