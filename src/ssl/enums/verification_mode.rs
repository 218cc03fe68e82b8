use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Hash, Eq, PartialEq)]
pub enum VerificationMode {
    #[default]
    #[serde(rename = "full")]
    FullVerification,
    #[serde(rename = "chain_only")]
    ChainOnlyVerification,
    #[serde(rename = "none")]
    NoVerification,
}
