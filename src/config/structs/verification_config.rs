use serde::{Deserialize, Serialize};
use crate::ssl::enums::verification_mode::VerificationMode;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationConfig {
    #[serde(default)]
    pub mode: VerificationMode,
    #[serde(default)]
    pub trust_bundle_path: Option<String>
}
