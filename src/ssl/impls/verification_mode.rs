use crate::ssl::enums::verification_mode::VerificationMode;

impl VerificationMode {
    pub fn checks_chain(&self) -> bool {
        !matches!(self, VerificationMode::NoVerification)
    }

    /// Only applies when verifying a server; client certificates carry no name to match.
    pub fn checks_hostname(&self) -> bool {
        matches!(self, VerificationMode::FullVerification)
    }
}

impl std::fmt::Display for VerificationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationMode::FullVerification => write!(f, "full"),
            VerificationMode::ChainOnlyVerification => write!(f, "chain_only"),
            VerificationMode::NoVerification => write!(f, "none"),
        }
    }
}
