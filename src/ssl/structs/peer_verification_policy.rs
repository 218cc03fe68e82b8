use crate::ssl::enums::verification_mode::VerificationMode;
use crate::ssl::types::peer_check_fn::PeerCheckFn;
use crate::ssl::types::trust_bundle_fn::TrustBundleFn;

/// Composable peer-verification configuration consumed by the TLS engine.
///
/// Each part is pluggable on its own: the mode, an optional custom check
/// run on every handshake, and an optional trusted-root supplier invoked
/// whenever a chain has to be verified.
#[derive(Clone, Default)]
pub struct PeerVerificationPolicy {
    pub mode: VerificationMode,
    pub peer_check: Option<PeerCheckFn>,
    pub trust_bundle: Option<TrustBundleFn>,
}
