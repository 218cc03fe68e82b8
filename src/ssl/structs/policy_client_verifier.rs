use crate::ssl::structs::peer_verification_policy::PeerVerificationPolicy;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;

pub struct PolicyClientVerifier {
    pub(crate) policy: PeerVerificationPolicy,
    pub(crate) provider: Arc<CryptoProvider>,
}
