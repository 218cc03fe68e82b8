use crate::ssl::enums::handshake_role::HandshakeRole;
use crate::ssl::structs::peer_verification_policy::PeerVerificationPolicy;
use crate::ssl::structs::policy_client_verifier::PolicyClientVerifier;
use rustls::client::danger::HandshakeSignatureValid;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, UnixTime};
use rustls::server::WebPkiClientVerifier;
use rustls::server::danger::{ClientCertVerified, ClientCertVerifier};
use rustls::{DigitallySignedStruct, DistinguishedName, SignatureScheme};
use std::sync::Arc;

impl std::fmt::Debug for PolicyClientVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyClientVerifier")
            .field("policy", &self.policy)
            .finish()
    }
}

impl PolicyClientVerifier {
    pub fn new(policy: PeerVerificationPolicy, provider: Arc<CryptoProvider>) -> Self {
        Self { policy, provider }
    }

    pub fn policy(&self) -> &PeerVerificationPolicy {
        &self.policy
    }
}

impl ClientCertVerifier for PolicyClientVerifier {
    // Roots come from the supplier per handshake, so no hints are advertised.
    fn root_hint_subjects(&self) -> &[DistinguishedName] {
        &[]
    }

    fn verify_client_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        now: UnixTime,
    ) -> Result<ClientCertVerified, rustls::Error> {
        if self.policy.mode.checks_chain() {
            let roots = self.policy.load_roots().map_err(|e| e.to_handshake_error())?;
            let verifier = WebPkiClientVerifier::builder_with_provider(roots, Arc::clone(&self.provider))
                .build()
                .map_err(|e| rustls::Error::General(format!("unable to build chain verifier: {}", e)))?;
            verifier.verify_client_cert(end_entity, intermediates, now)?;
        }
        self.policy
            .check_peer(end_entity, intermediates, HandshakeRole::Client, None)?;
        Ok(ClientCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(message, cert, dss, &self.provider.signature_verification_algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(message, cert, dss, &self.provider.signature_verification_algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider.signature_verification_algorithms.supported_schemes()
    }
}
