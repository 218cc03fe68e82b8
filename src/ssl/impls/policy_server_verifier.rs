use crate::ssl::enums::handshake_role::HandshakeRole;
use crate::ssl::enums::verification_mode::VerificationMode;
use crate::ssl::structs::peer_verification_policy::PeerVerificationPolicy;
use crate::ssl::structs::policy_server_verifier::PolicyServerVerifier;
use rustls::client::WebPkiServerVerifier;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{CertificateError, DigitallySignedStruct, SignatureScheme};
use std::sync::Arc;

impl std::fmt::Debug for PolicyServerVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyServerVerifier")
            .field("policy", &self.policy)
            .finish()
    }
}

impl PolicyServerVerifier {
    pub fn new(policy: PeerVerificationPolicy, provider: Arc<CryptoProvider>) -> Self {
        Self { policy, provider }
    }

    pub fn policy(&self) -> &PeerVerificationPolicy {
        &self.policy
    }

    fn verify_chain(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<(), rustls::Error> {
        let roots = self.policy.load_roots().map_err(|e| e.to_handshake_error())?;
        let verifier = WebPkiServerVerifier::builder_with_provider(roots, Arc::clone(&self.provider))
            .build()
            .map_err(|e| rustls::Error::General(format!("unable to build chain verifier: {}", e)))?;
        match verifier.verify_server_cert(end_entity, intermediates, server_name, ocsp_response, now) {
            Ok(_) => Ok(()),
            Err(rustls::Error::InvalidCertificate(ref error))
                if !self.policy.mode.checks_hostname() && is_name_mismatch(error) =>
            {
                log::debug!("[VERIFY] Ignoring hostname mismatch for {:?}", server_name);
                Ok(())
            }
            Err(error) => Err(error),
        }
    }
}

fn is_name_mismatch(error: &CertificateError) -> bool {
    matches!(
        error,
        CertificateError::NotValidForName | CertificateError::NotValidForNameContext { .. }
    )
}

impl ServerCertVerifier for PolicyServerVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        if self.policy.mode != VerificationMode::NoVerification {
            self.verify_chain(end_entity, intermediates, server_name, ocsp_response, now)?;
        }
        let name = server_name.to_str();
        self.policy
            .check_peer(end_entity, intermediates, HandshakeRole::Server, Some(name.as_ref()))?;
        Ok(ServerCertVerified::assertion())
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
