use crate::config::structs::verification_config::VerificationConfig;
use crate::ssl::enums::credential_error::CredentialError;
use crate::ssl::enums::handshake_role::HandshakeRole;
use crate::ssl::enums::verification_mode::VerificationMode;
use crate::ssl::ssl::file_trust_bundle;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_chain::CertificateChain;
use crate::ssl::structs::peer_certificate_check::PeerCertificateCheck;
use crate::ssl::structs::peer_rejected_error::PeerRejectedError;
use crate::ssl::structs::peer_verification_policy::PeerVerificationPolicy;
use rustls::RootCertStore;
use rustls::pki_types::CertificateDer;
use std::sync::Arc;

impl std::fmt::Debug for PeerVerificationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeerVerificationPolicy")
            .field("mode", &self.mode)
            .field("has_peer_check", &self.peer_check.is_some())
            .field("has_trust_bundle", &self.trust_bundle.is_some())
            .finish()
    }
}

impl PeerVerificationPolicy {
    pub fn new(mode: VerificationMode) -> Self {
        Self {
            mode,
            peer_check: None,
            trust_bundle: None,
        }
    }

    pub fn from_config(config: &VerificationConfig) -> Self {
        let policy = Self::new(config.mode);
        match &config.trust_bundle_path {
            Some(path) if !path.is_empty() => policy.with_trust_bundle_fn(file_trust_bundle(path)),
            _ => policy,
        }
    }

    pub fn with_peer_check<F>(mut self, check: F) -> Self
    where
        F: Fn(&PeerCertificateCheck<'_>) -> Result<(), PeerRejectedError> + Send + Sync + 'static,
    {
        self.peer_check = Some(Arc::new(check));
        self
    }

    pub fn with_trust_bundle<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> Result<RootCertStore, CredentialError> + Send + Sync + 'static,
    {
        self.trust_bundle = Some(Arc::new(supplier));
        self
    }

    pub fn with_trust_bundle_fn(mut self, supplier: crate::ssl::types::trust_bundle_fn::TrustBundleFn) -> Self {
        self.trust_bundle = Some(supplier);
        self
    }

    /// Asks the supplier for the current trusted roots.
    pub fn load_roots(&self) -> Result<Arc<RootCertStore>, CredentialError> {
        let supplier = self
            .trust_bundle
            .as_ref()
            .ok_or_else(|| CredentialError::TrustBundle(format!("verification mode '{}' needs a trust bundle", self.mode)))?;
        let roots = supplier()?;
        if roots.is_empty() {
            return Err(CredentialError::TrustBundle("trust bundle contains no usable roots".to_string()));
        }
        Ok(Arc::new(roots))
    }

    /// Runs the custom check, if any, over the presented chain.
    pub fn check_peer(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        peer_role: HandshakeRole,
        server_name: Option<&str>,
    ) -> Result<(), rustls::Error> {
        let check = match &self.peer_check {
            Some(check) => check,
            None => return Ok(()),
        };
        let certificates = std::iter::once(end_entity)
            .chain(intermediates.iter())
            .map(|der| Certificate::from_der(der.as_ref().to_vec()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| rustls::Error::InvalidCertificate(rustls::CertificateError::BadEncoding))?;
        let chain = CertificateChain::new(certificates);
        let auth_type = chain.as_slice()[0].public_key_algorithm();
        let request = PeerCertificateCheck {
            chain: &chain,
            auth_type,
            peer_role,
            server_name,
        };
        check(&request).map_err(|rejected| {
            log::warn!("[VERIFY] Custom check rejected {} peer: {}", peer_role, rejected);
            CredentialError::PeerRejected(rejected).to_handshake_error()
        })
    }
}
