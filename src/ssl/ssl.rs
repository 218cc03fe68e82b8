use crate::ssl::enums::credential_error::CredentialError;
use crate::ssl::pem::{decode_certificates, decode_private_key};
use crate::ssl::structs::credential_snapshot::CredentialSnapshot;
use crate::ssl::structs::credential_store::CredentialStore;
use crate::ssl::structs::file_refresher::FileRefresher;
use crate::ssl::structs::identity_key_manager::IdentityKeyManager;
use crate::ssl::structs::peer_verification_policy::PeerVerificationPolicy;
use crate::ssl::structs::policy_client_verifier::PolicyClientVerifier;
use crate::ssl::structs::policy_server_verifier::PolicyServerVerifier;
use crate::ssl::structs::refresh_handle::RefreshHandle;
use crate::ssl::types::trust_bundle_fn::TrustBundleFn;
use rustls::crypto::CryptoProvider;
use rustls::{ClientConfig, RootCertStore, ServerConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub fn crypto_provider() -> Arc<CryptoProvider> {
    Arc::new(rustls::crypto::ring::default_provider())
}

/// Reads and decodes both files once, without touching any store.
pub fn load_snapshot_from_files(key_path: &Path, cert_path: &Path) -> Result<CredentialSnapshot, CredentialError> {
    let key_bytes = std::fs::read(key_path).map_err(|e| CredentialError::io(key_path, e))?;
    let cert_bytes = std::fs::read(cert_path).map_err(|e| CredentialError::io(cert_path, e))?;
    let key = decode_private_key(&key_bytes)?;
    let chain = decode_certificates(&cert_bytes)?;
    CredentialSnapshot::new(key, chain)
}

pub fn spawn_periodic_refresh(
    refresher: FileRefresher,
    store: Arc<CredentialStore>,
    period: Duration,
    runtime: &tokio::runtime::Handle,
) -> RefreshHandle {
    refresher.spawn(store, period, runtime)
}

/// Trust-bundle supplier backed by a PEM file, re-read on every handshake.
pub fn file_trust_bundle(path: impl Into<PathBuf>) -> TrustBundleFn {
    let path = path.into();
    Arc::new(move || {
        let bytes = std::fs::read(&path).map_err(|e| CredentialError::io(&path, e))?;
        let chain = decode_certificates(&bytes)
            .map_err(|e| CredentialError::TrustBundle(format!("{}: {}", path.display(), e)))?;
        let mut roots = RootCertStore::empty();
        for certificate in chain.iter() {
            roots
                .add(certificate.der().clone())
                .map_err(|e| CredentialError::TrustBundle(format!("{}: serial {}: {}", path.display(), certificate.serial(), e)))?;
        }
        if roots.is_empty() {
            return Err(CredentialError::TrustBundle(format!("{}: no certificates found", path.display())));
        }
        log::debug!("[VERIFY] Loaded {} trusted root(s) from {}", roots.len(), path.display());
        Ok(roots)
    })
}

/// Server configuration presenting the manager's identity.
///
/// Without a policy, clients are not asked for a certificate.
pub fn create_server_config(
    manager: Arc<IdentityKeyManager>,
    policy: Option<PeerVerificationPolicy>,
) -> Result<ServerConfig, CredentialError> {
    let provider = crypto_provider();
    let builder = ServerConfig::builder_with_provider(Arc::clone(&provider)).with_safe_default_protocol_versions()?;
    let builder = match policy {
        Some(policy) => builder.with_client_cert_verifier(Arc::new(PolicyClientVerifier::new(policy, provider))),
        None => builder.with_no_client_auth(),
    };
    Ok(builder.with_cert_resolver(manager))
}

/// Loads the policy's trusted roots, when its mode checks chains, and builds
/// the server configuration, so a missing or broken trust bundle surfaces
/// before the first handshake instead of during it.
pub fn validate_server_config(
    manager: Arc<IdentityKeyManager>,
    policy: Option<PeerVerificationPolicy>,
) -> Result<(), CredentialError> {
    if let Some(policy) = policy.as_ref().filter(|policy| policy.mode.checks_chain()) {
        let roots = policy.load_roots()?;
        log::debug!("[TLS] Trust bundle holds {} root(s)", roots.len());
    }
    create_server_config(manager, policy).map(|_| ())
}

/// Client configuration verifying servers through `policy` and presenting
/// the manager's identity when a server asks for one.
pub fn create_client_config(
    manager: Arc<IdentityKeyManager>,
    policy: PeerVerificationPolicy,
) -> Result<ClientConfig, CredentialError> {
    let provider = crypto_provider();
    let verifier = Arc::new(PolicyServerVerifier::new(policy, Arc::clone(&provider)));
    Ok(ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .dangerous()
        .with_custom_certificate_verifier(verifier)
        .with_client_cert_resolver(manager))
}
