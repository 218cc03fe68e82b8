use crate::ssl::enums::credential_error::CredentialError;
use crate::ssl::enums::handshake_role::HandshakeRole;
use crate::ssl::ssl::load_snapshot_from_files;
use crate::ssl::structs::certificate_chain::CertificateChain;
use crate::ssl::structs::credential_snapshot::CredentialSnapshot;
use crate::ssl::structs::credential_store::CredentialStore;
use crate::ssl::structs::file_refresher::FileRefresher;
use crate::ssl::structs::identity_key_manager::IdentityKeyManager;
use crate::ssl::structs::private_key::PrivateKey;
use crate::ssl::structs::refresh_handle::RefreshHandle;
use rustls::SignatureScheme;
use rustls::client::ResolvesClientCert;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_ALIAS: &str = "default";

impl std::fmt::Debug for IdentityKeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityKeyManager")
            .field("store", &self.store)
            .finish()
    }
}

impl Default for IdentityKeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityKeyManager {
    pub fn new() -> Self {
        Self::with_store(Arc::new(CredentialStore::new()))
    }

    pub fn with_store(store: Arc<CredentialStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    pub fn current_snapshot(&self) -> Result<Arc<CredentialSnapshot>, CredentialError> {
        self.store.get().ok_or(CredentialError::NotConfigured)
    }

    pub fn current_key(&self) -> Result<PrivateKey, CredentialError> {
        Ok(self.current_snapshot()?.key().clone())
    }

    /// The returned chain shares the published, immutable certificates.
    pub fn current_chain(&self) -> Result<CertificateChain, CredentialError> {
        Ok(self.current_snapshot()?.chain().clone())
    }

    pub fn private_key(&self, _alias: &str) -> Result<PrivateKey, CredentialError> {
        self.current_key()
    }

    pub fn certificate_chain(&self, _alias: &str) -> Result<CertificateChain, CredentialError> {
        self.current_chain()
    }

    pub fn select_alias(&self, _role: HandshakeRole) -> &'static str {
        DEFAULT_ALIAS
    }

    pub fn client_aliases(&self, _key_type: &str, _issuers: &[&[u8]]) -> Vec<&'static str> {
        vec![DEFAULT_ALIAS]
    }

    pub fn server_aliases(&self, _key_type: &str, _issuers: &[&[u8]]) -> Vec<&'static str> {
        vec![DEFAULT_ALIAS]
    }

    pub fn choose_client_alias(&self, _key_types: &[&str], _issuers: &[&[u8]]) -> &'static str {
        self.select_alias(HandshakeRole::Client)
    }

    pub fn choose_server_alias(&self, _key_type: &str, _issuers: &[&[u8]]) -> &'static str {
        self.select_alias(HandshakeRole::Server)
    }

    /// Publishes `key` and `chain` as the active identity.
    ///
    /// The caller must make sure `key` matches the public key of the leaf
    /// certificate; the pairing is not checked cryptographically.
    pub fn update_identity(&self, key: PrivateKey, chain: CertificateChain) -> Result<(), CredentialError> {
        self.publish(CredentialSnapshot::new(key, chain)?);
        Ok(())
    }

    /// One-shot load from disk; errors go back to the caller.
    pub fn update_identity_from_paths(&self, key_path: &Path, cert_path: &Path) -> Result<(), CredentialError> {
        self.publish(load_snapshot_from_files(key_path, cert_path)?);
        Ok(())
    }

    /// Starts reading `key_path` and `cert_path` every `period` on `runtime`,
    /// publishing a new identity whenever both files changed.
    pub fn update_identity_from_files(
        &self,
        key_path: impl Into<PathBuf>,
        cert_path: impl Into<PathBuf>,
        period: Duration,
        runtime: &tokio::runtime::Handle,
    ) -> RefreshHandle {
        let refresher = FileRefresher::new(key_path, cert_path);
        log::info!(
            "[IDENTITY] Watching {} / {} every {:?}",
            refresher.state().key_path().display(),
            refresher.state().cert_path().display(),
            period
        );
        refresher.spawn(Arc::clone(&self.store), period, runtime)
    }

    fn publish(&self, snapshot: CredentialSnapshot) {
        let snapshot = self.store.set(snapshot);
        log::info!(
            "[IDENTITY] Identity updated (leaf serial {}, {} certificate(s))",
            snapshot.leaf().serial(),
            snapshot.chain().len()
        );
    }

    fn resolve_identity(&self) -> Option<Arc<CertifiedKey>> {
        let certified_key = self.store.certified_key();
        if certified_key.is_none() {
            log::debug!("[IDENTITY] Handshake requested an identity before one was configured");
        }
        certified_key
    }
}

impl ResolvesServerCert for IdentityKeyManager {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        self.resolve_identity()
    }
}

impl ResolvesClientCert for IdentityKeyManager {
    fn resolve(
        &self,
        _root_hint_subjects: &[&[u8]],
        _sigschemes: &[SignatureScheme],
    ) -> Option<Arc<CertifiedKey>> {
        self.resolve_identity()
    }

    fn has_certs(&self) -> bool {
        self.store.is_configured()
    }
}
