use crate::ssl::enums::credential_error::CredentialError;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_chain::CertificateChain;
use crate::ssl::structs::credential_snapshot::CredentialSnapshot;
use crate::ssl::structs::private_key::PrivateKey;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl CredentialSnapshot {
    /// Pairs a key with its chain.
    ///
    /// The caller is responsible for `key` being the private half of the leaf
    /// certificate's public key. An empty chain, or a key the TLS provider
    /// cannot sign with, is rejected here.
    pub fn new(key: PrivateKey, chain: CertificateChain) -> Result<Self, CredentialError> {
        if chain.is_empty() {
            return Err(CredentialError::EmptyChain);
        }
        let certified_key = Arc::new(CertifiedKey::new(chain.to_der(), key.signing_key()?));
        Ok(Self {
            key,
            chain,
            certified_key,
            loaded_at: chrono::Utc::now(),
        })
    }

    pub fn key(&self) -> &PrivateKey {
        &self.key
    }

    pub fn chain(&self) -> &CertificateChain {
        &self.chain
    }

    pub fn leaf(&self) -> &Certificate {
        &self.chain.as_slice()[0]
    }

    pub fn certified_key(&self) -> Arc<CertifiedKey> {
        Arc::clone(&self.certified_key)
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }
}

impl PartialEq for CredentialSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.chain == other.chain
    }
}

impl std::fmt::Debug for CredentialSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSnapshot")
            .field("key", &self.key)
            .field("chain", &self.chain)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}
