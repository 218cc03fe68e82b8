use crate::ssl::structs::credential_store::CredentialStore;
use std::sync::Arc;

/// Key manager the TLS engine consults during each handshake.
///
/// Supports exactly one identity, published under a fixed alias.
pub struct IdentityKeyManager {
    pub(crate) store: Arc<CredentialStore>,
}
