use crate::ssl::structs::credential_snapshot::CredentialSnapshot;
use crate::ssl::structs::credential_store::CredentialStore;
use arc_swap::ArcSwapOption;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = self.current.load();
        f.debug_struct("CredentialStore")
            .field("configured", &current.is_some())
            .field("leaf_serial", &current.as_ref().map(|snapshot| snapshot.leaf().serial().to_string()))
            .finish()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Current snapshot, or `None` while no identity has been published.
    ///
    /// A single atomic load; never blocks on a concurrent `set`.
    pub fn get(&self) -> Option<Arc<CredentialSnapshot>> {
        self.current.load_full()
    }

    /// Publishes a fully built snapshot and returns the shared handle to it.
    pub fn set(&self, snapshot: CredentialSnapshot) -> Arc<CredentialSnapshot> {
        let snapshot = Arc::new(snapshot);
        self.publish(Arc::clone(&snapshot));
        snapshot
    }

    /// Publishes an already shared snapshot.
    pub fn publish(&self, snapshot: Arc<CredentialSnapshot>) {
        self.current.store(Some(snapshot));
    }

    pub fn is_configured(&self) -> bool {
        self.current.load().is_some()
    }

    /// Ready-to-serve key for the handshake hot path.
    pub fn certified_key(&self) -> Option<Arc<CertifiedKey>> {
        self.current
            .load()
            .as_ref()
            .map(|snapshot| Arc::clone(&snapshot.certified_key))
    }
}
