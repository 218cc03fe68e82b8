//! Credential data structures.
//!
//! Every value that crosses the store boundary is immutable once built. A new
//! identity is always a new [`credential_snapshot::CredentialSnapshot`].

/// A single parsed X.509 certificate.
pub mod certificate;

/// Ordered, immutable certificate chain (leaf first).
pub mod certificate_chain;

/// PKCS#8 encoded RSA private key with its rustls signing key.
pub mod private_key;

/// Immutable pairing of a private key and its certificate chain.
pub mod credential_snapshot;

/// Atomically swappable holder of the active snapshot.
pub mod credential_store;

/// Modification times of the last successfully applied key/cert pair.
pub mod file_watch_state;

/// Periodic file based refresher.
pub mod file_refresher;

/// Cancellation handle returned when periodic refresh is started.
pub mod refresh_handle;

/// `std::fs` backed filesystem.
pub mod local_file_system;

/// Handshake provider adapter consumed by rustls.
pub mod identity_key_manager;

/// Error returned by custom peer checks.
pub mod peer_rejected_error;

/// Arguments handed to a custom peer check.
pub mod peer_certificate_check;

/// Composable peer-verification policy.
pub mod peer_verification_policy;

/// rustls `ServerCertVerifier` driven by a policy (client side).
pub mod policy_server_verifier;

/// rustls `ClientCertVerifier` driven by a policy (server side).
pub mod policy_client_verifier;
