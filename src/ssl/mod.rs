//! TLS identity management module.
//!
//! This module owns the private key and certificate chain a process presents
//! during TLS handshakes, and keeps them fresh while the files on disk are
//! rotated underneath it.
//!
//! # Features
//!
//! - PEM decoding of certificate chains and PKCS#8 RSA private keys
//! - Lock-free publication of immutable credential snapshots
//! - Periodic file refresh gated on both files changing
//! - rustls resolver integration for server and client identities
//! - Pluggable peer-verification policy for the handshake engine
//!
//! # Hot Reload
//!
//! A [`structs::file_refresher::FileRefresher`] stats the key and certificate
//! files on every tick. Only when *both* modification times moved since the
//! last successful load are the files decoded and published. A failed decode
//! leaves the previous identity in place and does not advance the watch state.
//!
//! Deployers should replace both files through an atomic rename so that both
//! timestamps change together.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use identity_reloader::ssl::structs::identity_key_manager::IdentityKeyManager;
//! use identity_reloader::ssl::ssl::create_server_config;
//!
//! let manager = Arc::new(IdentityKeyManager::new());
//! let refresh = manager.update_identity_from_files(
//!     "key.pem",
//!     "cert.pem",
//!     Duration::from_secs(60),
//!     &tokio::runtime::Handle::current(),
//! );
//! let server_config = create_server_config(manager.clone(), None)?;
//! // ...
//! refresh.cancel();
//! ```

/// Error and mode enumerations.
pub mod enums;

/// Implementation blocks for the credential types.
pub mod impls;

/// Regex based PEM decoding of certificates and private keys.
pub mod pem;

/// Helpers wiring the identity manager into rustls configurations.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Credential data structures.
pub mod structs;

/// Seams towards external collaborators (filesystem).
pub mod traits;

/// Callback type aliases used by the peer-verification policy.
pub mod types;
