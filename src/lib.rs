//! # Identity Reloader
//!
//! Keeps the TLS identity (private key and certificate chain) of a rustls
//! endpoint current while the PEM files on disk are rotated.
//!
//! ## Overview
//!
//! A credential store holds the active identity as one immutable snapshot.
//! Handshakes read it without locking; a periodic refresher replaces it when
//! both the key file and the certificate file have changed on disk. A
//! pluggable peer-verification policy decides how the remote side's
//! certificates are checked.
//!
//! ## Features
//!
//! - **PEM Decoding**: Certificate chains and PKCS#8 RSA private keys
//! - **Atomic Swaps**: Readers never see a key paired with the wrong chain
//! - **Hot Reload**: File refresh gated on both files changing
//! - **rustls Integration**: Server and client certificate resolvers
//! - **Peer Policy**: Full, chain-only or custom-only verification
//! - **Monitoring**: Structured logging and optional Sentry reporting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use identity_reloader::ssl::ssl::create_server_config;
//! use identity_reloader::ssl::structs::identity_key_manager::IdentityKeyManager;
//!
//! let manager = Arc::new(IdentityKeyManager::new());
//! manager.update_identity_from_paths("key.pem".as_ref(), "cert.pem".as_ref())?;
//! let config = create_server_config(manager, None)?;
//! ```
//!
//! ## Module Organization
//!
//! - [`common`]: Logging setup and the boot error type
//! - [`config`]: TOML configuration loading and validation
//! - [`ssl`]: Credentials, store, refresher, handshake adapter and peer policy
//! - [`structs`]: Command line arguments

/// Common utilities (logging setup, boot errors).
pub mod common;

/// Configuration loading and validation.
pub mod config;

/// TLS identity management and peer verification.
pub mod ssl;

/// Command line structures.
pub mod structs;
