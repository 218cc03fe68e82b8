use crate::ssl::structs::peer_rejected_error::PeerRejectedError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Failed to decode PEM content: {0}")]
    Decode(String),
    #[error("Could not find a PKCS #8 private key in input")]
    KeyNotFound,
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No identity credentials have been configured")]
    NotConfigured,
    #[error(transparent)]
    PeerRejected(#[from] PeerRejectedError),
    #[error("Private key cannot be used for TLS signing: {0}")]
    UnusableKey(String),
    #[error("Certificate chain is empty")]
    EmptyChain,
    #[error("Failed to load trust bundle: {0}")]
    TrustBundle(String),
    #[error("TLS configuration error: {0}")]
    Tls(#[from] rustls::Error),
}
