use crate::ssl::enums::credential_error::CredentialError;
use std::path::Path;
use std::sync::Arc;

impl CredentialError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CredentialError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Converts the error into the form the handshake engine aborts with.
    ///
    /// A peer rejection is forwarded untouched inside
    /// `CertificateError::Other` so callers can downcast it back.
    pub fn to_handshake_error(&self) -> rustls::Error {
        match self {
            CredentialError::PeerRejected(rejected) => rustls::Error::InvalidCertificate(
                rustls::CertificateError::Other(rustls::OtherError(Arc::new(rejected.clone()))),
            ),
            CredentialError::Tls(error) => error.clone(),
            other => rustls::Error::General(other.to_string()),
        }
    }
}
