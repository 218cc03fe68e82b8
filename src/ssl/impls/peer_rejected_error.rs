use crate::ssl::structs::peer_rejected_error::PeerRejectedError;

impl PeerRejectedError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    /// Recovers a rejection that travelled through a rustls handshake error.
    pub fn from_handshake_error(error: &rustls::Error) -> Option<&PeerRejectedError> {
        match error {
            rustls::Error::InvalidCertificate(rustls::CertificateError::Other(other)) => {
                other.0.downcast_ref::<PeerRejectedError>()
            }
            _ => None,
        }
    }
}
