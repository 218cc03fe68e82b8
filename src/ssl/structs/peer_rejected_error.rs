use thiserror::Error;

/// Returned by a custom peer check to abort the handshake.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("Peer certificate rejected: {reason}")]
pub struct PeerRejectedError {
    pub reason: String,
}
