use crate::ssl::enums::handshake_role::HandshakeRole;
use crate::ssl::structs::certificate_chain::CertificateChain;

/// What a custom peer check gets to look at.
#[derive(Debug)]
pub struct PeerCertificateCheck<'a> {
    /// Certificates the peer presented, leaf first.
    pub chain: &'a CertificateChain,
    /// Public key algorithm of the peer's leaf (`"RSA"`, `"EC"`, `"UNKNOWN"`).
    pub auth_type: &'a str,
    /// Role of the peer being verified.
    pub peer_role: HandshakeRole,
    /// Name the client asked for; only set when verifying a server.
    pub server_name: Option<&'a str>,
}
