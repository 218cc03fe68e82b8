use crate::ssl::enums::handshake_role::HandshakeRole;

impl std::fmt::Display for HandshakeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandshakeRole::Client => write!(f, "client"),
            HandshakeRole::Server => write!(f, "server"),
        }
    }
}
