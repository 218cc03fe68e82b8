#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum HandshakeRole {
    Client,
    Server,
}
