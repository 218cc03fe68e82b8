//! Enumerations for the credential core.

/// Error type for decoding, loading and serving credentials.
pub mod credential_error;

/// Side of the handshake an alias is selected for.
pub mod handshake_role;

/// Result of a single refresh tick.
pub mod refresh_outcome;

/// Peer verification levels.
///
/// - `FullVerification` - chain and hostname
/// - `ChainOnlyVerification` - chain, hostname mismatch ignored
/// - `NoVerification` - only the caller supplied check
pub mod verification_mode;
