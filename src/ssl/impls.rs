//! Implementation blocks for the credential data structures.

pub mod certificate;
pub mod certificate_chain;
pub mod credential_error;
pub mod credential_snapshot;
pub mod credential_store;
pub mod file_refresher;
pub mod file_watch_state;
pub mod handshake_role;
pub mod identity_key_manager;
pub mod local_file_system;
pub mod peer_rejected_error;
pub mod peer_verification_policy;
pub mod policy_client_verifier;
pub mod policy_server_verifier;
pub mod private_key;
pub mod refresh_handle;
pub mod refresh_outcome;
pub mod verification_mode;
