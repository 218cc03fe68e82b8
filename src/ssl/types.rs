//! Callback type aliases for the peer-verification policy.

/// Custom peer certificate check.
pub mod peer_check_fn;

/// Trusted-root bundle supplier.
pub mod trust_bundle_fn;
