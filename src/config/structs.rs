//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Key and certificate file locations and refresh period.
pub mod identity_config;

/// Peer verification settings.
pub mod verification_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
