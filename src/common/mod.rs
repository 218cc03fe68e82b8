//! Common utilities and shared functionality.
//!
//! Logging setup and the error type used by the binary's boot path.
//!
//! # Example
//!
//! ```rust,ignore
//! use identity_reloader::common::common::setup_logging;
//!
//! setup_logging(&config)?;
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for common helpers.
pub mod tests;
