//! Configuration management module.
//!
//! Loads, parses and validates the `config.toml` file that drives the
//! identity reloader binary.
//!
//! # Configuration Structure
//!
//! - **log_level**: Console log filter (`off`, `trace`, `debug`, `info`, `warn`, `error`)
//! - **log_console_interval**: Seconds between identity status lines
//! - **identity**: Key and certificate paths plus the refresh period
//! - **verification**: Peer verification mode and optional trust bundle
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use identity_reloader::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let period = config.refresh_interval();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
