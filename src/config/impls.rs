/// Loading, saving and validation of [`Configuration`](crate::config::structs::configuration::Configuration).
pub mod configuration;

/// Display and Error for configuration errors.
pub mod configuration_error;
