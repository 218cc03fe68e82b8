/// Error carrying a human readable message for boot failures.
pub mod custom_error;
