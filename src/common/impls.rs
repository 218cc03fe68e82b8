/// Construction, Display and Error for [`CustomError`](crate::common::structs::custom_error::CustomError).
pub mod custom_error;
