use crate::ssl::enums::credential_error::CredentialError;
use rustls::RootCertStore;
use std::sync::Arc;

pub type TrustBundleFn = Arc<dyn Fn() -> Result<RootCertStore, CredentialError> + Send + Sync>;
