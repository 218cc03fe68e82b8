use crate::ssl::structs::certificate_chain::CertificateChain;
use crate::ssl::structs::private_key::PrivateKey;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

pub struct CredentialSnapshot {
    pub(crate) key: PrivateKey,
    pub(crate) chain: CertificateChain,
    pub(crate) certified_key: Arc<CertifiedKey>,
    pub(crate) loaded_at: chrono::DateTime<chrono::Utc>,
}
