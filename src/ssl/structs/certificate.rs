use rustls::pki_types::CertificateDer;

/// A DER encoded X.509 certificate together with the fields the manager
/// reports on, extracted once when the certificate is decoded.
#[derive(Clone)]
pub struct Certificate {
    pub(crate) der: CertificateDer<'static>,
    pub(crate) serial: String,
    pub(crate) subject: String,
    pub(crate) issuer: String,
    pub(crate) public_key_algorithm: &'static str,
}
