use rustls::pki_types::PrivatePkcs8KeyDer;
use std::sync::Arc;

/// RSA private key as found in the source container, kept in its PKCS#8
/// encoding.
#[derive(Clone)]
pub struct PrivateKey {
    pub(crate) der: Arc<PrivatePkcs8KeyDer<'static>>,
    pub(crate) modulus_bits: usize,
}
