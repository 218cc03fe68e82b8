use crate::ssl::enums::credential_error::CredentialError;
use crate::ssl::structs::private_key::PrivateKey;
use rsa::RsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rustls::SignatureAlgorithm;
use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::sign::SigningKey;
use std::sync::Arc;

impl PrivateKey {
    /// Builds a key from PKCS#8 DER bytes.
    ///
    /// The key algorithm is fixed to RSA; any other algorithm, or bytes that
    /// do not form a valid PKCS#8 RSA key, fail with [`CredentialError::Decode`].
    /// Only the encoding is checked here, the key size is not.
    pub fn from_pkcs8_der(der: Vec<u8>) -> Result<Self, CredentialError> {
        let rsa_key = RsaPrivateKey::from_pkcs8_der(&der)
            .map_err(|e| CredentialError::Decode(format!("invalid PKCS #8 RSA private key: {}", e)))?;
        Ok(Self {
            der: Arc::new(PrivatePkcs8KeyDer::from(der)),
            modulus_bits: rsa_key.size() * 8,
        })
    }

    pub fn secret_pkcs8_der(&self) -> &[u8] {
        self.der.secret_pkcs8_der()
    }

    pub fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::RSA
    }

    pub fn modulus_bits(&self) -> usize {
        self.modulus_bits
    }

    /// Builds the rustls signer for this key.
    ///
    /// ring refuses RSA moduli under 2048 bits; such keys decode fine but fail
    /// here with [`CredentialError::UnusableKey`].
    pub fn signing_key(&self) -> Result<Arc<dyn SigningKey>, CredentialError> {
        rustls::crypto::ring::sign::any_supported_type(&self.to_private_key_der()).map_err(|e| {
            CredentialError::UnusableKey(format!("{}-bit RSA key rejected by the TLS provider: {}", self.modulus_bits, e))
        })
    }

    pub fn to_private_key_der(&self) -> PrivateKeyDer<'static> {
        PrivateKeyDer::Pkcs8(self.der.clone_key())
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.secret_pkcs8_der() == other.secret_pkcs8_der()
    }
}

impl Eq for PrivateKey {}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm())
            .field("modulus_bits", &self.modulus_bits)
            .field("der_length", &self.secret_pkcs8_der().len())
            .finish()
    }
}
