use crate::ssl::enums::credential_error::CredentialError;
use crate::ssl::structs::certificate::Certificate;
use rustls::pki_types::CertificateDer;
use x509_parser::prelude::{FromDer, X509Certificate};
use x509_parser::public_key::PublicKey;

impl Certificate {
    pub fn from_der(der: Vec<u8>) -> Result<Self, CredentialError> {
        let (serial, subject, issuer, public_key_algorithm) = {
            let (_, parsed) = X509Certificate::from_der(&der)
                .map_err(|e| CredentialError::Decode(format!("invalid certificate encoding: {}", e)))?;
            let public_key_algorithm = match parsed.public_key().parsed() {
                Ok(PublicKey::RSA(_)) => "RSA",
                Ok(PublicKey::EC(_)) => "EC",
                _ => "UNKNOWN",
            };
            (
                hex::encode(parsed.raw_serial()),
                parsed.subject().to_string(),
                parsed.issuer().to_string(),
                public_key_algorithm,
            )
        };
        Ok(Self {
            der: CertificateDer::from(der),
            serial,
            subject,
            issuer,
            public_key_algorithm,
        })
    }

    pub fn der(&self) -> &CertificateDer<'static> {
        &self.der
    }

    /// Serial number as lowercase hex of the raw DER integer bytes.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// `"RSA"`, `"EC"` or `"UNKNOWN"`.
    pub fn public_key_algorithm(&self) -> &'static str {
        self.public_key_algorithm
    }
}

impl PartialEq for Certificate {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
    }
}

impl Eq for Certificate {}

impl std::fmt::Debug for Certificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Certificate")
            .field("serial", &self.serial)
            .field("subject", &self.subject)
            .field("issuer", &self.issuer)
            .field("public_key_algorithm", &self.public_key_algorithm)
            .finish()
    }
}
