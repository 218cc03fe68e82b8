//! PEM decoding for certificate chains and PKCS#8 private keys.
//!
//! Decoding is textual, not a structured PEM parse. The accepted grammar:
//!
//! - Certificates: `-----BEGIN <label>-----` ... `-----END <label>-----`
//!   where `<label>` is any text on the marker line that ends in
//!   `CERTIFICATE` (case-insensitive), e.g. `CERTIFICATE`,
//!   `X509 CERTIFICATE`, `TRUSTED CERTIFICATE`. The body may contain any
//!   whitespace; it is removed before Base64 decoding. Blocks are returned in
//!   file order and text outside blocks is ignored.
//! - Private key: `-----BEGIN\s+<any text>PRIVATE\s+KEY-----`, a body made
//!   only of Base64 characters and line breaks, and the matching
//!   `-----END\s+<any text>PRIVATE\s+KEY-----` footer (case-insensitive).
//!   Line breaks are stripped before Base64 decoding. Exactly one block must
//!   be present.

use crate::ssl::enums::credential_error::CredentialError;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_chain::CertificateChain;
use crate::ssl::structs::private_key::PrivateKey;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;

static CERTIFICATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)-----BEGIN [^\r\n-]*CERTIFICATE-----(.*?)-----END [^\r\n-]*CERTIFICATE-----")
        .expect("certificate pattern compiles")
});

static KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)-----BEGIN\s+.*?PRIVATE\s+KEY-----([a-z0-9+/=\r\n]+)-----END\s+.*?PRIVATE\s+KEY-----")
        .expect("private key pattern compiles")
});

/// Decodes every certificate block in `input`, in file order.
///
/// Zero blocks yields an empty chain; callers decide whether that is an error.
pub fn decode_certificates(input: &[u8]) -> Result<CertificateChain, CredentialError> {
    let text = String::from_utf8_lossy(input);
    let mut certificates = Vec::new();
    for (index, captures) in CERTIFICATE_PATTERN.captures_iter(&text).enumerate() {
        let body: String = captures[1].chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let der = STANDARD
            .decode(body.as_bytes())
            .map_err(|e| CredentialError::Decode(format!("certificate block {}: invalid Base64: {}", index, e)))?;
        let certificate = Certificate::from_der(der).map_err(|e| match e {
            CredentialError::Decode(message) => CredentialError::Decode(format!("certificate block {}: {}", index, message)),
            other => other,
        })?;
        certificates.push(certificate);
    }
    log::debug!("[PEM] Decoded {} certificate(s)", certificates.len());
    Ok(CertificateChain::new(certificates))
}

/// Decodes the single PKCS#8 RSA private key block in `input`.
pub fn decode_private_key(input: &[u8]) -> Result<PrivateKey, CredentialError> {
    let text = String::from_utf8_lossy(input);
    let mut matches = KEY_PATTERN.captures_iter(&text);
    let captures = matches.next().ok_or(CredentialError::KeyNotFound)?;
    if matches.next().is_some() {
        log::warn!("[PEM] More than one private key block found, refusing to guess");
        return Err(CredentialError::KeyNotFound);
    }
    let body = captures[1].replace(['\r', '\n'], "");
    let der = STANDARD
        .decode(body.as_bytes())
        .map_err(|e| CredentialError::Decode(format!("private key: invalid Base64: {}", e)))?;
    PrivateKey::from_pkcs8_der(der)
}
