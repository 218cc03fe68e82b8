use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_chain::CertificateChain;
use rustls::pki_types::CertificateDer;
use std::sync::Arc;

impl CertificateChain {
    pub fn new(certificates: Vec<Certificate>) -> Self {
        Self(Arc::from(certificates))
    }

    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    pub fn leaf(&self) -> Option<&Certificate> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Certificate> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Certificate] {
        &self.0
    }

    pub fn serials(&self) -> Vec<&str> {
        self.0.iter().map(|certificate| certificate.serial()).collect()
    }

    /// Owned DER copies, in chain order, for handing to rustls.
    pub fn to_der(&self) -> Vec<CertificateDer<'static>> {
        self.0.iter().map(|certificate| certificate.der().clone()).collect()
    }

    /// True when both chains share the same published allocation.
    pub fn ptr_eq(&self, other: &CertificateChain) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Certificate>> for CertificateChain {
    fn from(certificates: Vec<Certificate>) -> Self {
        Self::new(certificates)
    }
}

impl PartialEq for CertificateChain {
    fn eq(&self, other: &Self) -> bool {
        self.0[..] == other.0[..]
    }
}

impl Eq for CertificateChain {}

impl<'a> IntoIterator for &'a CertificateChain {
    type Item = &'a Certificate;
    type IntoIter = std::slice::Iter<'a, Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for CertificateChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateChain")
            .field("length", &self.0.len())
            .field("serials", &self.serials())
            .finish()
    }
}
