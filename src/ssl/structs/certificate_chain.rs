use crate::ssl::structs::certificate::Certificate;
use std::sync::Arc;

/// Ordered certificate chain, leaf first.
///
/// The slice is shared and never mutable, so handing out a clone is as safe
/// as a defensive copy.
#[derive(Clone)]
pub struct CertificateChain(pub(crate) Arc<[Certificate]>);
