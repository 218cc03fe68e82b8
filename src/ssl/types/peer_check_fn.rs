use crate::ssl::structs::peer_certificate_check::PeerCertificateCheck;
use crate::ssl::structs::peer_rejected_error::PeerRejectedError;
use std::sync::Arc;

pub type PeerCheckFn = Arc<dyn Fn(&PeerCertificateCheck<'_>) -> Result<(), PeerRejectedError> + Send + Sync>;
