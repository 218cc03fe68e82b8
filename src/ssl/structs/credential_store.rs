use crate::ssl::structs::credential_snapshot::CredentialSnapshot;
use arc_swap::ArcSwapOption;

pub struct CredentialStore {
    pub(crate) current: ArcSwapOption<CredentialSnapshot>,
}
