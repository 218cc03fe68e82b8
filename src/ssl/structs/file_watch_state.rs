use std::path::PathBuf;
use std::time::SystemTime;

/// Owned by exactly one refresher. `None` means nothing was loaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWatchState {
    pub(crate) key_path: PathBuf,
    pub(crate) cert_path: PathBuf,
    pub(crate) last_key_modified: Option<SystemTime>,
    pub(crate) last_cert_modified: Option<SystemTime>,
}
