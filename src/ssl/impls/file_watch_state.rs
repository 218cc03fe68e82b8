use crate::ssl::structs::file_watch_state::FileWatchState;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

impl FileWatchState {
    pub fn new(key_path: impl Into<PathBuf>, cert_path: impl Into<PathBuf>) -> Self {
        Self {
            key_path: key_path.into(),
            cert_path: cert_path.into(),
            last_key_modified: None,
            last_cert_modified: None,
        }
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    pub fn cert_path(&self) -> &Path {
        &self.cert_path
    }

    pub fn last_key_modified(&self) -> Option<SystemTime> {
        self.last_key_modified
    }

    pub fn last_cert_modified(&self) -> Option<SystemTime> {
        self.last_cert_modified
    }

    /// Joint-change gate: both timestamps must differ from the last applied pair.
    pub fn has_both_changed(&self, key_modified: SystemTime, cert_modified: SystemTime) -> bool {
        self.last_key_modified != Some(key_modified) && self.last_cert_modified != Some(cert_modified)
    }

    /// Records a successfully published pair. Only called after the store was updated.
    pub(crate) fn advance(&mut self, key_modified: SystemTime, cert_modified: SystemTime) {
        self.last_key_modified = Some(key_modified);
        self.last_cert_modified = Some(cert_modified);
    }
}
