use std::path::Path;
use std::time::SystemTime;

/// Filesystem access consumed by the refresher.
pub trait FileSystem: Send + Sync {
    fn modified(&self, path: &Path) -> std::io::Result<SystemTime>;

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}
