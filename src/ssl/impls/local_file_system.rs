use crate::ssl::structs::local_file_system::LocalFileSystem;
use crate::ssl::traits::file_system::FileSystem;
use std::path::Path;
use std::time::SystemTime;

impl FileSystem for LocalFileSystem {
    fn modified(&self, path: &Path) -> std::io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
