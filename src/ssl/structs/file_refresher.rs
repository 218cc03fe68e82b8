use crate::ssl::structs::file_watch_state::FileWatchState;
use crate::ssl::traits::file_system::FileSystem;
use std::sync::Arc;

pub struct FileRefresher {
    pub(crate) state: FileWatchState,
    pub(crate) file_system: Arc<dyn FileSystem>,
}
