use crate::ssl::enums::credential_error::CredentialError;
use crate::ssl::enums::refresh_outcome::RefreshOutcome;
use crate::ssl::pem::{decode_certificates, decode_private_key};
use crate::ssl::structs::credential_snapshot::CredentialSnapshot;
use crate::ssl::structs::credential_store::CredentialStore;
use crate::ssl::structs::file_refresher::FileRefresher;
use crate::ssl::structs::file_watch_state::FileWatchState;
use crate::ssl::structs::local_file_system::LocalFileSystem;
use crate::ssl::structs::refresh_handle::RefreshHandle;
use crate::ssl::traits::file_system::FileSystem;
use log::{error, info, trace, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

impl std::fmt::Debug for FileRefresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileRefresher")
            .field("state", &self.state)
            .finish()
    }
}

impl FileRefresher {
    pub fn new(key_path: impl Into<PathBuf>, cert_path: impl Into<PathBuf>) -> Self {
        Self::with_file_system(key_path, cert_path, Arc::new(LocalFileSystem))
    }

    pub fn with_file_system(
        key_path: impl Into<PathBuf>,
        cert_path: impl Into<PathBuf>,
        file_system: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            state: FileWatchState::new(key_path, cert_path),
            file_system,
        }
    }

    pub fn state(&self) -> &FileWatchState {
        &self.state
    }

    /// Runs one refresh cycle against `store`.
    ///
    /// The watch state only advances after a snapshot was published, so a
    /// failed stat, read or decode leaves both the store and the state as
    /// they were.
    pub fn tick(&mut self, store: &CredentialStore) -> Result<RefreshOutcome, CredentialError> {
        let key_modified = self.modified(&self.state.key_path)?;
        let cert_modified = self.modified(&self.state.cert_path)?;

        if !self.state.has_both_changed(key_modified, cert_modified) {
            trace!(
                "[REFRESH] Gate closed for {} / {}",
                self.state.key_path.display(),
                self.state.cert_path.display()
            );
            return Ok(RefreshOutcome::Unchanged);
        }

        let key_bytes = self.read(&self.state.key_path)?;
        let cert_bytes = self.read(&self.state.cert_path)?;
        let key = decode_private_key(&key_bytes)?;
        let chain = decode_certificates(&cert_bytes)?;
        let snapshot = store.set(CredentialSnapshot::new(key, chain)?);
        self.state.advance(key_modified, cert_modified);

        info!(
            "[REFRESH] Loaded identity from {} / {} (leaf serial {}, {} certificate(s))",
            self.state.key_path.display(),
            self.state.cert_path.display(),
            snapshot.leaf().serial(),
            snapshot.chain().len()
        );
        Ok(RefreshOutcome::Reloaded)
    }

    /// Scheduler-facing tick: failures are logged and reported, never returned.
    pub fn run_tick(&mut self, store: &CredentialStore) -> Option<RefreshOutcome> {
        match self.tick(store) {
            Ok(outcome) => Some(outcome),
            Err(error) => {
                error!(
                    "[REFRESH] Refresh of {} / {} failed, keeping current identity: {}",
                    self.state.key_path.display(),
                    self.state.cert_path.display(),
                    error
                );
                sentry::capture_error(&error);
                None
            }
        }
    }

    /// Starts ticking on `runtime` every `period`, first tick immediately.
    ///
    /// Ticks run one after another with a fixed delay between them. The
    /// refresher moves onto the blocking pool for each tick body and back, so
    /// two ticks never overlap.
    pub fn spawn(
        self,
        store: Arc<CredentialStore>,
        period: Duration,
        runtime: &tokio::runtime::Handle,
    ) -> RefreshHandle {
        let period = if period.is_zero() {
            warn!("[REFRESH] Refresh period of zero requested, using 1ms");
            Duration::from_millis(1)
        } else {
            period
        };
        let (cancel, mut cancelled) = watch::channel(false);
        let mut refresher = self;

        let task = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut handle_alive = true;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let store = Arc::clone(&store);
                        let tick = tokio::task::spawn_blocking(move || {
                            refresher.run_tick(&store);
                            refresher
                        });
                        refresher = match tick.await {
                            Ok(refresher) => refresher,
                            Err(error) => {
                                error!("[REFRESH] Tick aborted, stopping periodic refresh: {}", error);
                                return;
                            }
                        };
                    }
                    changed = cancelled.changed(), if handle_alive => {
                        match changed {
                            Ok(()) if *cancelled.borrow() => {
                                info!("[REFRESH] Periodic refresh cancelled");
                                return;
                            }
                            Ok(()) => {}
                            Err(_) => handle_alive = false,
                        }
                    }
                }
            }
        });

        RefreshHandle { cancel, task }
    }

    fn modified(&self, path: &Path) -> Result<SystemTime, CredentialError> {
        self.file_system
            .modified(path)
            .map_err(|e| CredentialError::io(path, e))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, CredentialError> {
        self.file_system
            .read(path)
            .map_err(|e| CredentialError::io(path, e))
    }
}
