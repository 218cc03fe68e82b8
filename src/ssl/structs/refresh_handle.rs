use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Returned by periodic refresh. Dropping it detaches the task; call
/// [`RefreshHandle::cancel`] to stop future ticks.
pub struct RefreshHandle {
    pub(crate) cancel: watch::Sender<bool>,
    pub(crate) task: JoinHandle<()>,
}
