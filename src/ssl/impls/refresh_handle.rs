use crate::ssl::structs::refresh_handle::RefreshHandle;

impl std::fmt::Debug for RefreshHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshHandle")
            .field("cancelled", &self.is_cancelled())
            .field("finished", &self.is_finished())
            .finish()
    }
}

impl RefreshHandle {
    /// Stops future ticks. A tick already running completes, and the active
    /// identity is left as it is.
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancels and waits for the refresh task to exit.
    pub async fn shutdown(self) {
        self.cancel();
        if let Err(error) = self.task.await {
            log::error!("[REFRESH] Refresh task ended abnormally: {}", error);
        }
    }
}
