//! Scoped background work owned by a component.

use std::future::Future;

use tokio::task::JoinHandle;

/// Handle to a task driving a mounted component.
///
/// The task is aborted when the handle is cancelled or dropped, so a
/// component that goes away never leaves a timer or listener behind.
#[derive(Debug)]
pub struct Subscription {
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    /// Spawn `task` on the current runtime and tie it to the returned handle.
    #[must_use = "dropping a Subscription cancels its task immediately"]
    pub fn spawn<F>(task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(task)),
        }
    }

    /// Whether the task is still scheduled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Wait for the task to finish on its own.
    pub async fn join(mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if let Err(e) = handle.await
            && e.is_panic()
        {
            tracing::error!(error = %e, "Component task panicked");
        }
    }

    /// Abort the task. Calling this more than once is harmless.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
