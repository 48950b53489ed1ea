//! Ownership of the single fetch issued by one mount.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::reading::ReadingSource;

/// Result of a mount's fetch, tagged with the mount that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingOutcome {
    pub mount: u64,
    pub result: Result<f64, String>,
}

/// One mount of the remote value display.
///
/// Spawns its fetch on construction and aborts it when dropped, so an
/// unmounted display never receives a value from its own task. Outcomes
/// already queued before the drop still carry the old mount id and are
/// discarded by the owner.
pub struct ReadingMount {
    id: u64,
    task: JoinHandle<()>,
}

impl ReadingMount {
    pub fn start<F>(id: u64, runtime: &Handle, source: Arc<dyn ReadingSource>, deliver: F) -> Self
    where
        F: FnOnce(ReadingOutcome) + Send + 'static,
    {
        tracing::debug!(mount = id, source = source.name(), "Issuing reading fetch");
        let task = runtime.spawn(async move {
            let result = source.fetch().await.map_err(|err| err.user_message());
            match &result {
                Ok(value) => tracing::info!(mount = id, value, "Reading resolved"),
                Err(message) => tracing::warn!(mount = id, %message, "Reading failed"),
            }
            deliver(ReadingOutcome { mount: id, result });
        });

        Self { id, task }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ReadingMount {
    fn drop(&mut self) {
        if !self.task.is_finished() {
            tracing::debug!(mount = self.id, "Aborting in-flight reading fetch");
        }
        self.task.abort();
    }
}
