use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::monitor::SessionMonitor;
use super::state::{SessionState, TickOutcome};
use crate::api::AuthApi;
use crate::storage::SessionStorage;
use crate::ClientError;

/// Owns the background poll task started by [`SessionMonitor::spawn`].
///
/// Dropping the handle aborts the task; no tick runs after that.
pub struct MonitorHandle {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl MonitorHandle {
    /// Signals the task to stop and waits for it to finish its current tick.
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    /// Waits for the task to end on its own, after a forced logout.
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<S, A> SessionMonitor<S, A>
where
    S: SessionStorage + Clone + 'static,
    A: AuthApi + Clone + 'static,
{
    /// Starts ticking every `poll_interval` on the current runtime.
    ///
    /// Ticks never overlap: a slow tick delays the next one. The task ends
    /// by itself once a tick logs the session out.
    pub fn spawn(self: &Arc<Self>) -> Result<MonitorHandle, ClientError> {
        let period = self
            .timing()
            .poll_interval
            .to_std()
            .map_err(|e| ClientError::ConfigurationError(e.to_string()))?;

        let monitor = Arc::clone(self);
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => break,
                    _ = interval.tick() => {
                        match monitor.tick().await {
                            Ok(TickOutcome::Continue) => {}
                            Ok(TickOutcome::Stop) => break,
                            Err(err) => {
                                log::warn!(
                                    target: "grc_session",
                                    "msg=\"session tick failed\" error=\"{err}\""
                                );
                                // forced logout happened even though storage failed
                                if monitor.state() == SessionState::LoggedOut {
                                    break;
                                }
                            }
                        }
                    }
                }
            }

            log::debug!(target: "grc_session", "msg=\"session monitor stopped\"");
        });

        Ok(MonitorHandle {
            shutdown,
            task: Some(task),
        })
    }
}
