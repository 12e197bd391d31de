use async_trait::async_trait;

use super::SessionEvent;

/// Trait for handling session events asynchronously.
///
/// # Example
///
/// ```rust,ignore
/// use grc_session::events::{Listener, SessionEvent};
/// use async_trait::async_trait;
///
/// struct Snackbar {
///     tx: tokio::sync::mpsc::Sender<String>,
/// }
///
/// #[async_trait]
/// impl Listener for Snackbar {
///     async fn handle(&self, event: &SessionEvent) {
///         if let SessionEvent::RefreshFailed { reason, .. } = event {
///             let _ = self.tx.send(reason.clone()).await;
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Listener: Send + Sync + 'static {
    async fn handle(&self, event: &SessionEvent);
}
