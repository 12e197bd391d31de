use std::sync::OnceLock;

use super::{Listener, SessionEvent};

static REGISTRY: OnceLock<EventRegistry> = OnceLock::new();

/// Process-wide list of session listeners.
///
/// Every monitor and session action in the process shares it, so one UI
/// listener sees the warning, expiry and logout of whichever session is live.
pub struct EventRegistry {
    listeners: Vec<Box<dyn Listener>>,
}

impl EventRegistry {
    fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Listeners are called in the order they are registered.
    pub fn listen(&mut self, listener: impl Listener) -> &mut Self {
        self.listeners.push(Box::new(listener));
        self
    }

    async fn dispatch(&self, event: &SessionEvent) {
        for listener in &self.listeners {
            listener.handle(event).await;
        }
    }
}

/// Installs the session listeners, once, before the monitor is created.
///
/// Only the first call takes effect; later calls log a warning and are
/// ignored. Events dispatched before registration are dropped, including the
/// `SessionStarted` of a session restored from storage.
///
/// ```rust,ignore
/// use grc_session::events::listeners::LoggingListener;
/// use grc_session::{SessionMonitor, SessionTiming, register_event_listeners};
///
/// register_event_listeners(|registry| {
///     registry
///         .listen(LoggingListener::with_level(log::Level::Debug))
///         .listen(WarningDialog::new(ui.clone()))
///         .listen(LoginRedirect::new(router.clone()));
/// });
///
/// let monitor = SessionMonitor::new(storage, api, SessionTiming::default()).await?;
/// ```
pub fn register_event_listeners<F>(f: F)
where
    F: FnOnce(&mut EventRegistry),
{
    let mut registry = EventRegistry::new();
    f(&mut registry);
    if REGISTRY.set(registry).is_err() {
        log::warn!(
            target: "grc_session",
            "register_event_listeners called more than once, ignoring"
        );
    }
}

/// Hands `event` to each listener in registration order, awaiting each one.
///
/// A no-op until [`register_event_listeners`] has run.
pub async fn dispatch(event: SessionEvent) {
    if let Some(registry) = REGISTRY.get() {
        registry.dispatch(&event).await;
    }
}
