//! Session lifecycle events.
//!
//! The monitor and the session actions fire events on every state
//! *transition* (not on every poll tick). With no listeners registered they
//! are dropped.
//!
//! ```rust,ignore
//! use grc_session::register_event_listeners;
//! use grc_session::events::listeners::LoggingListener;
//!
//! register_event_listeners(|registry| {
//!     registry.listen(LoggingListener::new());
//! });
//! ```
//!
//! Implement [`Listener`] to drive a UI: show the warning dialog on
//! [`SessionEvent::WarningEntered`], a snackbar on
//! [`SessionEvent::RefreshFailed`], navigate to the login route on
//! [`SessionEvent::LoggedOut`].

mod event;
mod listener;
mod registry;

pub mod listeners;

pub use event::{LogoutReason, SessionEvent};
pub use listener::Listener;
pub use registry::{EventRegistry, dispatch, register_event_listeners};
