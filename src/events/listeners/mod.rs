//! Listeners shipped with the crate.
//!
//! Both only record events; UI reactions (warning dialog, snackbar, login
//! redirect) are listeners the embedding app writes.

mod logging;
#[cfg(feature = "tracing")]
mod tracing;

pub use logging::LoggingListener;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingListener;
