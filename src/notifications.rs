//! User-facing notifications.
//!
//! Every error in the session and API layers ends up as a dismissible,
//! auto-hiding notification; none of them crash the running app.

use chrono::Duration;

use crate::ClientError;
use crate::config::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    /// How long the notification stays before hiding itself.
    pub auto_hide: Duration,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>, config: &NotificationConfig) -> Self {
        Self {
            severity,
            message: message.into(),
            auto_hide: config.auto_hide,
        }
    }

    pub fn success(message: impl Into<String>, config: &NotificationConfig) -> Self {
        Self::new(Severity::Success, message, config)
    }

    pub fn from_error(error: &ClientError, config: &NotificationConfig) -> Self {
        Self::new(Severity::Error, error.user_message(), config)
    }

    /// Notification shown when a session refresh fails.
    pub fn refresh_failed(error: &ClientError, config: &NotificationConfig) -> Self {
        let message = match error {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::RefreshTimeout | ClientError::Unreachable(_) => error.user_message(),
            _ => "No se pudo extender la sesión".to_owned(),
        };
        Self::new(Severity::Error, message, config)
    }
}
