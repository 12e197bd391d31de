pub mod actions;
pub mod api;
pub mod audit_program;
pub mod authz;
pub mod config;
pub mod events;
pub mod jwt;
pub mod notifications;
pub mod secret;
pub mod session;
pub mod storage;

pub use actions::{LoadProfileAction, LoginAction, LogoutAction, RefreshSessionAction};
pub use api::{ApiClient, AuthApi, Credentials, Envelope, Profile, StatusMessages};
pub use audit_program::{AuditProgram, PhaseStatus, ProgramStatus, StatusColor, status_color};
pub use authz::{PermissionSet, has_all};
pub use config::{ApiConfig, ClientConfig, NotificationConfig, SessionTiming};
pub use events::{SessionEvent, register_event_listeners};
pub use notifications::{Notification, Severity};
pub use secret::SecretString;
pub use session::{MonitorHandle, SessionContext, SessionMonitor, SessionState};
pub use storage::{FileSessionStorage, InMemorySessionStorage, SessionStorage};

#[cfg(any(test, feature = "mocks"))]
pub use api::MockAuthApi;

use std::fmt;

/// Message shown when the backend cannot be reached at all.
pub const UNREACHABLE_MESSAGE: &str = "No se pudo conectar con el servidor";

#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    TokenMissing,
    TokenInvalid,
    TokenExpired,
    RefreshTimeout,
    Api { status: u16, message: String },
    Unreachable(String),
    Request(String),
    Serialization(String),
    Storage(String),
    ConfigurationError(String),
}

impl ClientError {
    /// Text surfaced to the user in a notification.
    ///
    /// Mapped API errors use their localized message, unreachable servers get a
    /// fixed generic message, everything else shows its raw text.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Unreachable(_) => UNREACHABLE_MESSAGE.to_owned(),
            ClientError::RefreshTimeout => "No se pudo extender la sesión a tiempo".to_owned(),
            other => other.to_string(),
        }
    }

    /// Returns the HTTP status for errors that came back from the backend.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::error::Error for ClientError {}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::TokenMissing => write!(f, "No active session token"),
            ClientError::TokenInvalid => write!(f, "Invalid token"),
            ClientError::TokenExpired => write!(f, "Token has expired"),
            ClientError::RefreshTimeout => write!(f, "Session refresh timed out"),
            ClientError::Api { status, message } => write!(f, "{message} (HTTP {status})"),
            ClientError::Unreachable(msg) => write!(f, "Server unreachable: {msg}"),
            ClientError::Request(msg) => write!(f, "{msg}"),
            ClientError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            ClientError::Storage(msg) => write!(f, "Storage error: {msg}"),
            ClientError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_api_error_uses_mapped_text() {
        let err = ClientError::Api {
            status: 404,
            message: "No se encontró el riesgo".to_owned(),
        };
        assert_eq!(err.user_message(), "No se encontró el riesgo");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_user_message_for_unreachable_is_generic() {
        let err = ClientError::Unreachable("connection refused".to_owned());
        assert_eq!(err.user_message(), UNREACHABLE_MESSAGE);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_user_message_for_other_errors_is_raw() {
        let err = ClientError::Request("builder error".to_owned());
        assert_eq!(err.user_message(), "builder error");
    }
}
