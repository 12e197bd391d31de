use chrono::{DateTime, Utc};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutReason {
    /// The user asked to log out.
    Manual,
    /// The token ran out before it was refreshed.
    Expired,
}

impl LogoutReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Expired => "expired",
        }
    }
}

/// Session events emitted by the monitor and the session actions.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A token was established through login or found in storage.
    ///
    /// Not fired for a persisted token that is already past `exp`; that
    /// session only produces `LoggedOut`.
    SessionStarted {
        expires_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    /// The session entered the warning window.
    WarningEntered {
        time_left_ms: i64,
        at: DateTime<Utc>,
    },
    /// The session entered its final seconds; the blocking indicator is up.
    ExpiryImminent { at: DateTime<Utc> },
    SessionRefreshed {
        expires_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    RefreshFailed { reason: String, at: DateTime<Utc> },
    LoggedOut {
        reason: LogoutReason,
        at: DateTime<Utc>,
    },
}

impl SessionEvent {
    /// Returns a dot-separated event name for logging/tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SessionStarted { .. } => "session.started",
            Self::WarningEntered { .. } => "session.warning",
            Self::ExpiryImminent { .. } => "session.expiry_imminent",
            Self::SessionRefreshed { .. } => "session.refreshed",
            Self::RefreshFailed { .. } => "session.refresh_failed",
            Self::LoggedOut { .. } => "session.logged_out",
        }
    }

    /// Returns the timestamp when this event occurred.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::SessionStarted { at, .. }
            | Self::WarningEntered { at, .. }
            | Self::ExpiryImminent { at }
            | Self::SessionRefreshed { at, .. }
            | Self::RefreshFailed { at, .. }
            | Self::LoggedOut { at, .. } => *at,
        }
    }
}
