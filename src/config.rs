//! Configuration types for the session core.
//!
//! All time policy (polling cadence, warning and cutoff windows, request
//! timeouts) lives here so it can be tuned in one place.
//!
//! # Example
//!
//! ```rust
//! use grc_session::config::{ApiConfig, ClientConfig, SessionTiming};
//! use chrono::Duration;
//!
//! let config = ClientConfig {
//!     api: ApiConfig::new("https://grc.example.com/api"),
//!     session: SessionTiming {
//!         warning_window: Duration::seconds(90),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use chrono::Duration;

use crate::ClientError;

/// Top-level configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Backend location and request settings.
    pub api: ApiConfig,

    /// Session lifetime policy.
    pub session: SessionTiming,

    /// How long notifications stay on screen.
    pub notifications: NotificationConfig,
}

impl ClientConfig {
    /// Creates a configuration with defaults pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig::new(base_url),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        self.api.validate()?;
        self.session.validate()?;
        self.notifications.validate()
    }
}

/// Backend HTTP settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,

    /// Per-request timeout.
    ///
    /// Default: 30 seconds
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_owned(),
            request_timeout: Duration::seconds(30),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::ConfigurationError(
                "base_url must not be empty".to_owned(),
            ));
        }
        if self.request_timeout <= Duration::zero() {
            return Err(ClientError::ConfigurationError(
                "request_timeout must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Session lifetime policy.
///
/// The two windows are policy constants: the cutoff must leave a refresh
/// request time to complete, the warning window must give a person time to
/// react. Their ordering is what matters, `expiry_cutoff < warning_window`.
#[derive(Debug, Clone)]
pub struct SessionTiming {
    /// How often remaining lifetime is re-evaluated.
    ///
    /// Default: 1 second
    pub poll_interval: Duration,

    /// Remaining lifetime at or below which the warning is shown.
    ///
    /// Default: 65 seconds
    pub warning_window: Duration,

    /// Remaining lifetime at or below which the session is treated as expired.
    ///
    /// Default: 4 seconds
    pub expiry_cutoff: Duration,

    /// Upper bound on a single refresh request.
    ///
    /// Default: 5 seconds
    pub refresh_timeout: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            poll_interval: Duration::seconds(1),
            warning_window: Duration::seconds(65),
            expiry_cutoff: Duration::seconds(4),
            refresh_timeout: Duration::seconds(5),
        }
    }
}

impl SessionTiming {
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub fn with_refresh_timeout(mut self, timeout: Duration) -> Self {
        self.refresh_timeout = timeout;
        self
    }

    #[inline]
    pub fn warning_window_ms(&self) -> i64 {
        self.warning_window.num_milliseconds()
    }

    #[inline]
    pub fn expiry_cutoff_ms(&self) -> i64 {
        self.expiry_cutoff.num_milliseconds()
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.poll_interval <= Duration::zero() {
            return Err(ClientError::ConfigurationError(
                "poll_interval must be positive".to_owned(),
            ));
        }
        if self.refresh_timeout <= Duration::zero() {
            return Err(ClientError::ConfigurationError(
                "refresh_timeout must be positive".to_owned(),
            ));
        }
        if self.expiry_cutoff < Duration::zero() {
            return Err(ClientError::ConfigurationError(
                "expiry_cutoff must not be negative".to_owned(),
            ));
        }
        if self.expiry_cutoff >= self.warning_window {
            return Err(ClientError::ConfigurationError(format!(
                "expiry_cutoff ({}ms) must be shorter than warning_window ({}ms)",
                self.expiry_cutoff_ms(),
                self.warning_window_ms()
            )));
        }
        Ok(())
    }
}

/// Notification display settings.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// How long a notification stays visible before hiding itself.
    ///
    /// Default: 6 seconds
    pub auto_hide: Duration,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_hide: Duration::seconds(6),
        }
    }
}

impl NotificationConfig {
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.auto_hide <= Duration::zero() {
            return Err(ClientError::ConfigurationError(
                "auto_hide must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}
