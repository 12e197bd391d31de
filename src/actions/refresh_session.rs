use chrono::{Duration, Utc};

use crate::api::AuthApi;
use crate::events::{SessionEvent, dispatch};
use crate::jwt::SessionToken;
use crate::{ClientError, SecretString};

/// Configuration for session refresh.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// How long to wait for the refresh endpoint before giving up.
    ///
    /// Default: 5 seconds
    pub timeout: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::seconds(5),
        }
    }
}

impl RefreshConfig {
    pub fn from_timing(timing: &crate::config::SessionTiming) -> Self {
        Self {
            timeout: timing.refresh_timeout,
        }
    }
}

/// Exchanges the current token for a new one.
///
/// One attempt per call; retrying is left to the user.
pub struct RefreshSessionAction<A: AuthApi> {
    api: A,
    config: RefreshConfig,
}

impl<A: AuthApi> RefreshSessionAction<A> {
    pub fn new(api: A) -> Self {
        Self::with_config(api, RefreshConfig::default())
    }

    pub fn with_config(api: A, config: RefreshConfig) -> Self {
        RefreshSessionAction { api, config }
    }

    /// # Returns
    ///
    /// - `Ok(SessionToken)` - the new token, decoded
    /// - `Err(ClientError::RefreshTimeout)` - no answer within the timeout
    /// - `Err(_)` - the endpoint failed or returned an unreadable token
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "refresh_session", skip_all, err)
    )]
    pub async fn execute(&self, current: &SecretString) -> Result<SessionToken, ClientError> {
        let result = self.request(current).await;

        match result {
            Ok(session) => {
                let expires_at = session.expires_at()?;
                dispatch(SessionEvent::SessionRefreshed {
                    expires_at,
                    at: Utc::now(),
                })
                .await;

                log::info!(
                    target: "grc_session",
                    "msg=\"session refreshed\" expires_at=\"{expires_at}\""
                );
                Ok(session)
            }
            Err(err) => {
                dispatch(SessionEvent::RefreshFailed {
                    reason: err.to_string(),
                    at: Utc::now(),
                })
                .await;

                log::warn!(
                    target: "grc_session",
                    "msg=\"session refresh failed\" error=\"{err}\""
                );
                Err(err)
            }
        }
    }

    async fn request(&self, current: &SecretString) -> Result<SessionToken, ClientError> {
        if current.is_empty() {
            return Err(ClientError::TokenMissing);
        }

        let timeout = self
            .config
            .timeout
            .to_std()
            .map_err(|e| ClientError::ConfigurationError(e.to_string()))?;

        let token = tokio::time::timeout(timeout, self.api.refresh(current))
            .await
            .map_err(|_| ClientError::RefreshTimeout)??;

        SessionToken::parse(token)
    }
}
