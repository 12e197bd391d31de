use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ClientError;

/// Claims the client reads from a bearer token.
///
/// Only `exp` is required; the rest is carried when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
    /// Issued at time (Unix timestamp, seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Subject, usually the user identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl TokenClaims {
    /// Absolute expiry as a UTC timestamp.
    pub fn expires_at(&self) -> Result<DateTime<Utc>, ClientError> {
        DateTime::from_timestamp(self.exp, 0).ok_or(ClientError::TokenInvalid)
    }

    /// `exp * 1000`, the value compared against the wall clock.
    pub fn expires_at_ms(&self) -> i64 {
        self.exp.saturating_mul(1000)
    }

    /// Milliseconds until expiry; negative once the token is dead.
    pub fn time_left_ms(&self, now: DateTime<Utc>) -> i64 {
        self.expires_at_ms() - now.timestamp_millis()
    }
}
