use chrono::Utc;

use crate::api::{AuthApi, Credentials};
use crate::events::{SessionEvent, dispatch};
use crate::jwt::SessionToken;
use crate::storage::{EXPIRED_AT_KEY, SessionStorage, TOKEN_KEY};
use crate::ClientError;

/// The initial login flow: exchanges credentials for a token and persists it.
///
/// Together with the session monitor's refresh this is the only writer of the
/// persisted token.
pub struct LoginAction<A: AuthApi, S: SessionStorage> {
    api: A,
    storage: S,
}

impl<A: AuthApi, S: SessionStorage> LoginAction<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        LoginAction { api, storage }
    }

    /// # Returns
    ///
    /// - `Ok(SessionToken)` - token issued, decoded and stored
    /// - `Err(ClientError::Api { .. })` - credentials rejected
    /// - `Err(ClientError::TokenInvalid)` - the backend returned an unreadable token
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "login", skip_all, err)
    )]
    pub async fn execute(&self, credentials: &Credentials) -> Result<SessionToken, ClientError> {
        let token = self.api.login(credentials).await?;
        let session = SessionToken::parse(token)?;
        let expires_at = session.expires_at()?;

        self.storage
            .set(TOKEN_KEY, session.token().expose_secret())
            .await?;
        self.storage.remove(EXPIRED_AT_KEY).await?;

        dispatch(SessionEvent::SessionStarted {
            expires_at,
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "grc_session",
            "msg=\"login success\" expires_at=\"{expires_at}\""
        );

        Ok(session)
    }
}
