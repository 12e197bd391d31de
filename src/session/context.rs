use chrono::{DateTime, Utc};

use crate::api::Profile;
use crate::authz::PermissionSet;
use crate::jwt::SessionToken;
use crate::storage::{SessionStorage, TOKEN_KEY};
use crate::{ClientError, SecretString};

/// In-memory session state shared by the monitor and permission checks.
///
/// Built once from the persisted token with [`SessionContext::init`] and
/// emptied with [`SessionContext::teardown`] on logout.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    session: Option<SessionToken>,
    profile: Option<Profile>,
}

impl SessionContext {
    /// A context with no session.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the persisted token.
    ///
    /// A missing or undecodable token yields an empty context; storage is not
    /// touched either way.
    pub async fn init<S: SessionStorage + ?Sized>(storage: &S) -> Result<Self, ClientError> {
        let Some(raw) = storage.get(TOKEN_KEY).await? else {
            return Ok(Self::empty());
        };

        match SessionToken::parse(raw) {
            Ok(session) => Ok(Self {
                session: Some(session),
                profile: None,
            }),
            Err(err) => {
                log::debug!(
                    target: "grc_session",
                    "msg=\"persisted token ignored\" error=\"{err}\""
                );
                Ok(Self::empty())
            }
        }
    }

    /// Starts a new session, dropping any profile from the previous one.
    pub fn establish(&mut self, session: SessionToken) {
        self.session = Some(session);
        self.profile = None;
    }

    /// Swaps in a refreshed token for the same user.
    pub fn replace_token(&mut self, session: SessionToken) {
        self.session = Some(session);
    }

    pub fn teardown(&mut self) {
        self.session = None;
        self.profile = None;
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SessionToken> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&SecretString> {
        self.session.as_ref().map(SessionToken::token)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.session.as_ref().and_then(|s| s.expires_at().ok())
    }

    pub fn time_left_ms(&self, now: DateTime<Utc>) -> Option<i64> {
        self.session.as_ref().map(|s| s.time_left_ms(now))
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    /// Permissions of the loaded profile; empty until one is loaded.
    pub fn permissions(&self) -> PermissionSet {
        self.profile
            .as_ref()
            .map(|p| p.permissions.clone())
            .unwrap_or_default()
    }
}
