use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, watch};

use super::context::SessionContext;
use super::state::{SessionPhase, SessionState, TickOutcome, classify};
use crate::actions::{LoadProfileAction, LoginAction, LogoutAction, RefreshConfig, RefreshSessionAction};
use crate::api::{AuthApi, Credentials, Profile};
use crate::authz::PermissionSet;
use crate::config::SessionTiming;
use crate::events::{LogoutReason, SessionEvent, dispatch};
use crate::jwt::SessionToken;
use crate::storage::{EXPIRED_AT_KEY, SessionStorage, TOKEN_KEY};
use crate::{ClientError, SecretString};

struct MonitorInner {
    context: SessionContext,
    /// Mirrors whether `expiredAt` is in storage, so ticks don't re-read it.
    marker_present: bool,
}

/// Tracks the bearer token's remaining lifetime and drives the session
/// through its display states.
///
/// The persisted token and the `expiredAt` marker are written only here and
/// by [`LoginAction`]. Ticks, refreshes and logouts are serialized on one
/// lock; a refresh releases it while the request is in flight.
///
/// # Example
///
/// ```rust,ignore
/// let monitor = Arc::new(SessionMonitor::new(storage, api, SessionTiming::default()).await?);
/// let handle = monitor.spawn()?;
/// let mut states = monitor.subscribe();
/// while states.changed().await.is_ok() {
///     render(*states.borrow());
/// }
/// handle.stop().await;
/// ```
pub struct SessionMonitor<S, A>
where
    S: SessionStorage + Clone,
    A: AuthApi + Clone,
{
    storage: S,
    timing: SessionTiming,
    login: LoginAction<A, S>,
    load_profile: LoadProfileAction<A>,
    refresh: RefreshSessionAction<A>,
    logout: LogoutAction<S>,
    inner: Mutex<MonitorInner>,
    state: watch::Sender<SessionState>,
}

impl<S, A> SessionMonitor<S, A>
where
    S: SessionStorage + Clone,
    A: AuthApi + Clone,
{
    /// Builds the monitor from whatever session is persisted.
    ///
    /// A decodable token with an `expiredAt` marker next to it starts in
    /// [`SessionState::Expired`], so a reload during the final seconds keeps
    /// the blocking indicator instead of flashing a normal view.
    pub async fn new(storage: S, api: A, timing: SessionTiming) -> Result<Self, ClientError> {
        timing.validate()?;

        let context = SessionContext::init(&storage).await?;
        let marker_present = storage.contains(EXPIRED_AT_KEY).await?;
        let now = Utc::now();

        let initial = match context.time_left_ms(now) {
            None => SessionState::Inactive,
            Some(_) if marker_present => SessionState::Expired,
            Some(time_left_ms) => {
                SessionState::from_phase(classify(time_left_ms, &timing), time_left_ms)
            }
        };

        // a token already past exp is logged out on the first tick instead
        let restored = context.time_left_ms(now).is_some_and(|left| left >= 0);
        if let Some(expires_at) = context.expires_at().filter(|_| restored) {
            log::info!(
                target: "grc_session",
                "msg=\"session restored\" expires_at=\"{expires_at}\" state=\"{initial:?}\""
            );
            dispatch(SessionEvent::SessionStarted { expires_at, at: now }).await;
        }

        let (state, _) = watch::channel(initial);

        Ok(Self {
            login: LoginAction::new(api.clone(), storage.clone()),
            load_profile: LoadProfileAction::new(api.clone()),
            refresh: RefreshSessionAction::with_config(api, RefreshConfig::from_timing(&timing)),
            logout: LogoutAction::new(storage.clone()),
            storage,
            timing,
            inner: Mutex::new(MonitorInner {
                context,
                marker_present,
            }),
            state,
        })
    }

    pub fn timing(&self) -> &SessionTiming {
        &self.timing
    }

    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    /// Receives every published state, including the per-tick countdown
    /// while in [`SessionState::Warning`].
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub async fn token(&self) -> Option<SecretString> {
        self.inner.lock().await.context.token().cloned()
    }

    pub async fn profile(&self) -> Option<Profile> {
        self.inner.lock().await.context.profile().cloned()
    }

    pub async fn permissions(&self) -> PermissionSet {
        self.inner.lock().await.context.permissions()
    }

    pub async fn tick(&self) -> Result<TickOutcome, ClientError> {
        self.tick_at(Utc::now()).await
    }

    /// Evaluates one poll step as of `now`.
    ///
    /// Inert without an active session.
    pub async fn tick_at(&self, now: DateTime<Utc>) -> Result<TickOutcome, ClientError> {
        let mut inner = self.inner.lock().await;

        let Some(time_left_ms) = inner.context.time_left_ms(now) else {
            return Ok(TickOutcome::Continue);
        };

        match classify(time_left_ms, &self.timing) {
            SessionPhase::Dead => {
                self.end_session(&mut inner, LogoutReason::Expired).await?;
                Ok(TickOutcome::Stop)
            }
            SessionPhase::ExpiryImminent => {
                if !inner.marker_present {
                    self.storage
                        .set(EXPIRED_AT_KEY, &now.timestamp_millis().to_string())
                        .await?;
                    inner.marker_present = true;
                }
                if self.publish(SessionState::Expired) {
                    log::warn!(
                        target: "grc_session",
                        "msg=\"session expiry imminent\" time_left_ms={time_left_ms}"
                    );
                    dispatch(SessionEvent::ExpiryImminent { at: now }).await;
                }
                Ok(TickOutcome::Continue)
            }
            phase => {
                self.clear_marker(&mut inner).await?;
                let entered_warning = phase == SessionPhase::Warning && !self.state().is_warning();
                self.publish(SessionState::from_phase(phase, time_left_ms));
                if entered_warning {
                    log::info!(
                        target: "grc_session",
                        "msg=\"session warning\" time_left_ms={time_left_ms}"
                    );
                    dispatch(SessionEvent::WarningEntered { time_left_ms, at: now }).await;
                }
                Ok(TickOutcome::Continue)
            }
        }
    }

    /// Adopts a token obtained outside [`SessionMonitor::login`].
    pub async fn establish(&self, token: impl Into<SecretString>) -> Result<SessionToken, ClientError> {
        let session = SessionToken::parse(token)?;
        let expires_at = session.expires_at()?;

        let mut inner = self.inner.lock().await;
        self.storage
            .set(TOKEN_KEY, session.token().expose_secret())
            .await?;
        self.storage.remove(EXPIRED_AT_KEY).await?;
        inner.marker_present = false;
        inner.context.establish(session.clone());
        self.publish_classified(&session, Utc::now());

        dispatch(SessionEvent::SessionStarted {
            expires_at,
            at: Utc::now(),
        })
        .await;

        Ok(session)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ClientError> {
        let session = self.login.execute(credentials).await?;

        let mut inner = self.inner.lock().await;
        inner.marker_present = false;
        inner.context.establish(session.clone());
        self.publish_classified(&session, Utc::now());

        Ok(session)
    }

    /// Fetches the profile for the current token and keeps it in the context.
    pub async fn load_profile(&self) -> Result<Profile, ClientError> {
        let token = self.current_token().await?;
        let profile = self.load_profile.execute(&token).await?;

        let mut inner = self.inner.lock().await;
        if inner.context.token() != Some(&token) {
            return Err(ClientError::TokenMissing);
        }
        inner.context.set_profile(profile.clone());

        Ok(profile)
    }

    /// Extends the session.
    ///
    /// A single attempt bounded by `refresh_timeout`. On failure the state is
    /// left as it was and the error is returned for the caller to surface.
    /// If the session ended while the request was in flight the new token is
    /// discarded.
    pub async fn refresh(&self) -> Result<SessionToken, ClientError> {
        let token = self.current_token().await?;
        let session = self.refresh.execute(&token).await?;

        let mut inner = self.inner.lock().await;
        if inner.context.token() != Some(&token) {
            log::info!(
                target: "grc_session",
                "msg=\"refreshed token discarded\" reason=\"session changed\""
            );
            return Err(ClientError::TokenMissing);
        }

        self.storage
            .set(TOKEN_KEY, session.token().expose_secret())
            .await?;
        self.clear_marker(&mut inner).await?;
        inner.context.replace_token(session.clone());
        self.publish_classified(&session, Utc::now());

        Ok(session)
    }

    /// Manual logout.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let mut inner = self.inner.lock().await;
        self.end_session(&mut inner, LogoutReason::Manual).await
    }

    /// Logs out in memory unconditionally, then reports whether storage was
    /// wiped. A token left behind by a failed wipe is dead or manually
    /// abandoned, and the next start logs it out again.
    async fn end_session(
        &self,
        inner: &mut MonitorInner,
        reason: LogoutReason,
    ) -> Result<(), ClientError> {
        let cleared = self.logout.execute(reason).await;
        inner.context.teardown();
        inner.marker_present = false;
        self.publish(SessionState::LoggedOut);
        cleared
    }

    async fn current_token(&self) -> Result<SecretString, ClientError> {
        self.inner
            .lock()
            .await
            .context
            .token()
            .cloned()
            .ok_or(ClientError::TokenMissing)
    }

    async fn clear_marker(&self, inner: &mut MonitorInner) -> Result<(), ClientError> {
        if inner.marker_present {
            self.storage.remove(EXPIRED_AT_KEY).await?;
            inner.marker_present = false;
        }
        Ok(())
    }

    fn publish_classified(&self, session: &SessionToken, now: DateTime<Utc>) {
        let time_left_ms = session.time_left_ms(now);
        self.publish(SessionState::from_phase(
            classify(time_left_ms, &self.timing),
            time_left_ms,
        ));
    }

    /// Returns true if the state changed.
    fn publish(&self, next: SessionState) -> bool {
        self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};

    use super::*;
    use crate::jwt::TokenClaims;
    use crate::{InMemorySessionStorage, MockAuthApi};

    fn mint(exp: DateTime<Utc>) -> String {
        let claims = TokenClaims {
            exp: exp.timestamp(),
            iat: None,
            sub: None,
        };
        jsonwebtoken::encode(&Header::default(), &claims, &EncodingKey::from_secret(b"k")).unwrap()
    }

    #[tokio::test]
    async fn test_starts_inactive_without_token() {
        let monitor = SessionMonitor::new(
            InMemorySessionStorage::new(),
            MockAuthApi::new(),
            SessionTiming::default(),
        )
        .await
        .unwrap();

        assert_eq!(monitor.state(), SessionState::Inactive);
        assert_eq!(monitor.tick().await.unwrap(), TickOutcome::Continue);
        assert_eq!(monitor.state(), SessionState::Inactive);
    }

    #[tokio::test]
    async fn test_rejects_invalid_timing() {
        let timing = SessionTiming {
            expiry_cutoff: Duration::seconds(90),
            ..Default::default()
        };
        let result =
            SessionMonitor::new(InMemorySessionStorage::new(), MockAuthApi::new(), timing).await;
        assert!(matches!(result, Err(ClientError::ConfigurationError(_))));
    }

    #[tokio::test]
    async fn test_warning_entry_published_once_then_counts_down() {
        let exp = Utc::now() + Duration::minutes(10);
        let storage = InMemorySessionStorage::new();
        storage.set(TOKEN_KEY, &mint(exp)).await.unwrap();
        let monitor = SessionMonitor::new(storage, MockAuthApi::new(), SessionTiming::default())
            .await
            .unwrap();

        monitor.tick_at(exp - Duration::seconds(30)).await.unwrap();
        assert_eq!(monitor.state(), SessionState::Warning { time_left_ms: 30_000 });

        monitor.tick_at(exp - Duration::seconds(29)).await.unwrap();
        assert_eq!(monitor.state(), SessionState::Warning { time_left_ms: 29_000 });
    }

    #[tokio::test]
    async fn test_establish_rejects_garbage() {
        let storage = InMemorySessionStorage::new();
        let monitor = SessionMonitor::new(storage.clone(), MockAuthApi::new(), SessionTiming::default())
            .await
            .unwrap();

        let err = monitor.establish("garbage").await.unwrap_err();

        assert_eq!(err, ClientError::TokenInvalid);
        assert!(storage.is_empty());
        assert_eq!(monitor.state(), SessionState::Inactive);
    }

    #[tokio::test]
    async fn test_refresh_without_session() {
        let monitor = SessionMonitor::new(
            InMemorySessionStorage::new(),
            MockAuthApi::new(),
            SessionTiming::default(),
        )
        .await
        .unwrap();

        assert_eq!(monitor.refresh().await.unwrap_err(), ClientError::TokenMissing);
    }
}
