#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::{AuthApi, Credentials, Profile};
use crate::{ClientError, SecretString};

/// Scripted [`AuthApi`] for tests.
///
/// Refresh results are consumed in order; once the script runs out every
/// refresh fails with `TokenInvalid`.
#[derive(Clone, Default)]
pub struct MockAuthApi {
    login_token: Arc<Mutex<Option<String>>>,
    profile: Arc<Mutex<Profile>>,
    refresh_results: Arc<Mutex<VecDeque<Result<String, ClientError>>>>,
    refresh_delay: Option<Duration>,
    refresh_calls: Arc<AtomicUsize>,
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_login_token(self, token: impl Into<String>) -> Self {
        *self.login_token.lock().unwrap() = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_profile(self, profile: Profile) -> Self {
        *self.profile.lock().unwrap() = profile;
        self
    }

    /// Queues a successful refresh returning `token`.
    #[must_use]
    pub fn with_refreshed_token(self, token: impl Into<String>) -> Self {
        self.refresh_results.lock().unwrap().push_back(Ok(token.into()));
        self
    }

    /// Queues a failed refresh.
    #[must_use]
    pub fn with_refresh_error(self, error: ClientError) -> Self {
        self.refresh_results.lock().unwrap().push_back(Err(error));
        self
    }

    /// Delays every refresh, to exercise the client-side timeout.
    #[must_use]
    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = Some(delay);
        self
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, _credentials: &Credentials) -> Result<SecretString, ClientError> {
        let token = self.login_token.lock().unwrap().clone();
        token.map(SecretString::new).ok_or(ClientError::Api {
            status: 401,
            message: "Correo o contraseña incorrectos".to_owned(),
        })
    }

    async fn fetch_profile(&self, token: &SecretString) -> Result<Profile, ClientError> {
        if token.is_empty() {
            return Err(ClientError::TokenMissing);
        }
        Ok(self.profile.lock().unwrap().clone())
    }

    async fn refresh(&self, _token: &SecretString) -> Result<SecretString, ClientError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.refresh_delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.refresh_results.lock().unwrap().pop_front();
        next.unwrap_or(Err(ClientError::TokenInvalid))
            .map(SecretString::new)
    }
}
