use chrono::Utc;

use crate::events::{LogoutReason, SessionEvent, dispatch};
use crate::storage::SessionStorage;
use crate::ClientError;

/// Ends the session on this client.
///
/// Wipes every persisted key: the token, the `expiredAt` marker and any UI
/// convenience values (table filters, selected tabs). Tokens are not revoked
/// server-side; the backend has no logout endpoint.
///
/// `LoggedOut` is dispatched whether or not the wipe succeeded; a failed wipe
/// is still returned.
pub struct LogoutAction<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> LogoutAction<S> {
    pub fn new(storage: S) -> Self {
        LogoutAction { storage }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "logout", skip_all, fields(reason = reason.as_str()), err)
    )]
    pub async fn execute(&self, reason: LogoutReason) -> Result<(), ClientError> {
        // the session ends for listeners even if storage could not be wiped
        let cleared = self.storage.clear().await;

        dispatch(SessionEvent::LoggedOut {
            reason,
            at: Utc::now(),
        })
        .await;

        match &cleared {
            Ok(()) => log::info!(
                target: "grc_session",
                "msg=\"logout\" reason={}",
                reason.as_str()
            ),
            Err(err) => log::error!(
                target: "grc_session",
                "msg=\"logout storage not cleared\" reason={} error=\"{err}\"",
                reason.as_str()
            ),
        }

        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{EXPIRED_AT_KEY, TOKEN_KEY};
    use crate::InMemorySessionStorage;

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let storage = InMemorySessionStorage::new();
        storage.set(TOKEN_KEY, "abc").await.unwrap();
        storage.set(EXPIRED_AT_KEY, "1700000000000").await.unwrap();
        storage.set("controls.tab", "2").await.unwrap();

        let logout = LogoutAction::new(storage.clone());
        logout.execute(LogoutReason::Manual).await.unwrap();

        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_logout_on_empty_storage() {
        let logout = LogoutAction::new(InMemorySessionStorage::new());
        assert!(logout.execute(LogoutReason::Expired).await.is_ok());
    }
}
