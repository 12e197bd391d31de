use crate::api::{AuthApi, Profile};
use crate::{ClientError, SecretString};

/// Fetches the signed-in user's profile and permission set.
pub struct LoadProfileAction<A: AuthApi> {
    api: A,
}

impl<A: AuthApi> LoadProfileAction<A> {
    pub fn new(api: A) -> Self {
        LoadProfileAction { api }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "load_profile", skip_all, err)
    )]
    pub async fn execute(&self, token: &SecretString) -> Result<Profile, ClientError> {
        if token.is_empty() {
            return Err(ClientError::TokenMissing);
        }

        let profile = self.api.fetch_profile(token).await?;

        log::debug!(
            target: "grc_session",
            "msg=\"profile loaded\" permissions={}",
            profile.permissions.len()
        );

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockAuthApi;

    #[tokio::test]
    async fn test_load_profile() {
        let api = MockAuthApi::new()
            .with_profile(Profile::with_permissions(["update.execution.audit_program"]));
        let action = LoadProfileAction::new(api);

        let profile = action.execute(&SecretString::new("abc")).await.unwrap();

        assert!(profile.permissions.contains("update.execution.audit_program"));
    }

    #[tokio::test]
    async fn test_load_profile_requires_token() {
        let action = LoadProfileAction::new(MockAuthApi::new());
        let err = action.execute(&SecretString::new("")).await.unwrap_err();
        assert_eq!(err, ClientError::TokenMissing);
    }
}
