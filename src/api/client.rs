use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{
    Credentials, Envelope, Profile, RefreshRequest, ResourceKind, ResourcePath, StatusMessages,
    TokenResponse,
};
use crate::audit_program::AuditProgram;
use crate::config::ApiConfig;
use crate::{ClientError, SecretString};

const LOGIN_PATH: &str = "auth/login";
const PROFILE_PATH: &str = "auth/profile";
const REFRESH_PATH: &str = "auth/refresh";

/// Authentication endpoints the session depends on.
///
/// [`ApiClient`] is the HTTP implementation; `MockAuthApi` (behind the `mocks`
/// feature) lets the session monitor be exercised without a server.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<SecretString, ClientError>;

    /// Fetches the signed-in user's profile, including permissions.
    async fn fetch_profile(&self, token: &SecretString) -> Result<Profile, ClientError>;

    /// Exchanges the current token for a fresh one.
    async fn refresh(&self, token: &SecretString) -> Result<SecretString, ClientError>;
}

/// HTTP client for the GRC backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::ConfigurationError` if the config is invalid.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let timeout = config
            .request_timeout
            .to_std()
            .map_err(|e| ClientError::ConfigurationError(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, token: Option<&SecretString>) -> RequestBuilder {
        log::debug!(
            target: "grc_session",
            "msg=\"api request\" method={method} path=\"{path}\""
        );

        let builder = self.http.request(method, self.url(path));
        match token {
            Some(token) => builder.header(reqwest::header::AUTHORIZATION, token.bearer()),
            None => builder,
        }
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        messages: &StatusMessages,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();

        if !status.is_success() {
            log::warn!(
                target: "grc_session",
                "msg=\"api request failed\" status={}",
                status.as_u16()
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: messages.message_for(status.as_u16()).to_owned(),
            });
        }

        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        messages: &StatusMessages,
    ) -> Result<T, ClientError> {
        self.execute(request, messages)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }

    /// Lists a collection, passing `query` as URL parameters (filters, paging).
    pub async fn list<T: DeserializeOwned>(
        &self,
        token: &SecretString,
        path: &ResourcePath,
        query: &[(&str, &str)],
    ) -> Result<Envelope<Vec<T>>, ClientError> {
        let request = self.request(Method::GET, path.as_str(), Some(token)).query(query);
        self.execute_json(request, path.messages()).await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        token: &SecretString,
        path: &ResourcePath,
    ) -> Result<Envelope<T>, ClientError> {
        let request = self.request(Method::GET, path.as_str(), Some(token));
        self.execute_json(request, path.messages()).await
    }

    pub async fn create<B, T>(
        &self,
        token: &SecretString,
        path: &ResourcePath,
        body: &B,
    ) -> Result<Envelope<T>, ClientError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path.as_str(), Some(token)).json(body);
        self.execute_json(request, path.messages()).await
    }

    pub async fn update<B, T>(
        &self,
        token: &SecretString,
        path: &ResourcePath,
        body: &B,
    ) -> Result<Envelope<T>, ClientError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path.as_str(), Some(token)).json(body);
        self.execute_json(request, path.messages()).await
    }

    pub async fn delete(&self, token: &SecretString, path: &ResourcePath) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, path.as_str(), Some(token));
        self.execute(request, path.messages()).await.map(|_| ())
    }

    /// Fetches a fresh audit-program snapshot for the phase gate.
    pub async fn fetch_audit_program(
        &self,
        token: &SecretString,
        slug: &str,
    ) -> Result<AuditProgram, ClientError> {
        let path = ResourcePath::item(ResourceKind::AuditProgram, slug);
        self.get::<AuditProgram>(token, &path).await.map(|e| e.data)
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<SecretString, ClientError> {
        let request = self.request(Method::POST, LOGIN_PATH, None).json(credentials);
        let response: TokenResponse = self.execute_json(request, &StatusMessages::login()).await?;
        Ok(response.token)
    }

    async fn fetch_profile(&self, token: &SecretString) -> Result<Profile, ClientError> {
        let request = self.request(Method::GET, PROFILE_PATH, Some(token));
        self.execute_json(request, &StatusMessages::profile()).await
    }

    async fn refresh(&self, token: &SecretString) -> Result<SecretString, ClientError> {
        let request = self
            .request(Method::POST, REFRESH_PATH, Some(token))
            .json(&RefreshRequest { token });
        let response: TokenResponse = self.execute_json(request, &StatusMessages::refresh()).await?;
        Ok(response.token)
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    if err.is_connect() || err.is_timeout() {
        ClientError::Unreachable(err.to_string())
    } else {
        ClientError::Request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new(&ApiConfig::new("http://localhost:9000/api/")).unwrap();

        assert_eq!(client.base_url(), "http://localhost:9000/api");
        assert_eq!(client.url("/risks"), "http://localhost:9000/api/risks");
        assert_eq!(client.url("risks/4"), "http://localhost:9000/api/risks/4");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = ApiClient::new(&ApiConfig::new("")).unwrap_err();
        assert!(matches!(err, ClientError::ConfigurationError(_)));
    }
}
