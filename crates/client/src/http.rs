//! Authenticated HTTP client core
//!
//! Issues requests against the configured base endpoint, attaches the stored
//! bearer token, and recovers from exactly one class of failure: an expired
//! access token. On a 401 the client refreshes the token once and replays the
//! original request; every other outcome is returned to the caller unchanged.
//!
//! The refresh lifecycle is an explicit per-request state machine
//! (`Initial -> AwaitingRefresh -> Retried`) rather than a re-entrant call,
//! which makes the at-most-one-retry invariant structural.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::{keys, Session};
use crate::store::CredentialStore;

const REFRESH_PATH: &str = "/api/token/refresh/";

/// Lifecycle of a single outbound request with respect to token refresh
///
/// The flag transitions `Initial -> AwaitingRefresh -> Retried` at most once;
/// a request never re-enters the refresh branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryState {
    Initial,
    AwaitingRefresh,
    Retried,
}

/// Token pair returned by the refresh endpoint
///
/// The backend rotates refresh tokens, so a successful refresh may carry a
/// replacement refresh token alongside the new access token.
#[derive(Debug, Deserialize)]
struct RefreshedTokens {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
}

/// HTTP client with transparent one-shot token refresh
///
/// Cheap to share: wrap it in an [`Arc`] and hand clones of that to the
/// domain services. The client is the only component that persists tokens;
/// services go through [`ApiClient::persist_session`] and
/// [`ApiClient::clear_session`].
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    store: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Create a client from a configuration and an injected credential store
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the base URL is malformed or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig, store: Arc<dyn CredentialStore>) -> Result<Self, ApiError> {
        url::Url::parse(&config.base_url)
            .map_err(|_| ApiError::Config(format!("invalid base URL: {}", config.base_url)))?;

        let mut builder = Client::builder().timeout(config.timeout).no_proxy();
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config, store })
    }

    /// Start building a client with fluent configuration
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The injected credential store
    #[must_use]
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Persist an authenticated session
    ///
    /// Domain services never write to the store directly; session writes all
    /// flow through the core.
    pub async fn persist_session(&self, session: &Session) -> Result<(), ApiError> {
        self.store.store_session(session).await?;
        Ok(())
    }

    /// Drop every persisted session entry
    pub async fn clear_session(&self) -> Result<(), ApiError> {
        self.store.clear_session().await?;
        Ok(())
    }

    /// Issue a request and return the raw response
    ///
    /// Attaches the stored access token as a bearer credential when present.
    /// A 401 on the first attempt triggers a single refresh-and-replay; a
    /// failed refresh clears the session and surfaces the refresh error in
    /// place of the original one. Network failures propagate directly and
    /// never enter the refresh path.
    #[instrument(skip(self, query, body), fields(method = %method, path = %path))]
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.config.root(), path);
        let mut bearer = self.store.access_token().await?;
        let mut state = RetryState::Initial;

        loop {
            let response = self.send_once(method.clone(), &url, query, body, bearer.as_deref()).await?;
            let status = response.status();
            debug!(%status, state = ?state, "received response");

            if status != StatusCode::UNAUTHORIZED || state == RetryState::Retried {
                return Self::finish(response).await;
            }

            let Some(refresh) = self.store.refresh_token().await? else {
                debug!("unauthorized and no refresh token on hand");
                return Self::finish(response).await;
            };

            state = RetryState::AwaitingRefresh;
            debug!(state = ?state, "access token rejected, refreshing");
            match self.refresh_access_token(&refresh).await {
                Ok(tokens) => {
                    self.store.set(keys::ACCESS_TOKEN, &tokens.access).await?;
                    if let Some(rotated) = &tokens.refresh {
                        self.store.set(keys::REFRESH_TOKEN, rotated).await?;
                    }
                    bearer = Some(tokens.access);
                    state = RetryState::Retried;
                }
                Err(err) => {
                    warn!(error = %err, "token refresh failed, clearing session");
                    self.store.clear_session().await?;
                    return Err(err);
                }
            }
        }
    }

    /// Issue a request and decode the JSON response body
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let response = self.execute(method, path, query, body).await?;
        Self::decode(response).await
    }

    /// GET a path with optional query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(String, String)]>,
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    /// POST a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        self.request(Method::POST, path, None, Some(&body)).await
    }

    /// PUT a JSON body
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        self.request(Method::PUT, path, None, Some(&body)).await
    }

    /// PATCH a JSON body
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        self.request(Method::PATCH, path, None, Some(&body)).await
    }

    /// DELETE a path
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None, None).await
    }

    async fn send_once(
        &self,
        method: Method,
        url: &str,
        query: Option<&[(String, String)]>,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<Response, ApiError> {
        let mut request = self.http.request(method, url).header(CONTENT_TYPE, "application/json");
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        request.send().await.map_err(|err| self.transport_error(err))
    }

    /// Exchange the refresh token for a new access token (and, with rotation
    /// enabled server-side, a new refresh token)
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<RefreshedTokens, ApiError> {
        let url = format!("{}{}", self.config.root(), REFRESH_PATH);
        let payload = serde_json::json!({ "refresh": refresh_token });

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Auth(format!(
                "token refresh rejected: {}",
                Self::detail_message(&body, status)
            )));
        }

        response.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.config.timeout)
        } else {
            ApiError::Network(err.to_string())
        }
    }

    async fn finish(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status, body))
    }

    fn status_error(status: StatusCode, body: String) -> ApiError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return ApiError::Auth(Self::detail_message(&body, status));
        }
        if status.is_client_error() {
            let body = match serde_json::from_str(&body) {
                Ok(value) => value,
                Err(_) => Value::String(body),
            };
            return ApiError::Validation { status: status.as_u16(), body };
        }
        ApiError::Server { status: status.as_u16(), body }
    }

    /// Pull the DRF `detail` message out of an error body, if there is one
    fn detail_message(body: &str, status: StatusCode) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| format!("request rejected with status {}", status.as_u16()))
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body)
            .map_err(|e| ApiError::Parse(format!("failed to encode request body: {e}")))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        // 204/205 never carry a body; decode from JSON null
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(Value::Null).map_err(|_| {
                ApiError::Parse(format!(
                    "no-content response ({}) cannot populate the expected type",
                    status.as_u16()
                ))
            });
        }
        response.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: ApiConfig,
    store: Option<Arc<dyn CredentialStore>>,
}

impl ApiClientBuilder {
    /// Set the backend base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the bounded per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Inject the credential store
    #[must_use]
    pub fn store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `ApiError::Config` if no store was injected or the base URL is
    /// malformed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let store =
            self.store.ok_or_else(|| ApiError::Config("a credential store is required".into()))?;
        ApiClient::new(self.config, store)
    }
}
