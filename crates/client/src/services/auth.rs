//! Account and session operations

use std::sync::Arc;

use serde_json::json;
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{ApiMessage, LoginResponse, NewUser, UserSummary, UserUpdate};
use crate::session::Session;

/// Login, registration, profile, and password-reset operations
#[derive(Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    /// Wrap a shared client
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Authenticate and persist the resulting session
    ///
    /// The identifier may be either a username or an email address. On
    /// success the token pair and user record are written to the credential
    /// store before the response is returned.
    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let payload = json!({
            "username_or_email": username_or_email,
            "password": password,
        });
        let response: LoginResponse = self.client.post("/api/users/login/", &payload).await?;

        let session =
            Session::authenticated(&response.access, &response.refresh, Some(response.user.clone()));
        self.client.persist_session(&session).await?;
        info!(username = %response.user.username, "login succeeded");

        Ok(response)
    }

    /// Register a new account
    ///
    /// Registration does not sign the user in; call [`AuthService::login`]
    /// afterwards.
    pub async fn register(&self, new_user: &NewUser) -> Result<UserSummary, ApiError> {
        self.client.post("/api/users/", new_user).await
    }

    /// Sign out
    ///
    /// Asks the backend to blacklist the refresh token, then clears the local
    /// session regardless of the server's answer. A dead server must never
    /// leave the client stuck logged in.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        if let Some(refresh) = self.client.store().refresh_token().await? {
            let payload = json!({ "refresh_token": refresh });
            let revoked: Result<ApiMessage, ApiError> =
                self.client.post("/api/users/logout/", &payload).await;
            if let Err(err) = revoked {
                warn!(error = %err, "server-side logout failed, clearing local session anyway");
            }
        }
        self.client.clear_session().await
    }

    /// The locally persisted session, without touching the network
    pub async fn session(&self) -> Result<Session, ApiError> {
        Ok(self.client.store().session().await?)
    }

    /// Fetch the authenticated user's profile
    pub async fn profile(&self) -> Result<UserSummary, ApiError> {
        self.client.get("/api/users/profile/", None).await
    }

    /// Partially update the authenticated user's profile
    pub async fn update_profile(&self, update: &UserUpdate) -> Result<UserSummary, ApiError> {
        self.client.patch("/api/users/profile/", update).await
    }

    /// Ask the backend to email a password-reset link
    ///
    /// The backend answers with the same message whether or not the account
    /// exists.
    pub async fn request_password_reset(&self, email: &str) -> Result<ApiMessage, ApiError> {
        let payload = json!({ "email": email });
        self.client.post("/api/users/password_reset/", &payload).await
    }

    /// Complete a password reset with the emailed token
    pub async fn confirm_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<ApiMessage, ApiError> {
        let payload = json!({
            "token": token,
            "new_password": new_password,
            "confirm_password": new_password,
        });
        self.client.post("/api/users/password_reset_confirm/", &payload).await
    }
}
