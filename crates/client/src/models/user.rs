use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record as returned by the backend
///
/// Treated as a value object: the client enforces no invariants on it beyond
/// what serde needs to decode it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Backend identifier
    pub id: i64,
    /// Account email
    pub email: String,
    /// Display username
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Whether this account belongs to a listing agent
    #[serde(default)]
    pub is_agent: bool,
    #[serde(default)]
    pub agency_name: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// Payload for account registration
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub password: String,
    /// Confirmation copy; the backend rejects mismatches
    pub password2: String,
    pub is_agent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
}

/// Successful login response: a token pair plus the authenticated user
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Short-lived access token
    pub access: String,
    /// Longer-lived refresh token
    pub refresh: String,
    /// The authenticated user
    pub user: UserSummary,
}
