use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(default)]
    pub user: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub message: String,
    /// Kind: "info", "property", "review", ...
    #[serde(default)]
    pub notification_type: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
    /// Optional deep link into the site
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Unread summary: the count plus a short preview of unread notifications
#[derive(Debug, Clone, Deserialize)]
pub struct UnreadSummary {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub unread_notifications: Vec<Notification>,
}

/// Acknowledgement for the mark-read endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MarkReadResult {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub count: u64,
}
