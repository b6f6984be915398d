//! Notification operations

use std::sync::Arc;

use serde_json::json;

use super::push_opt;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{MarkReadResult, Notification, Page, UnreadSummary};

/// Notification listing and read-state operations
#[derive(Clone)]
pub struct NotificationsService {
    client: Arc<ApiClient>,
}

impl NotificationsService {
    /// Wrap a shared client
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// The user's notifications, one page at a time
    pub async fn list(&self, page: Option<u32>) -> Result<Page<Notification>, ApiError> {
        let mut query = Vec::new();
        push_opt(&mut query, "page", page.as_ref());
        self.client.get("/api/notifications/notifications/", Some(&query)).await
    }

    /// Unread count plus a short preview of unread notifications
    pub async fn unread_summary(&self) -> Result<UnreadSummary, ApiError> {
        self.client.get("/api/notifications/notifications/unread_count/", None).await
    }

    /// Mark specific notifications as read
    pub async fn mark_read(&self, notification_ids: &[i64]) -> Result<MarkReadResult, ApiError> {
        let payload = json!({ "notification_ids": notification_ids });
        self.client.post("/api/notifications/notifications/mark_read/", &payload).await
    }

    /// Mark every unread notification as read
    pub async fn mark_all_read(&self) -> Result<MarkReadResult, ApiError> {
        self.client.post("/api/notifications/notifications/mark_all_read/", &json!({})).await
    }
}
