use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A property review as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    /// Author display name
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub user_profile_picture: Option<String>,
    /// Reviewed property
    pub property: Uuid,
    #[serde(default)]
    pub property_title: Option<String>,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub is_verified_purchase: bool,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_edited: bool,
    /// Whether the authenticated user has liked this review
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub images: Vec<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a review
#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    /// Property being reviewed
    pub property: Uuid,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub title: String,
    pub comment: String,
}

/// Aggregate review statistics for one property
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewStats {
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub avg_rating: f64,
    /// Review count per star rating; ratings with no reviews are absent
    #[serde(default)]
    pub rating_distribution: BTreeMap<u8, u64>,
}

/// Result of toggling a like on a review
#[derive(Debug, Clone, Deserialize)]
pub struct LikeToggle {
    /// Backend confirmation message
    #[serde(default)]
    pub message: String,
    /// New like state after the toggle
    pub is_liked: bool,
}

/// Application feedback record
#[derive(Debug, Clone, Deserialize)]
pub struct Feedback {
    pub id: i64,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub user_email: Option<String>,
    /// Feedback kind: "bug", "feature", "general", ...
    pub feedback_type: String,
    #[serde(default)]
    pub rating: Option<u8>,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_resolved: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub responded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for submitting application feedback
#[derive(Debug, Clone, Serialize)]
pub struct NewFeedback {
    pub feedback_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub title: String,
    pub message: String,
    /// Contact address for anonymous feedback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
