//! Review and feedback operations

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use super::push_opt;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Feedback, LikeToggle, NewFeedback, NewReview, Page, Review, ReviewStats};

/// Review listing criteria
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    /// Restrict to one property's reviews
    pub property: Option<Uuid>,
    /// Exact star rating
    pub rating: Option<u8>,
    /// Ordering expression, e.g. "-created_at"
    pub ordering: Option<String>,
    /// 1-based page number
    pub page: Option<u32>,
}

impl ReviewFilter {
    /// Render the filter as query parameters, omitting unset fields
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "property", self.property.as_ref());
        push_opt(&mut query, "rating", self.rating.as_ref());
        push_opt(&mut query, "ordering", self.ordering.as_ref());
        push_opt(&mut query, "page", self.page.as_ref());
        query
    }
}

/// Property review and application feedback operations
#[derive(Clone)]
pub struct ReviewsService {
    client: Arc<ApiClient>,
}

impl ReviewsService {
    /// Wrap a shared client
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List reviews matching a filter, one page at a time
    pub async fn list(&self, filter: &ReviewFilter) -> Result<Page<Review>, ApiError> {
        let query = filter.to_query();
        self.client.get("/api/reviews/reviews/", Some(&query)).await
    }

    /// Publish a review
    pub async fn create(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.client.post("/api/reviews/reviews/", review).await
    }

    /// Add or remove the user's like on a review
    pub async fn toggle_like(&self, review_id: i64) -> Result<LikeToggle, ApiError> {
        self.client.post(&format!("/api/reviews/reviews/{review_id}/like/"), &json!({})).await
    }

    /// The authenticated user's own reviews, unpaginated
    pub async fn my_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.client.get("/api/reviews/reviews/my_reviews/", None).await
    }

    /// Aggregate review statistics for one property
    pub async fn property_stats(&self, property_id: Uuid) -> Result<ReviewStats, ApiError> {
        let query = vec![("property_id".to_string(), property_id.to_string())];
        self.client.get("/api/reviews/reviews/property_reviews_stats/", Some(&query)).await
    }

    /// Submit application feedback
    ///
    /// Works logged out too; anonymous feedback should carry a contact email
    /// in the payload.
    pub async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<Feedback, ApiError> {
        self.client.post("/api/reviews/feedback/", feedback).await
    }
}
