//! Wire types for the IMMOB backend
//!
//! Field layouts mirror the backend's serializers. Unknown fields are
//! tolerated everywhere and optional fields default so that additive backend
//! changes do not break decoding. Decimal amounts (prices, surface areas)
//! arrive as strings on the wire and are kept as strings here.

mod notification;
mod property;
mod review;
mod user;

use serde::{Deserialize, Serialize};

pub use notification::{MarkReadResult, Notification, UnreadSummary};
pub use property::{
    FavoriteEntry, FavoriteToggle, Location, Property, PropertyCategory, PropertyStats,
    PropertyType, SearchSuggestions,
};
pub use review::{Feedback, LikeToggle, NewFeedback, NewReview, Review, ReviewStats};
pub use user::{LoginResponse, NewUser, UserSummary, UserUpdate};

/// One page of a paginated listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records across all pages
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Records on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether another page follows this one
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Plain `{"message": ...}` acknowledgement returned by several endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    /// Human-readable backend message
    #[serde(default)]
    pub message: String,
}
