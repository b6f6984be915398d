//! Domain service façades
//!
//! Thin, stateless wrappers over the [`ApiClient`](crate::http::ApiClient)
//! that pin down paths, verbs, and payload shapes for each backend area.
//! All authentication and retry behavior lives in the client core; the
//! services add nothing but the endpoint mapping.

mod auth;
mod notifications;
mod properties;
mod reviews;

pub use auth::AuthService;
pub use notifications::NotificationsService;
pub use properties::{PropertiesService, PropertyFilter};
pub use reviews::{ReviewFilter, ReviewsService};

/// Append a query parameter when the value is present
pub(crate) fn push_opt<T: ToString>(
    query: &mut Vec<(String, String)>,
    key: &str,
    value: Option<&T>,
) {
    if let Some(value) = value {
        query.push((key.to_string(), value.to_string()));
    }
}
