//! Listing, favorites, and discovery operations

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::push_opt;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    FavoriteEntry, FavoriteToggle, Page, Property, PropertyCategory, PropertyStats,
    SearchSuggestions,
};

/// Listing search criteria
///
/// Every field is optional; an empty filter lists everything. Range bounds
/// on price and area are DRF decimals and travel as strings, like the
/// amounts they compare against.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    /// Listing status: "for_sale", "for_rent", ...
    pub status: Option<String>,
    /// Property type name, exact match
    pub property_type: Option<String>,
    /// City name, substring match
    pub location: Option<String>,
    /// Region name, exact match
    pub region: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_area: Option<String>,
    pub max_area: Option<String>,
    pub min_bedrooms: Option<u32>,
    pub max_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub max_bathrooms: Option<u32>,
    pub has_pool: Option<bool>,
    pub has_garage: Option<bool>,
    pub has_security: Option<bool>,
    pub has_ac: Option<bool>,
    /// Only verified listings
    pub verified: Option<bool>,
    /// Only featured listings
    pub featured: Option<bool>,
    /// Full-text search over title, description, and location
    pub search: Option<String>,
    /// Ordering expression, e.g. "-created_at" or "price"
    pub ordering: Option<String>,
    /// 1-based page number
    pub page: Option<u32>,
}

impl PropertyFilter {
    /// Render the filter as query parameters, omitting unset fields
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "status", self.status.as_ref());
        push_opt(&mut query, "property_type", self.property_type.as_ref());
        push_opt(&mut query, "location", self.location.as_ref());
        push_opt(&mut query, "region", self.region.as_ref());
        push_opt(&mut query, "min_price", self.min_price.as_ref());
        push_opt(&mut query, "max_price", self.max_price.as_ref());
        push_opt(&mut query, "min_area", self.min_area.as_ref());
        push_opt(&mut query, "max_area", self.max_area.as_ref());
        push_opt(&mut query, "min_bedrooms", self.min_bedrooms.as_ref());
        push_opt(&mut query, "max_bedrooms", self.max_bedrooms.as_ref());
        push_opt(&mut query, "min_bathrooms", self.min_bathrooms.as_ref());
        push_opt(&mut query, "max_bathrooms", self.max_bathrooms.as_ref());
        push_opt(&mut query, "has_pool", self.has_pool.as_ref());
        push_opt(&mut query, "has_garage", self.has_garage.as_ref());
        push_opt(&mut query, "has_security", self.has_security.as_ref());
        push_opt(&mut query, "has_ac", self.has_ac.as_ref());
        push_opt(&mut query, "verified", self.verified.as_ref());
        push_opt(&mut query, "featured", self.featured.as_ref());
        push_opt(&mut query, "search", self.search.as_ref());
        push_opt(&mut query, "ordering", self.ordering.as_ref());
        push_opt(&mut query, "page", self.page.as_ref());
        query
    }
}

#[derive(Debug, Deserialize)]
struct FavoriteCheck {
    is_favorited: bool,
}

/// Property listing and favorites operations
#[derive(Clone)]
pub struct PropertiesService {
    client: Arc<ApiClient>,
}

impl PropertiesService {
    /// Wrap a shared client
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List properties matching a filter, one page at a time
    pub async fn list(&self, filter: &PropertyFilter) -> Result<Page<Property>, ApiError> {
        let query = filter.to_query();
        self.client.get("/api/properties/properties/", Some(&query)).await
    }

    /// Fetch a single property
    pub async fn get(&self, id: Uuid) -> Result<Property, ApiError> {
        self.client.get(&format!("/api/properties/properties/{id}/"), None).await
    }

    /// Featured listings for the landing page, unpaginated
    pub async fn featured(&self) -> Result<Vec<Property>, ApiError> {
        self.client.get("/api/properties/featured/", None).await
    }

    /// Property categories with their member types, unpaginated
    pub async fn categories(&self) -> Result<Vec<PropertyCategory>, ApiError> {
        self.client.get("/api/properties/properties/categories/", None).await
    }

    /// Aggregate listing statistics
    pub async fn stats(&self) -> Result<PropertyStats, ApiError> {
        self.client.get("/api/properties/stats/", None).await
    }

    /// Popular search terms and cities
    pub async fn search_suggestions(&self) -> Result<SearchSuggestions, ApiError> {
        self.client.get("/api/properties/properties/search_suggestions/", None).await
    }

    /// Add or remove a property from the user's favorites
    ///
    /// The backend toggles: the same call favorites an unfavorited listing
    /// and unfavorites a favorited one. The response carries the new state.
    pub async fn toggle_favorite(&self, property_id: Uuid) -> Result<FavoriteToggle, ApiError> {
        let payload = json!({ "property_id": property_id });
        self.client.post("/api/properties/favorites/", &payload).await
    }

    /// The user's favorites, one page at a time
    pub async fn favorites(&self, page: Option<u32>) -> Result<Page<FavoriteEntry>, ApiError> {
        let mut query = Vec::new();
        push_opt(&mut query, "page", page.as_ref());
        self.client.get("/api/properties/favorites/", Some(&query)).await
    }

    /// Whether the user has favorited a property
    pub async fn is_favorited(&self, property_id: Uuid) -> Result<bool, ApiError> {
        let query = vec![("property_id".to_string(), property_id.to_string())];
        let check: FavoriteCheck =
            self.client.get("/api/properties/favorites/check/", Some(&query)).await?;
        Ok(check.is_favorited)
    }
}
