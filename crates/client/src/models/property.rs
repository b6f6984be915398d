use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic location attached to a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub city: String,
    #[serde(default)]
    pub quarter: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Decimal degrees, serialized as a string by the backend
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

/// Property type (apartment, villa, ...) with its parent category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyType {
    pub id: i64,
    pub name: String,
    /// Category reference; shape varies between list and category endpoints
    #[serde(default)]
    pub category: Option<serde_json::Value>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A property category with its member types
///
/// Categories group property types (residential holding apartment, villa,
/// ...) and back the listing page's filter dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Icon identifier rendered by the frontend
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub types: Vec<PropertyType>,
}

/// A real-estate listing
///
/// Monetary and surface amounts are DRF decimals and arrive as strings; the
/// client forwards them untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub location: Option<Location>,
    /// Listing status: "for_sale", "for_rent", "sold", "rented", "pending"
    pub status: String,
    pub price: String,
    #[serde(default)]
    pub currency: String,
    pub area: String,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub parking_spaces: u32,
    #[serde(default)]
    pub has_kitchen: bool,
    #[serde(default)]
    pub has_living_room: bool,
    #[serde(default)]
    pub has_dining_room: bool,
    #[serde(default)]
    pub has_balcony: bool,
    #[serde(default)]
    pub has_garden: bool,
    #[serde(default)]
    pub has_pool: bool,
    #[serde(default)]
    pub has_garage: bool,
    #[serde(default)]
    pub has_security: bool,
    #[serde(default)]
    pub has_internet: bool,
    #[serde(default)]
    pub has_ac: bool,
    /// Owner display name
    #[serde(default)]
    pub owner: Option<String>,
    /// Managing agent display name
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub favorites_count: u64,
    /// Image records; left untyped, the client never inspects them
    #[serde(default)]
    pub images: Vec<serde_json::Value>,
    /// Whether the authenticated user has favorited this listing
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// A favorites-list entry wrapping the favorited property
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteEntry {
    pub id: i64,
    pub property: Property,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Result of toggling a favorite
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteToggle {
    /// Backend confirmation message
    #[serde(default)]
    pub message: String,
    /// New favorite state after the toggle
    pub is_favorited: bool,
    /// Created favorite record, present only when the toggle added one
    #[serde(default)]
    pub favorite: Option<serde_json::Value>,
}

/// Aggregate listing statistics
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyStats {
    #[serde(default)]
    pub total_properties: u64,
    #[serde(default)]
    pub for_sale: u64,
    #[serde(default)]
    pub for_rent: u64,
    #[serde(default)]
    pub featured_properties: u64,
    #[serde(default)]
    pub verified_properties: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub avg_price_for_sale: f64,
    #[serde(default)]
    pub avg_price_for_rent: f64,
    #[serde(default)]
    pub top_property_types: Vec<serde_json::Value>,
}

/// Popular search terms and cities
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSuggestions {
    #[serde(default)]
    pub search_terms: Vec<String>,
    #[serde(default)]
    pub popular_cities: Vec<String>,
}
