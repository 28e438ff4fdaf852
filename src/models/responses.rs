use serde::{Deserialize, Serialize};

use crate::models::domain::Listing;

/// Response carrying an ordered set of listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub listings: Vec<Listing>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response after storing a new listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListingResponse {
    pub success: bool,
    #[serde(rename = "listingId")]
    pub listing_id: String,
}
