use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::lease_months;
use crate::models::domain::{Area, Floor, Listing, Preferences};

/// Request to post a new listing.
///
/// Raw text is coerced and validated here, at the boundary; the engine only
/// ever sees typed values. Unknown area or floor names are rejected during
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListingRequest {
    /// Monthly cost in dollars. The one mandatory attribute.
    pub cost: u32,
    #[serde(default)]
    pub location: Option<Area>,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub rooms: Option<u8>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub occupants: Option<u8>,
    #[serde(alias = "lease_length", rename = "leaseLength", default)]
    pub lease_length: Option<String>,
    #[serde(default)]
    pub laundry: Option<bool>,
    #[serde(default)]
    pub parking: Option<bool>,
    #[serde(alias = "gender_preference", rename = "genderPreference", default)]
    pub gender_preference: Option<String>,
    #[serde(alias = "floor_preference", rename = "floorPreference", default)]
    pub floor_preference: Option<Floor>,
    #[serde(default)]
    pub pets: Option<bool>,
}

impl CreateListingRequest {
    /// Build the stored record; the id comes from the caller.
    pub fn into_listing(self, id: String) -> Listing {
        Listing {
            id,
            cost: Some(self.cost),
            location: self.location,
            description: self.description,
            rooms: self.rooms,
            occupants: self.occupants,
            lease_length: self.lease_length,
            laundry: self.laundry,
            parking: self.parking,
            gender_preference: self.gender_preference,
            floor_preference: self.floor_preference,
            pets: self.pets,
            created_at: Some(chrono::Utc::now()),
        }
    }
}

/// Desired attribute values as they arrive on the wire.
///
/// Mirrors [`Preferences`] except that lease length is free text; it is
/// coerced to months here. Text with no recognizable duration becomes "no
/// preference" rather than an error. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencePayload {
    pub cost: Option<u32>,
    pub location: Option<Area>,
    pub rooms: Option<u8>,
    #[serde(alias = "lease_length", rename = "leaseLength")]
    pub lease_length: Option<String>,
    pub occupants: Option<u8>,
    pub laundry: Option<bool>,
    pub parking: Option<bool>,
    #[serde(alias = "gender_preference", rename = "genderPreference")]
    pub gender_preference: Option<String>,
    #[serde(alias = "floor_preference", rename = "floorPreference")]
    pub floor_preference: Option<Floor>,
    pub pets: Option<bool>,
}

impl PreferencePayload {
    pub fn into_preferences(self) -> Preferences {
        let lease = self
            .lease_length
            .as_deref()
            .map(|text| lease_months(Some(text)))
            .filter(|&months| months > 0);

        Preferences {
            cost: self.cost,
            location: self.location,
            rooms: self.rooms,
            lease_months: lease,
            occupants: self.occupants,
            laundry: self.laundry,
            parking: self.parking,
            gender_preference: self.gender_preference,
            floor_preference: self.floor_preference,
            pets: self.pets,
        }
    }
}

/// Request to rank the stored listings against a preference set.
///
/// When `limit` is omitted the configured default page size applies.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankListingsRequest {
    #[serde(default)]
    pub preferences: PreferencePayload,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to hard-filter the stored listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterListingsRequest {
    #[serde(default)]
    pub criteria: PreferencePayload,
}
