// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Area, Attribute, Floor, Listing, Preferences};
pub use requests::{CreateListingRequest, FilterListingsRequest, PreferencePayload, RankListingsRequest};
pub use responses::{CreateListingResponse, ErrorResponse, HealthResponse, ListingsResponse};
