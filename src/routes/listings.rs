use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{filter, rank};
use crate::models::{
    CreateListingRequest, CreateListingResponse, ErrorResponse, FilterListingsRequest,
    HealthResponse, ListingsResponse, RankListingsRequest,
};
use crate::services::ListingStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ListingStore>,
    pub matching: MatchingSettings,
}

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/listings", web::post().to(create_listing))
        .route("/listings", web::get().to(get_listings))
        .route("/listings/rank", web::post().to(rank_listings))
        .route("/listings/filter", web::post().to(filter_listings));
}

/// Page size for a rank request: the configured default when the caller
/// omitted one, capped so one request cannot ask for an unbounded page.
fn resolve_limit(requested: Option<u16>, matching: &MatchingSettings) -> usize {
    usize::from(requested.unwrap_or(matching.default_limit).min(matching.max_limit))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.load_all().is_ok();

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Post a new listing
///
/// POST /api/v1/listings
///
/// Request body:
/// ```json
/// {
///   "cost": 1100,
///   "location": "Marine Drive",
///   "leaseLength": "6 months",
///   "laundry": true,
///   "floorPreference": "top"
/// }
/// ```
async fn create_listing(
    state: web::Data<AppState>,
    req: web::Json<CreateListingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_listing request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let id = uuid::Uuid::new_v4().to_string();
    let listing = req.into_inner().into_listing(id.clone());

    match state.store.append(&listing) {
        Ok(()) => {
            tracing::info!("Stored new listing {}", id);
            HttpResponse::Created().json(CreateListingResponse {
                success: true,
                listing_id: id,
            })
        }
        Err(e) => {
            tracing::error!("Failed to store listing: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to store listing".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// All stored listings, unranked
///
/// GET /api/v1/listings
async fn get_listings(state: web::Data<AppState>) -> impl Responder {
    match state.store.load_all() {
        Ok(listings) => {
            let total = listings.len();
            HttpResponse::Ok().json(ListingsResponse {
                listings,
                total_results: total,
            })
        }
        Err(e) => {
            tracing::error!("Failed to load listings: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Rank the stored listings, best match first
///
/// POST /api/v1/listings/rank
///
/// Request body:
/// ```json
/// {
///   "preferences": { "location": "Exchange", "laundry": true },
///   "limit": 20
/// }
/// ```
async fn rank_listings(
    state: web::Data<AppState>,
    req: web::Json<RankListingsRequest>,
) -> impl Responder {
    let req = req.into_inner();
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_listings request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = resolve_limit(req.limit, &state.matching);
    let preferences = req.preferences.into_preferences();

    let listings = match state.store.load_all() {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Failed to load listings: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let total = listings.len();
    let mut ranked = rank(listings, &preferences);
    ranked.truncate(limit);

    tracing::info!("Ranked {} listings, returning {}", total, ranked.len());

    HttpResponse::Ok().json(ListingsResponse {
        listings: ranked,
        total_results: total,
    })
}

/// Hard-filter the stored listings, then rank the survivors
///
/// POST /api/v1/listings/filter
///
/// Request body:
/// ```json
/// {
///   "criteria": { "location": "Exchange", "pets": true }
/// }
/// ```
async fn filter_listings(
    state: web::Data<AppState>,
    req: web::Json<FilterListingsRequest>,
) -> impl Responder {
    let criteria = req.into_inner().criteria.into_preferences();

    let listings = match state.store.load_all() {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Failed to load listings: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let kept = filter(listings, &criteria);
    let ranked = rank(kept, &criteria);
    let total = ranked.len();

    tracing::info!("Filter kept {} listings", total);

    HttpResponse::Ok().json(ListingsResponse {
        listings: ranked,
        total_results: total,
    })
}
