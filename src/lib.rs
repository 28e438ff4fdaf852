//! Sublet Match - listing ranking service for a student sublet marketplace
//!
//! The heart of the crate is a pure preference-ranking engine: stored sublet
//! listings are ordered best-to-worst against a searcher's desired attribute
//! values, with an optional hard-filter step that drops non-matching
//! listings outright. Everything around it (CSV store, HTTP API) only feeds
//! records in and renders the ordered result.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{attribute_matches, filter, fitness_score, lease_months, matches_criteria, priority_sequence, rank};
pub use models::{Area, Attribute, Floor, Listing, Preferences};
