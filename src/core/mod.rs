// Core engine exports
pub mod filters;
pub mod lease;
pub mod ranker;
pub mod scoring;

pub use filters::{attribute_matches, filter, matches_criteria};
pub use lease::lease_months;
pub use ranker::{priority_sequence, rank};
pub use scoring::fitness_score;
