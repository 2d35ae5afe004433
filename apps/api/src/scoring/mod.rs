//! Multi-tier scoring: component scores, mode weighting, industry bonuses,
//! and the typed findings the auto-fix recommender consumes.

pub mod engine;
pub mod findings;
pub mod handlers;
pub mod industry;
