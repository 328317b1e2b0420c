//! Recommendation scoring.
//!
//! The [`RecommendationEngine`] turns a catalog snapshot and a preference
//! profile into a ranked, capped list of [`Recommendation`]s. All scoring
//! weights live in [`rules`] as explicit, enum-keyed tables.

pub mod rules;
mod scorer;

pub use rules::{ScoringLimits, SCORING_RULES_VERSION};
pub use scorer::{Recommendation, RecommendationEngine, ScoreBreakdown};
