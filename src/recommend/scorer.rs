//! Recommendation scoring engine.
//!
//! Maps a catalog snapshot and a preference profile to a ranked, capped list
//! of recommendations. Scoring is performed independently per product with
//! no cross-product comparison; the whole computation is a pure function of
//! its inputs.

use serde::Serialize;

use super::rules::{
    self, ScoringLimits, SCORING_RULES_VERSION,
};
use crate::model::{
    Catalog, DietaryRestriction, MealTime, PreferenceProfile, Product,
};

/// Per-factor score breakdown for a single product.
///
/// Useful for explaining why a product ranked where it did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoreBreakdown {
    /// Points from the goal factor
    pub goal_points: i32,
    /// Points from the activity-level factor
    pub activity_points: i32,
    /// Points from all selected dietary restrictions
    pub dietary_points: i32,
    /// Points from all selected meal times
    pub meal_time_points: i32,
    /// Points from the age-band factor
    pub age_points: i32,
    /// Accumulated raw score (may be negative under dietary penalties)
    pub raw_score: i32,
    /// Reason string from the selected goal, if any
    pub reason: Option<&'static str>,
    /// Accumulated benefit strings, untruncated and in accumulation order
    pub benefits: Vec<&'static str>,
}

impl ScoreBreakdown {
    /// Get a human-readable summary of the score breakdown.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Raw: {} (goal: {}, activity: {}, dietary: {}, meal times: {}, age: {})",
            self.raw_score,
            self.goal_points,
            self.activity_points,
            self.dietary_points,
            self.meal_time_points,
            self.age_points
        )
    }
}

/// A scored product that cleared the inclusion threshold.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    /// The scored product
    pub product: &'a Product,
    /// Human-readable reason chosen by the selected goal (empty if no goal)
    pub reason: String,
    /// Match score in (threshold, cap], after the cap is applied
    pub match_score: u8,
    /// Up to `max_benefits` benefit strings, in accumulation order
    pub benefits: Vec<String>,
}

/// Recommendation engine.
///
/// Stateless apart from its limits; safe to reuse across catalogs and
/// profiles.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    limits: ScoringLimits,
}

impl RecommendationEngine {
    /// Create an engine with the default limits (threshold 20, cap 100,
    /// top 4, 3 benefits).
    #[must_use]
    pub fn new() -> Self {
        Self {
            limits: ScoringLimits::default(),
        }
    }

    /// Create an engine with custom limits.
    #[must_use]
    pub const fn with_limits(limits: ScoringLimits) -> Self {
        Self { limits }
    }

    /// The limits this engine applies.
    #[must_use]
    pub const fn limits(&self) -> &ScoringLimits {
        &self.limits
    }

    /// Score a single product against a profile.
    ///
    /// Factors accumulate independently; unset profile fields contribute
    /// nothing. Benefits accumulate in factor order (goal, age, flags) and
    /// are not truncated here.
    #[must_use]
    pub fn score(&self, product: &Product, profile: &PreferenceProfile) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();

        if let Some(goal) = profile.goal {
            let rule = rules::goal_rule(goal);
            breakdown.goal_points = rule.points(product);
            breakdown.reason = Some(rule.reason);
            breakdown.benefits.push(rule.benefit);
        }

        if let Some(level) = profile.activity_level {
            breakdown.activity_points = rules::activity_points(level, product);
        }

        // Membership checks per variant keep duplicate selections harmless.
        for restriction in DietaryRestriction::ALL {
            if profile.has_restriction(restriction) {
                breakdown.dietary_points += rules::dietary_points(restriction, product);
            }
        }

        for meal_time in MealTime::ALL {
            if profile.has_meal_time(meal_time) {
                breakdown.meal_time_points += rules::meal_time_points(meal_time, product);
            }
        }

        if let Some(age) = profile.age {
            let (points, benefit) = rules::age_contribution(age, product);
            breakdown.age_points = points;
            if let Some(benefit) = benefit {
                breakdown.benefits.push(benefit);
            }
        }

        breakdown.benefits.extend(rules::flag_benefits(product));

        breakdown.raw_score = breakdown.goal_points
            + breakdown.activity_points
            + breakdown.dietary_points
            + breakdown.meal_time_points
            + breakdown.age_points;

        breakdown
    }

    /// Generate the ranked recommendation list for a catalog and profile.
    ///
    /// Products whose raw score strictly exceeds the inclusion threshold are
    /// ranked by capped match score, descending. The sort is stable, so tied
    /// products keep their relative catalog order. The list is truncated to
    /// `max_results`.
    #[must_use]
    pub fn generate<'a>(
        &self,
        catalog: &'a Catalog,
        profile: &PreferenceProfile,
    ) -> Vec<Recommendation<'a>> {
        let mut candidates: Vec<Recommendation<'a>> = catalog
            .iter()
            .filter_map(|product| {
                let breakdown = self.score(product, profile);
                if breakdown.raw_score <= self.limits.inclusion_threshold {
                    return None;
                }
                Some(self.build_recommendation(product, &breakdown))
            })
            .collect();

        candidates.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        candidates.truncate(self.limits.max_results);

        tracing::debug!(
            rules_version = SCORING_RULES_VERSION,
            catalog_size = catalog.len(),
            results = candidates.len(),
            "generated recommendations"
        );

        candidates
    }

    /// Assemble a recommendation from a qualifying breakdown.
    fn build_recommendation<'a>(
        &self,
        product: &'a Product,
        breakdown: &ScoreBreakdown,
    ) -> Recommendation<'a> {
        let capped = breakdown
            .raw_score
            .clamp(0, i32::from(self.limits.score_cap)) as u8;

        let benefits = breakdown
            .benefits
            .iter()
            .take(self.limits.max_benefits)
            .map(|b| (*b).to_string())
            .collect();

        Recommendation {
            product,
            reason: breakdown.reason.unwrap_or_default().to_string(),
            match_score: capped,
            benefits,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
