//! Scoring rule tables.
//!
//! Every factor of the additive match score is declared here as explicit
//! data: goal rules as an enum-keyed table, and the activity, dietary,
//! meal-time, and age factors as exhaustive per-variant functions. There is
//! no string-keyed dispatch; a variant that contributes nothing says so in
//! its own match arm.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{
    ActivityLevel, AgeBand, DietaryRestriction, Goal, MealTime, Product,
};

/// Scoring rules version, reported alongside generated recommendations.
pub const SCORING_RULES_VERSION: &str = "1.0";

// ============================================================================
// Category slugs with scoring significance
// ============================================================================

/// Category slug matched by the breakfast meal-time rule.
pub const SLUG_NATURAL_FOODS: &str = "natural-foods";
/// Category slugs matched by the snacks meal-time rule.
pub const SLUG_SWEET_TREATS: &str = "sweet-treats";
pub const SLUG_SAVORY_TREATS: &str = "savory-treats";

// ============================================================================
// Reason and benefit strings
// ============================================================================

pub const REASON_WEIGHT_LOSS: &str = "Light on calories and rich in protein to keep you satisfied";
pub const REASON_MUSCLE_BUILDING: &str = "Protein-dense fuel for building and repairing muscle";
pub const REASON_GENERAL_HEALTH: &str = "Wholesome everyday choice for balanced nutrition";
pub const REASON_ENERGY_BOOST: &str = "Carb-forward pick for a steady lift through the day";

pub const BENEFIT_SATIETY: &str = "Keeps you feeling full longer";
pub const BENEFIT_MUSCLE_SYNTHESIS: &str = "Supports muscle protein synthesis";
pub const BENEFIT_DIGESTIVE_HEALTH: &str = "Promotes healthy digestion";
pub const BENEFIT_SUSTAINED_ENERGY: &str = "Provides sustained energy release";

pub const BENEFIT_GLUTEN_FREE: &str = "Gluten-free";
pub const BENEFIT_VEGAN: &str = "Vegan-friendly";
pub const BENEFIT_ORGANIC: &str = "Certified organic ingredients";

// ============================================================================
// Goal rules
// ============================================================================

/// A single product criterion awarding points when met.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criterion {
    /// Calories strictly below the limit
    CaloriesBelow(f64),
    /// Calories strictly above the limit
    CaloriesAbove(f64),
    /// Protein strictly above the limit
    ProteinAbove(f64),
    /// Carbs strictly above the limit
    CarbsAbove(f64),
    /// Fiber strictly above the limit
    FiberAbove(f64),
    /// Product carries the organic flag
    Organic,
}

impl Criterion {
    /// Check the criterion against a product.
    #[must_use]
    pub fn met(&self, product: &Product) -> bool {
        let n = &product.nutrition;
        match self {
            Criterion::CaloriesBelow(limit) => n.calories < *limit,
            Criterion::CaloriesAbove(limit) => n.calories > *limit,
            Criterion::ProteinAbove(limit) => n.protein > *limit,
            Criterion::CarbsAbove(limit) => n.carbs > *limit,
            Criterion::FiberAbove(limit) => n.fiber > *limit,
            Criterion::Organic => product.is_organic,
        }
    }
}

/// A criterion paired with the points it awards.
#[derive(Debug, Clone, Copy)]
pub struct WeightedCriterion {
    pub criterion: Criterion,
    pub points: i32,
}

/// Scoring rule for one goal variant.
#[derive(Debug, Clone, Copy)]
pub struct GoalRule {
    /// Primary criterion
    pub primary: WeightedCriterion,
    /// Secondary criterion
    pub secondary: WeightedCriterion,
    /// Reason string attached when this goal is selected
    pub reason: &'static str,
    /// Benefit string appended when this goal is selected
    pub benefit: &'static str,
}

impl GoalRule {
    /// Points this rule awards for a product.
    #[must_use]
    pub fn points(&self, product: &Product) -> i32 {
        let mut points = 0;
        if self.primary.criterion.met(product) {
            points += self.primary.points;
        }
        if self.secondary.criterion.met(product) {
            points += self.secondary.points;
        }
        points
    }
}

/// The rule for a goal variant.
#[must_use]
pub const fn goal_rule(goal: Goal) -> GoalRule {
    match goal {
        Goal::WeightLoss => GoalRule {
            primary: WeightedCriterion {
                criterion: Criterion::CaloriesBelow(200.0),
                points: 30,
            },
            secondary: WeightedCriterion {
                criterion: Criterion::ProteinAbove(15.0),
                points: 25,
            },
            reason: REASON_WEIGHT_LOSS,
            benefit: BENEFIT_SATIETY,
        },
        Goal::MuscleBuilding => GoalRule {
            primary: WeightedCriterion {
                criterion: Criterion::ProteinAbove(20.0),
                points: 40,
            },
            secondary: WeightedCriterion {
                criterion: Criterion::CaloriesAbove(200.0),
                points: 20,
            },
            reason: REASON_MUSCLE_BUILDING,
            benefit: BENEFIT_MUSCLE_SYNTHESIS,
        },
        Goal::GeneralHealth => GoalRule {
            primary: WeightedCriterion {
                criterion: Criterion::Organic,
                points: 20,
            },
            secondary: WeightedCriterion {
                criterion: Criterion::FiberAbove(3.0),
                points: 15,
            },
            reason: REASON_GENERAL_HEALTH,
            benefit: BENEFIT_DIGESTIVE_HEALTH,
        },
        Goal::EnergyBoost => GoalRule {
            primary: WeightedCriterion {
                criterion: Criterion::CarbsAbove(20.0),
                points: 25,
            },
            secondary: WeightedCriterion {
                criterion: Criterion::ProteinAbove(10.0),
                points: 20,
            },
            reason: REASON_ENERGY_BOOST,
            benefit: BENEFIT_SUSTAINED_ENERGY,
        },
    }
}

// ============================================================================
// Activity, dietary, meal-time, and age factors
// ============================================================================

/// Points contributed by the activity-level factor.
#[must_use]
pub fn activity_points(level: ActivityLevel, product: &Product) -> i32 {
    let n = &product.nutrition;
    match level {
        ActivityLevel::VeryActive => {
            let mut points = 0;
            if n.protein > 20.0 {
                points += 15;
            }
            if n.calories > 250.0 {
                points += 10;
            }
            points
        }
        ActivityLevel::Sedentary => {
            if n.calories < 180.0 {
                15
            } else {
                0
            }
        }
        // No rule defined for the intermediate levels
        ActivityLevel::Light | ActivityLevel::Moderate => 0,
    }
}

/// Points contributed by one dietary restriction.
///
/// The vegan and organic-only restrictions actively demote non-qualifying
/// products; the penalty can drive the accumulated score negative.
#[must_use]
pub fn dietary_points(restriction: DietaryRestriction, product: &Product) -> i32 {
    match restriction {
        DietaryRestriction::Vegan => {
            if product.is_vegan {
                20
            } else {
                -30
            }
        }
        DietaryRestriction::GlutenFree => {
            if product.is_gluten_free {
                20
            } else {
                0
            }
        }
        DietaryRestriction::OrganicOnly => {
            if product.is_organic {
                20
            } else {
                -20
            }
        }
    }
}

/// Points contributed by one selected meal time.
///
/// Lunch and dinner have no scoring rule; the zero arms are deliberate and
/// mirror observed storefront behavior.
#[must_use]
pub fn meal_time_points(meal_time: MealTime, product: &Product) -> i32 {
    match meal_time {
        MealTime::Breakfast => {
            if product.category.slug == SLUG_NATURAL_FOODS {
                15
            } else {
                0
            }
        }
        MealTime::Snacks => {
            if product.category.slug == SLUG_SWEET_TREATS
                || product.category.slug == SLUG_SAVORY_TREATS
            {
                15
            } else {
                0
            }
        }
        MealTime::PostWorkout => {
            if product.nutrition.protein > 15.0 {
                20
            } else {
                0
            }
        }
        MealTime::Lunch | MealTime::Dinner => 0,
    }
}

/// Points and optional benefit contributed by the age-band factor.
#[must_use]
pub fn age_contribution(age: AgeBand, product: &Product) -> (i32, Option<&'static str>) {
    let n = &product.nutrition;
    match age {
        AgeBand::Senior => {
            if n.fiber > 4.0 {
                (10, Some(BENEFIT_DIGESTIVE_HEALTH))
            } else {
                (0, None)
            }
        }
        AgeBand::YoungAdult => {
            if n.protein > 15.0 {
                (10, None)
            } else {
                (0, None)
            }
        }
        AgeBand::Adult => (0, None),
    }
}

/// Benefit strings contributed by product flags, in accumulation order.
#[must_use]
pub fn flag_benefits(product: &Product) -> Vec<&'static str> {
    let mut benefits = Vec::new();
    if product.is_gluten_free {
        benefits.push(BENEFIT_GLUTEN_FREE);
    }
    if product.is_vegan {
        benefits.push(BENEFIT_VEGAN);
    }
    if product.is_organic {
        benefits.push(BENEFIT_ORGANIC);
    }
    benefits
}

// ============================================================================
// Result limits
// ============================================================================

/// Bounds applied when assembling the final recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringLimits {
    /// Raw score a product must strictly exceed to be included
    pub inclusion_threshold: i32,
    /// Ceiling applied to the reported match score
    pub score_cap: u8,
    /// Maximum number of recommendations returned
    pub max_results: usize,
    /// Maximum number of benefit strings per recommendation
    pub max_benefits: usize,
}

impl Default for ScoringLimits {
    fn default() -> Self {
        Self {
            inclusion_threshold: 20,
            score_cap: 100,
            max_results: 4,
            max_benefits: 3,
        }
    }
}
