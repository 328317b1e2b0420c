//! User preference profile driving recommendation scoring.
//!
//! A profile is built incrementally by a selection wizard in the surrounding
//! application, lives entirely in memory, and is discarded once a
//! recommendation list has been generated. Every field is optional; unset
//! fields contribute nothing to a product's score.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Primary nutrition goal selected by the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    WeightLoss,
    MuscleBuilding,
    GeneralHealth,
    EnergyBoost,
}

impl Goal {
    /// All goal variants, in wizard display order.
    pub const ALL: [Goal; 4] = [
        Goal::WeightLoss,
        Goal::MuscleBuilding,
        Goal::GeneralHealth,
        Goal::EnergyBoost,
    ];
}

/// Age band selected by the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AgeBand {
    YoungAdult,
    Adult,
    Senior,
}

/// Self-reported activity level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    VeryActive,
}

/// Dietary restriction toggles. Restrictions are independent and accumulate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    Vegan,
    GlutenFree,
    OrganicOnly,
}

impl DietaryRestriction {
    /// All restriction variants.
    pub const ALL: [DietaryRestriction; 3] = [
        DietaryRestriction::Vegan,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::OrganicOnly,
    ];
}

/// Preferred meal times. Selections are independent and accumulate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    PostWorkout,
}

impl MealTime {
    /// All meal-time variants, in wizard display order.
    pub const ALL: [MealTime; 5] = [
        MealTime::Breakfast,
        MealTime::Lunch,
        MealTime::Dinner,
        MealTime::Snacks,
        MealTime::PostWorkout,
    ];
}

/// Transient user preference profile.
///
/// Field names follow the storefront wizard payload (camelCase), so a
/// profile JSON exported from the wizard deserializes directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceProfile {
    /// Primary nutrition goal
    pub goal: Option<Goal>,
    /// Age band
    pub age: Option<AgeBand>,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
    /// Selected dietary restrictions (set semantics; duplicates are ignored)
    pub dietary_restrictions: Vec<DietaryRestriction>,
    /// Selected meal times (set semantics; duplicates are ignored)
    pub preferred_meal_times: Vec<MealTime>,
}

impl PreferenceProfile {
    /// Create an empty profile (every selection unset).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal.
    #[must_use]
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Set the age band.
    #[must_use]
    pub fn with_age(mut self, age: AgeBand) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the activity level.
    #[must_use]
    pub fn with_activity_level(mut self, level: ActivityLevel) -> Self {
        self.activity_level = Some(level);
        self
    }

    /// Add a dietary restriction (idempotent).
    #[must_use]
    pub fn with_restriction(mut self, restriction: DietaryRestriction) -> Self {
        if !self.dietary_restrictions.contains(&restriction) {
            self.dietary_restrictions.push(restriction);
        }
        self
    }

    /// Add a preferred meal time (idempotent).
    #[must_use]
    pub fn with_meal_time(mut self, meal_time: MealTime) -> Self {
        if !self.preferred_meal_times.contains(&meal_time) {
            self.preferred_meal_times.push(meal_time);
        }
        self
    }

    /// Check whether a dietary restriction is selected.
    #[must_use]
    pub fn has_restriction(&self, restriction: DietaryRestriction) -> bool {
        self.dietary_restrictions.contains(&restriction)
    }

    /// Check whether a meal time is selected.
    #[must_use]
    pub fn has_meal_time(&self, meal_time: MealTime) -> bool {
        self.preferred_meal_times.contains(&meal_time)
    }

    /// True when no selection has been made at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goal.is_none()
            && self.age.is_none()
            && self.activity_level.is_none()
            && self.dietary_restrictions.is_empty()
            && self.preferred_meal_times.is_empty()
    }
}
