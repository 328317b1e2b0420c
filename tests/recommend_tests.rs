//! Integration tests for the recommendation scorer.
//!
//! Exercises the documented behavior end to end: scoring factors,
//! inclusion threshold, capping, ranking stability, and output bounds.

use pantry_tools::{
    parse_catalog, ActivityLevel, AgeBand, Catalog, Category, DietaryRestriction, Goal, MealTime,
    NutritionFacts, PreferenceProfile, Product, ProductId, RecommendationEngine,
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn storefront_catalog() -> Catalog {
    parse_catalog(&fixture_path("catalog/storefront.json")).expect("fixture catalog parses")
}

fn make_product(id: &str, nutrition: NutritionFacts) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        description: String::new(),
        price: 10.0,
        category: Category::from_slug("natural-foods"),
        nutrition,
        is_vegan: false,
        is_gluten_free: false,
        is_organic: false,
        featured: false,
    }
}

// ============================================================================
// Goal scoring against the storefront fixture
// ============================================================================

mod goal_scoring {
    use super::*;

    #[test]
    fn test_weight_loss_top_picks() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();
        let profile = PreferenceProfile::new().with_goal(Goal::WeightLoss);

        let recs = engine.generate(&catalog, &profile);
        let ids: Vec<&str> = recs.iter().map(|r| r.product.id.value()).collect();

        // 55-point trio first in catalog order, then the best 30-point item.
        assert_eq!(ids, ["shake-02", "jerky-06", "pudding-08", "oats-01"]);
        assert_eq!(recs[0].match_score, 55);
        assert_eq!(recs[3].match_score, 30);
    }

    #[test]
    fn test_vegan_restriction_reshuffles_ranking() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();
        let profile = PreferenceProfile::new()
            .with_goal(Goal::WeightLoss)
            .with_restriction(DietaryRestriction::Vegan);

        let recs = engine.generate(&catalog, &profile);
        let ids: Vec<&str> = recs.iter().map(|r| r.product.id.value()).collect();

        // Non-vegan products are demoted by 30 points: the bar and granola
        // drop out entirely, jerky falls below the top four.
        assert_eq!(ids, ["shake-02", "pudding-08", "oats-01", "chips-04"]);
        assert_eq!(recs[0].match_score, 75);
    }

    #[test]
    fn test_muscle_building_rewards_protein_and_calories() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();
        let profile = PreferenceProfile::new().with_goal(Goal::MuscleBuilding);

        let recs = engine.generate(&catalog, &profile);
        // Only bar-07 (protein 24, calories 220) fires both criteria.
        assert_eq!(recs[0].product.id.value(), "bar-07");
        assert_eq!(recs[0].match_score, 60);
    }

    #[test]
    fn test_reason_set_by_goal_and_empty_without_goal() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();

        let with_goal = PreferenceProfile::new().with_goal(Goal::WeightLoss);
        let recs = engine.generate(&catalog, &with_goal);
        assert!(recs.iter().all(|r| !r.reason.is_empty()));

        // Goal unset but enough other factors to clear the threshold.
        let goalless = PreferenceProfile::new()
            .with_age(AgeBand::YoungAdult)
            .with_activity_level(ActivityLevel::VeryActive)
            .with_meal_time(MealTime::PostWorkout);
        let recs = engine.generate(&catalog, &goalless);
        assert!(!recs.is_empty());
        assert!(recs.iter().all(|r| r.reason.is_empty()));
    }
}

// ============================================================================
// Documented output guarantees
// ============================================================================

mod output_guarantees {
    use super::*;

    fn all_profiles() -> Vec<PreferenceProfile> {
        vec![
            PreferenceProfile::new(),
            PreferenceProfile::new().with_goal(Goal::WeightLoss),
            PreferenceProfile::new()
                .with_goal(Goal::MuscleBuilding)
                .with_age(AgeBand::YoungAdult)
                .with_activity_level(ActivityLevel::VeryActive)
                .with_restriction(DietaryRestriction::GlutenFree)
                .with_meal_time(MealTime::PostWorkout),
            PreferenceProfile::new()
                .with_goal(Goal::GeneralHealth)
                .with_age(AgeBand::Senior)
                .with_restriction(DietaryRestriction::Vegan)
                .with_restriction(DietaryRestriction::OrganicOnly)
                .with_meal_time(MealTime::Breakfast)
                .with_meal_time(MealTime::Snacks),
            PreferenceProfile::new()
                .with_goal(Goal::EnergyBoost)
                .with_activity_level(ActivityLevel::Sedentary)
                .with_meal_time(MealTime::Lunch)
                .with_meal_time(MealTime::Dinner),
        ]
    }

    #[test]
    fn test_deterministic_for_fixed_inputs() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();

        for profile in all_profiles() {
            let first = engine.generate(&catalog, &profile);
            let second = engine.generate(&catalog, &profile);

            let ids = |recs: &[pantry_tools::Recommendation<'_>]| -> Vec<(String, u8)> {
                recs.iter()
                    .map(|r| (r.product.id.value().to_string(), r.match_score))
                    .collect()
            };
            assert_eq!(ids(&first), ids(&second));
        }
    }

    #[test]
    fn test_at_most_four_results() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();

        for profile in all_profiles() {
            assert!(engine.generate(&catalog, &profile).len() <= 4);
        }
    }

    #[test]
    fn test_scores_within_bounds() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();

        for profile in all_profiles() {
            for rec in engine.generate(&catalog, &profile) {
                assert!(rec.match_score <= 100);
                assert!(
                    rec.match_score > 20,
                    "included product must exceed the threshold: {} scored {}",
                    rec.product.id,
                    rec.match_score
                );
            }
        }
    }

    #[test]
    fn test_raw_score_exceeds_threshold_for_every_result() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();

        for profile in all_profiles() {
            for rec in engine.generate(&catalog, &profile) {
                let raw = engine.score(rec.product, &profile).raw_score;
                assert!(raw > 20, "{} has raw score {raw}", rec.product.id);
            }
        }
    }

    #[test]
    fn test_ranking_descending_and_stable() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();

        let catalog_pos = |id: &str| {
            catalog
                .iter()
                .position(|p| p.id.value() == id)
                .expect("product in catalog")
        };

        for profile in all_profiles() {
            let recs = engine.generate(&catalog, &profile);
            for pair in recs.windows(2) {
                assert!(pair[0].match_score >= pair[1].match_score);
                if pair[0].match_score == pair[1].match_score {
                    assert!(
                        catalog_pos(pair[0].product.id.value())
                            < catalog_pos(pair[1].product.id.value()),
                        "tied products must keep catalog order"
                    );
                }
            }
        }
    }

    #[test]
    fn test_benefits_capped_at_three() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();

        for profile in all_profiles() {
            for rec in engine.generate(&catalog, &profile) {
                assert!(rec.benefits.len() <= 3);
            }
        }
    }

    #[test]
    fn test_empty_catalog_returns_empty_list() {
        let engine = RecommendationEngine::new();
        for profile in all_profiles() {
            assert!(engine.generate(&Catalog::new(), &profile).is_empty());
        }
    }

    #[test]
    fn test_empty_profile_yields_empty_list_on_realistic_catalog() {
        // Flags alone carry benefit text, never points, so an all-unset
        // profile cannot push any product past the threshold.
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();
        assert!(engine.generate(&catalog, &PreferenceProfile::new()).is_empty());
    }
}

// ============================================================================
// Penalty and edge-case scenarios
// ============================================================================

mod penalty_scenarios {
    use super::*;

    #[test]
    fn test_vegan_penalty_excludes_otherwise_strong_product() {
        // Non-vegan, protein 25, calories 100, no other favorable attributes.
        let mut product = make_product(
            "whey-bar",
            NutritionFacts {
                calories: 100.0,
                protein: 25.0,
                ..Default::default()
            },
        );
        product.category = Category::from_slug("performance-fuel");

        let engine = RecommendationEngine::new();
        let profile = PreferenceProfile::new().with_restriction(DietaryRestriction::Vegan);

        let breakdown = engine.score(&product, &profile);
        assert_eq!(breakdown.raw_score, -30);

        let catalog = Catalog::from_products(vec![product]);
        assert!(engine.generate(&catalog, &profile).is_empty());
    }

    #[test]
    fn test_penalty_outweighs_strong_goal_match() {
        // Weight-loss awards 55, the vegan and organic-only penalties remove
        // 50; the remaining 5 stays below the threshold.
        let product = make_product(
            "lean-jerky",
            NutritionFacts {
                calories: 120.0,
                protein: 22.0,
                ..Default::default()
            },
        );
        let engine = RecommendationEngine::new();
        let profile = PreferenceProfile::new()
            .with_goal(Goal::WeightLoss)
            .with_restriction(DietaryRestriction::Vegan)
            .with_restriction(DietaryRestriction::OrganicOnly);

        let breakdown = engine.score(&product, &profile);
        assert_eq!(breakdown.raw_score, 5);

        let catalog = Catalog::from_products(vec![product]);
        assert!(engine.generate(&catalog, &profile).is_empty());
    }

    #[test]
    fn test_lunch_and_dinner_never_contribute() {
        let catalog = storefront_catalog();
        let engine = RecommendationEngine::new();

        let base = PreferenceProfile::new().with_goal(Goal::EnergyBoost);
        let with_lunch_dinner = base
            .clone()
            .with_meal_time(MealTime::Lunch)
            .with_meal_time(MealTime::Dinner);

        for product in catalog.iter() {
            assert_eq!(
                engine.score(product, &base).raw_score,
                engine.score(product, &with_lunch_dinner).raw_score,
                "lunch/dinner selections must not change {}",
                product.id
            );
        }
    }

    #[test]
    fn test_score_capped_at_one_hundred() {
        let mut product = make_product(
            "super-bar",
            NutritionFacts {
                calories: 300.0,
                protein: 25.0,
                carbs: 30.0,
                fat: 5.0,
                fiber: 6.0,
            },
        );
        product.is_vegan = true;
        product.is_gluten_free = true;
        product.is_organic = true;

        let engine = RecommendationEngine::new();
        let profile = PreferenceProfile::new()
            .with_goal(Goal::MuscleBuilding)
            .with_age(AgeBand::YoungAdult)
            .with_activity_level(ActivityLevel::VeryActive)
            .with_restriction(DietaryRestriction::Vegan)
            .with_restriction(DietaryRestriction::GlutenFree)
            .with_restriction(DietaryRestriction::OrganicOnly)
            .with_meal_time(MealTime::PostWorkout);

        // 60 + 25 + 60 + 20 + 10 = 175 raw
        let breakdown = engine.score(&product, &profile);
        assert_eq!(breakdown.raw_score, 175);

        let catalog = Catalog::from_products(vec![product]);
        let recs = engine.generate(&catalog, &profile);
        assert_eq!(recs[0].match_score, 100);
    }
}
