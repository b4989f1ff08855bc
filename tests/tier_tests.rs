//! Integration tests for tier selection and build recommendation

use hackintune::types::PartCategory;
use hackintune::{recommend, select_tier, tier_name, RecommendRequest, THRESHOLDS, TIERS};

/// Budget scenarios spanning every threshold band.
/// (budget, expected tier name, expected part count)
const SCENARIOS: [(u32, &str, usize); 10] = [
    (0, "Entry Level (Web/Office)", 7),
    (44_999, "Entry Level (Web/Office)", 7),
    (45_000, "Budget Gamer (1080p)", 7),
    (65_000, "Mid-Range (1080p Ultra)", 8),
    (90_000, "Performance (1440p)", 8),
    (130_000, "Pro Level (4K Entry)", 8),
    (180_000, "High-End (Content Creation)", 8),
    (250_000, "Ultra Tier (Heavy Duty)", 8),
    (350_000, "Extreme (Workshop)", 9),
    (550_000, "God Tier (Dream Build)", 8),
];

#[test]
fn test_budget_scenarios() {
    for (budget, expected_name, expected_parts) in SCENARIOS {
        let tier = select_tier(budget);
        assert_eq!(tier.name, expected_name, "budget {}", budget);
        assert_eq!(tier_name(budget), expected_name, "budget {}", budget);

        let rec = recommend(&RecommendRequest {
            budget,
            seed: Some(42),
        });
        assert_eq!(rec.parts.len(), expected_parts, "budget {}", budget);
    }
}

#[test]
fn test_both_top_bundles_share_a_name() {
    // The top band has a binned bundle below 550k and an unlimited one above,
    // both presented under the same tier name.
    assert_eq!(tier_name(450_000), tier_name(999_999));
    assert_ne!(
        recommend(&RecommendRequest {
            budget: 450_000,
            seed: Some(1),
        })
        .parts,
        recommend(&RecommendRequest {
            budget: 550_000,
            seed: Some(1),
        })
        .parts
    );
}

#[test]
fn test_every_build_has_the_core_slots() {
    for tier in &TIERS {
        let categories: Vec<PartCategory> = tier
            .pick_parts(&mut rand::rngs::mock::StepRng::new(0, 1))
            .iter()
            .map(|p| p.category)
            .collect();
        for required in [
            PartCategory::Cpu,
            PartCategory::Motherboard,
            PartCategory::Gpu,
            PartCategory::Ram,
            PartCategory::Storage,
            PartCategory::Psu,
            PartCategory::Case,
        ] {
            assert!(
                categories.contains(&required),
                "{} is missing {:?}",
                tier.name,
                required
            );
        }
    }
}

#[test]
fn test_thresholds_ascend_and_match_bundle_count() {
    assert!(THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(TIERS.len(), THRESHOLDS.len() + 1);
}

#[test]
fn test_recommendation_json_shape() {
    let rec = recommend(&RecommendRequest {
        budget: 75_000,
        seed: Some(9),
    });
    let value: serde_json::Value = serde_json::from_str(&serde_json::to_string(&rec).unwrap()).unwrap();
    assert_eq!(value["tier_name"], "Mid-Range (1080p Ultra)");
    assert_eq!(value["budget"], 75_000);
    assert_eq!(value["parts"].as_array().unwrap().len(), 8);
    assert!(value["parts"][0]["name"].is_string());
}

#[test]
fn test_seeded_recommendations_are_reproducible() {
    for budget in [30_000, 120_000, 480_000, 600_000] {
        let request = RecommendRequest {
            budget,
            seed: Some(1234),
        };
        assert_eq!(recommend(&request).parts, recommend(&request).parts);
    }
}
