//! Configuration snapshot and JSON-file loading tests.

use projection_core::{
    config::{DEFAULT_INITIAL_USERS, MAX_CHURN_RATE},
    GrowthScenario, ProjectionConfig,
};
use std::fs;
use std::path::PathBuf;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("projection-config-{name}.json"));
    fs::write(&path, content).unwrap();
    path
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// The default snapshot: Moderate growth, churn off, the three seed
/// tiers, no campaigns, 100 initial users.
#[test]
fn default_config_is_runnable() {
    let config = ProjectionConfig::default();

    assert_eq!(config.scenario, GrowthScenario::Moderate);
    assert!(!config.enable_churn);
    assert_eq!(config.tiers.len(), 3);
    assert!(config.campaigns.is_empty());
    assert_eq!(config.initial_users, DEFAULT_INITIAL_USERS);
    assert_eq!(config.net_growth_rate().unwrap(), 0.08);
}

/// Seed tier distributions describe the shipped product mix.
#[test]
fn seed_tiers_carry_the_product_catalog() {
    let config = ProjectionConfig::default();
    let names: Vec<&str> = config.tiers.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["Basic", "Standard", "Premium"]);

    let share_sum: f64 = config
        .tiers
        .iter()
        .map(|t| t.distribution_percentage())
        .sum();
    assert!((share_sum - 1.0).abs() < 1e-9);
}

/// A well-formed JSON file loads into a validated snapshot.
#[test]
fn json_file_loads_and_validates() {
    let path = write_temp_config(
        "valid",
        r#"{
            "growth_scenario": "Aggressive (12% monthly)",
            "enable_churn": true,
            "churn_rate": 0.05,
            "initial_users": 500,
            "tiers": [
                { "name": "Solo", "monthly_price": 9.0, "distribution_percentage": 0.8 },
                { "name": "Team", "monthly_price": 29.0, "features": ["Seats"], "distribution_percentage": 0.2 }
            ],
            "campaigns": [
                {
                    "name": "Launch", "campaign_id": "launch",
                    "start_month": 1, "duration_months": 2,
                    "budget": 1000.0, "expected_reach": 10000,
                    "reach_to_download_rate": 0.05,
                    "download_to_active_rate": 0.2,
                    "active_to_subscriber_rate": 1.0
                }
            ]
        }"#,
    );

    let config = ProjectionConfig::from_json_file(&path).unwrap();

    assert_eq!(config.scenario, GrowthScenario::Aggressive);
    assert!(config.enable_churn);
    assert!(config.churn_rate <= MAX_CHURN_RATE);
    assert_eq!(config.initial_users, 500.0);
    assert_eq!(config.tiers.len(), 2);
    assert_eq!(config.campaigns.len(), 1);
}

/// A file with an out-of-range tier price is rejected as a whole.
#[test]
fn json_file_with_invalid_tier_is_rejected() {
    let path = write_temp_config(
        "bad-price",
        r#"{
            "growth_scenario": "Moderate (8% monthly)",
            "tiers": [
                { "name": "Gold", "monthly_price": 250.0, "distribution_percentage": 0.5 }
            ]
        }"#,
    );

    let err = ProjectionConfig::from_json_file(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid configuration"));
}

/// An unknown scenario label in the file is rejected.
#[test]
fn json_file_with_unknown_scenario_is_rejected() {
    let path = write_temp_config(
        "bad-scenario",
        r#"{
            "growth_scenario": "Meteoric",
            "tiers": [
                { "name": "Solo", "monthly_price": 9.0, "distribution_percentage": 1.0 }
            ]
        }"#,
    );

    assert!(ProjectionConfig::from_json_file(&path).is_err());
}

/// A missing file surfaces a readable error, not a panic.
#[test]
fn missing_config_file_is_an_error() {
    let err =
        ProjectionConfig::from_json_file("/nonexistent/projection.json").unwrap_err();
    assert!(err.to_string().contains("Cannot read"));
}
