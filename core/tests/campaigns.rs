//! Campaign catalog tests: step-function accumulation, horizon
//! clipping, additivity, and the overlap advisory.

use projection_core::{
    project, CampaignCatalog, MarketingCampaign, ProjectionConfig, ValidationError,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn campaign(id: &str, start: u32, duration: u32) -> MarketingCampaign {
    MarketingCampaign::new(id, id, start, duration, 2_500.0, 10_000, 0.05, 0.2, 1.0).unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Reach 10000 through a 5% x 20% x 100% funnel over 2 months yields
/// 100 users at 50/month: the cumulative series is 50, 100, then flat
/// at 100 through month 12.
#[test]
fn accumulation_vector_matches_funnel() {
    let mut catalog = CampaignCatalog::new();
    catalog.add(campaign("burst", 1, 2)).unwrap();

    let series = catalog.cumulative_users(12);

    assert!(
        (series[0] - 50.0).abs() < 1e-9,
        "month 1: one month of acquisition, got {}",
        series[0]
    );
    assert!(
        (series[1] - 100.0).abs() < 1e-9,
        "month 2: full campaign yield, got {}",
        series[1]
    );
    for (idx, value) in series.iter().enumerate().skip(2) {
        assert_eq!(
            *value,
            series[1],
            "month {}: series must stay flat after the window",
            idx + 1
        );
    }
}

/// The cumulative series never decreases, whatever the campaign mix.
#[test]
fn cumulative_series_is_monotone() {
    let mut catalog = CampaignCatalog::new();
    catalog.add(campaign("a", 1, 6)).unwrap();
    catalog.add(campaign("b", 4, 3)).unwrap();
    catalog.add(campaign("c", 10, 12)).unwrap();

    let series = catalog.cumulative_users(12);

    for pair in series.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "cumulative campaign users must never decrease"
        );
    }
}

/// With no campaigns every month reports zero campaign users and a
/// zero campaign growth rate.
#[test]
fn no_campaigns_means_zero_campaign_series() {
    let config = ProjectionConfig::default();

    let rows = project(&config, 12).unwrap();

    for row in &rows {
        assert_eq!(row.campaign_users, 0.0, "month {}", row.month);
        assert_eq!(row.campaign_growth_rate, 0.0, "month {}", row.month);
    }
}

/// Overlapping campaigns stack additively; nothing is capped or
/// deduplicated.
#[test]
fn overlapping_campaigns_accumulate_additively() {
    let mut together = CampaignCatalog::new();
    together.add(campaign("a", 1, 2)).unwrap();
    together.add(campaign("b", 1, 2)).unwrap();

    let mut only_a = CampaignCatalog::new();
    only_a.add(campaign("a", 1, 2)).unwrap();

    let combined = together.cumulative_users(6);
    let single = only_a.cumulative_users(6);

    for month in 0..6 {
        assert!(
            (combined[month] - single[month] * 2.0).abs() < 1e-9,
            "two identical campaigns must contribute double"
        );
    }
}

/// A window running past the horizon is clipped: only the in-horizon
/// months contribute, and that is not an error.
#[test]
fn window_is_clipped_to_horizon() {
    let mut catalog = CampaignCatalog::new();
    // 6-month window starting in month 11; only months 11 and 12 land
    // inside a 12-month horizon.
    catalog.add(campaign("late", 11, 6)).unwrap();

    let series = catalog.cumulative_users(12);
    let monthly = 100.0 / 6.0;

    assert_eq!(series[9], 0.0, "month 10: before the window");
    assert!((series[10] - monthly).abs() < 1e-9, "month 11");
    assert!((series[11] - 2.0 * monthly).abs() < 1e-9, "month 12");
}

/// A campaign starting after the horizon contributes nothing at all.
#[test]
fn campaign_beyond_horizon_contributes_nothing() {
    let mut catalog = CampaignCatalog::new();
    catalog.add(campaign("far", 8, 2)).unwrap();

    let series = catalog.cumulative_users(6);

    assert!(series.iter().all(|v| *v == 0.0));
}

/// The projection rows carry the catalog's cumulative series verbatim.
#[test]
fn projection_rows_carry_campaign_series() {
    let mut config = ProjectionConfig::default();
    config.campaigns.add(campaign("burst", 1, 2)).unwrap();

    let series = config.campaigns.cumulative_users(12);
    let rows = project(&config, 12).unwrap();

    for (row, expected) in rows.iter().zip(&series) {
        assert_eq!(row.campaign_users, *expected, "month {}", row.month);
    }
}

/// The campaign growth rate is positive only while the cumulative
/// series is rising; it drops back to zero once the window closes.
#[test]
fn campaign_growth_rate_follows_the_window() {
    let mut config = ProjectionConfig::default();
    config.campaigns.add(campaign("burst", 2, 2)).unwrap();

    let rows = project(&config, 6).unwrap();

    assert_eq!(rows[0].campaign_growth_rate, 0.0, "before the window");
    assert!(rows[1].campaign_growth_rate > 0.0, "window month 2");
    assert!(rows[2].campaign_growth_rate > 0.0, "window month 3");
    assert_eq!(rows[3].campaign_growth_rate, 0.0, "after the window");
    assert_eq!(rows[5].campaign_growth_rate, 0.0, "long after the window");
}

/// Adding an intersecting campaign surfaces an advisory but still adds
/// the campaign; disjoint campaigns produce no advisory.
#[test]
fn overlap_advisory_is_non_blocking() {
    let mut catalog = CampaignCatalog::new();

    let none = catalog.add(campaign("first", 1, 2)).unwrap();
    assert!(none.is_empty(), "first campaign has nothing to overlap");

    // [3, 5] touches [1, 3] on the inclusive bound.
    let advisories = catalog.add(campaign("second", 3, 2)).unwrap();
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].existing_campaign_id, "first");
    assert_eq!(advisories[0].existing_start_month, 1);
    assert_eq!(catalog.len(), 2, "overlap never rejects the addition");

    let disjoint = catalog.add(campaign("third", 9, 1)).unwrap();
    assert!(disjoint.is_empty(), "[9, 10] intersects neither window");
    assert_eq!(catalog.len(), 3);
}

/// Campaign ids are unique within a catalog.
#[test]
fn duplicate_campaign_id_is_rejected() {
    let mut catalog = CampaignCatalog::new();
    catalog.add(campaign("promo", 1, 2)).unwrap();

    let err = catalog.add(campaign("promo", 6, 2)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateCampaign("promo".to_string())
    );
    assert_eq!(catalog.len(), 1);
}

/// remove() deletes by id and reports whether anything matched.
#[test]
fn remove_campaign_by_id() {
    let mut catalog = CampaignCatalog::new();
    catalog.add(campaign("keep", 1, 2)).unwrap();
    catalog.add(campaign("drop", 5, 2)).unwrap();

    assert!(catalog.remove("drop"));
    assert_eq!(catalog.len(), 1);
    assert!(!catalog.remove("drop"), "second removal finds nothing");
    assert!(catalog.iter().all(|c| c.campaign_id() == "keep"));
}
