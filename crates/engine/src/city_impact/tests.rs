//! Unit tests for the city-wide risk figures.

use super::calculations::*;
use super::constants::*;
use super::types::CityRiskLevel;

// -------------------------------------------------------------------------
// Risk profile
// -------------------------------------------------------------------------

#[test]
fn test_profile_per_tier() {
    assert_eq!(city_risk_profile(20.0), (15, CityRiskLevel::Low));
    assert_eq!(city_risk_profile(28.0), (35, CityRiskLevel::Moderate));
    assert_eq!(city_risk_profile(37.0), (65, CityRiskLevel::High));
    assert_eq!(city_risk_profile(45.0), (85, CityRiskLevel::Critical));
}

#[test]
fn test_profile_boundaries_match_tier_boundaries() {
    assert_eq!(city_risk_profile(26.999).0, 15);
    assert_eq!(city_risk_profile(27.0).0, 35);
    assert_eq!(city_risk_profile(32.0).0, 65);
    assert_eq!(city_risk_profile(41.0).0, 85);
}

// -------------------------------------------------------------------------
// Vulnerable population estimate
// -------------------------------------------------------------------------

#[test]
fn test_vulnerable_estimate_per_level() {
    // 500k * 0.18 = 90k vulnerable residents; scaled by the risk percent.
    assert_eq!(vulnerable_at_risk(15), 13_500);
    assert_eq!(vulnerable_at_risk(35), 31_500);
    assert_eq!(vulnerable_at_risk(65), 58_500);
    assert_eq!(vulnerable_at_risk(85), 76_500);
}

#[test]
fn test_vulnerable_estimate_extremes() {
    assert_eq!(vulnerable_at_risk(0), 0);
    assert_eq!(vulnerable_at_risk(100), 90_000);
}

// -------------------------------------------------------------------------
// Active centers
// -------------------------------------------------------------------------

#[test]
fn test_center_baseline_floor() {
    // Low demand never drops below the baseline.
    assert_eq!(active_centers(15, 0), MIN_ACTIVE_CENTERS);
    assert_eq!(active_centers(35, 0), MIN_ACTIVE_CENTERS);
}

#[test]
fn test_centers_scale_with_demand() {
    assert_eq!(active_centers(65, 0), 7);
    assert_eq!(active_centers(85, 0), 9);
}

#[test]
fn test_policy_centers_add_one_to_one_uncapped() {
    assert_eq!(active_centers(85, 1), 10);
    assert_eq!(active_centers(85, 50), 59);
    assert_eq!(active_centers(15, 200), 205);
}

// -------------------------------------------------------------------------
// Full record
// -------------------------------------------------------------------------

#[test]
fn test_city_impact_record_is_consistent() {
    let impact = city_impact(45.0, 3);
    assert_eq!(impact.risk_percent, 85);
    assert_eq!(impact.risk_level, CityRiskLevel::Critical);
    assert_eq!(impact.vulnerable_at_risk, 76_500);
    assert_eq!(impact.active_centers, 12);
}
