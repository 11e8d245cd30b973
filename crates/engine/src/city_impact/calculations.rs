//! Pure functions for the city-wide risk figures.

use crate::heat_index::{classify_risk, RiskTier};

use super::constants::*;
use super::types::{CityImpact, CityRiskLevel};

/// Fixed (percent, level) pair for each heat-index tier.
pub fn city_risk_profile(heat_index: f32) -> (u32, CityRiskLevel) {
    match classify_risk(heat_index) {
        RiskTier::Safe => (15, CityRiskLevel::Low),
        RiskTier::Caution => (35, CityRiskLevel::Moderate),
        RiskTier::Danger => (65, CityRiskLevel::High),
        RiskTier::Extreme => (85, CityRiskLevel::Critical),
    }
}

/// Estimated vulnerable residents exposed at the given risk percentage.
pub fn vulnerable_at_risk(risk_percent: u32) -> u32 {
    let exposed =
        CITY_POPULATION as f32 * VULNERABLE_POPULATION_RATIO * (risk_percent as f32 / 100.0);
    exposed.round() as u32
}

/// Cooling centers open at the given demand level: one per ten risk points,
/// never fewer than [`MIN_ACTIVE_CENTERS`], plus policy-simulated centers 1:1.
pub fn active_centers(risk_percent: u32, policy_center_count: u32) -> u32 {
    let demand_driven = (risk_percent as f32 / 10.0).round() as u32;
    demand_driven.max(MIN_ACTIVE_CENTERS) + policy_center_count
}

/// Assemble the full city impact record for the given heat index.
pub fn city_impact(heat_index: f32, policy_center_count: u32) -> CityImpact {
    let (risk_percent, risk_level) = city_risk_profile(heat_index);
    CityImpact {
        risk_percent,
        risk_level,
        vulnerable_at_risk: vulnerable_at_risk(risk_percent),
        active_centers: active_centers(risk_percent, policy_center_count),
    }
}
