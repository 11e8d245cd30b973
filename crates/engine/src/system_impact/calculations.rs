//! Pure functions for the system-impact calculations.

use super::constants::*;
use super::types::{SystemImpact, SystemStress};

/// Mitigation factor from policy-simulated centers: each center shaves
/// [`MITIGATION_PER_CENTER`] off hospital load, saturating at
/// [`MITIGATION_CAP`]. Returns the multiplier applied to the load (1.0 = no
/// mitigation, 0.6 = fully saturated).
pub fn mitigation_factor(policy_center_count: u32) -> f32 {
    let mitigation = (policy_center_count as f32 * MITIGATION_PER_CENTER).min(MITIGATION_CAP);
    1.0 - mitigation
}

/// Hospital load before display rounding, capped at
/// [`HOSPITAL_LOAD_CAP`]:
///
/// `load = percent * 0.6 * heatwave_multiplier * (1 + momentum * 0.1)
///         * mitigation_factor`
pub fn hospital_load(
    risk_percent: u32,
    heatwave_multiplier: f32,
    momentum: f32,
    policy_center_count: u32,
) -> f32 {
    let base = risk_percent as f32 * HOSPITAL_LOAD_PER_RISK_POINT;
    let momentum_factor = 1.0 + momentum * MOMENTUM_LOAD_FACTOR;
    let load = base * heatwave_multiplier * momentum_factor * mitigation_factor(policy_center_count);
    load.min(HOSPITAL_LOAD_CAP)
}

/// Strain tier for a given (unrounded) hospital load.
pub fn stress_tier(hospital_load: f32) -> SystemStress {
    if hospital_load < STRESS_ELEVATED_THRESHOLD {
        SystemStress::Stable
    } else if hospital_load < STRESS_HIGH_THRESHOLD {
        SystemStress::Elevated
    } else if hospital_load < STRESS_CRITICAL_THRESHOLD {
        SystemStress::High
    } else {
        SystemStress::Critical
    }
}

/// Assemble the full system-impact record.
///
/// `heatwave_multiplier` and `momentum` come from the heatwave scan and the
/// predictive fold of the same recompute pass; passing them explicitly keeps
/// the stage ordering visible at the call site. Emergency calls and the
/// stress tier derive from the load before display rounding.
pub fn system_impact(
    risk_percent: u32,
    heatwave_multiplier: f32,
    momentum: f32,
    policy_center_count: u32,
) -> SystemImpact {
    let load = hospital_load(
        risk_percent,
        heatwave_multiplier,
        momentum,
        policy_center_count,
    );

    let emergency = ((load * EMERGENCY_CALL_FACTOR).round() as u32).min(EMERGENCY_CALL_CAP);

    let surge = (risk_percent as f32 * heatwave_multiplier).round()
        + policy_center_count as f32 * COOLING_PER_POLICY_CENTER;
    let cooling = surge.min(COOLING_DEMAND_CAP).round() as u32;

    SystemImpact {
        hospital_load_pct: load.round() as u32,
        emergency_call_increase_pct: emergency,
        cooling_demand_pct: cooling,
        stress: stress_tier(load),
    }
}
