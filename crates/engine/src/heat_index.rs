//! Heat index computation and risk tier classification.

use serde::{Deserialize, Serialize};

/// Lower bound of the Caution tier (heat index, Celsius-like units).
pub const CAUTION_THRESHOLD: f32 = 27.0;
/// Lower bound of the Danger tier.
pub const DANGER_THRESHOLD: f32 = 32.0;
/// Lower bound of the Extreme tier.
pub const EXTREME_THRESHOLD: f32 = 41.0;

/// Perceived-heat risk tiers, ordered from harmless to dangerous.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum RiskTier {
    #[default]
    Safe,
    Caution,
    Danger,
    Extreme,
}

impl RiskTier {
    /// Display label, uppercase as shown to users.
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Safe => "SAFE",
            RiskTier::Caution => "CAUTION",
            RiskTier::Danger => "DANGER",
            RiskTier::Extreme => "EXTREME",
        }
    }
}

/// Compute the heat index from temperature (Celsius) and relative humidity
/// (percent) using the Rothfusz regression:
///
/// `HI = -8.784695 + 1.61139411*T + 2.338549*R - 0.14611605*T*R
///       - 0.012308094*T^2 - 0.01642482777*R^2 + 0.002211732*T^2*R
///       + 0.00072546*T*R^2 - 0.000003582*T^2*R^2`
///
/// The polynomial is total over finite inputs but only physically meaningful
/// above roughly 20C. Callers round to the nearest integer for display.
pub fn compute_heat_index(temperature_c: f32, humidity_pct: f32) -> f32 {
    let t = temperature_c;
    let r = humidity_pct;
    -8.784695
        + 1.61139411 * t
        + 2.338549 * r
        - 0.14611605 * t * r
        - 0.012308094 * t * t
        - 0.01642482777 * r * r
        + 0.002211732 * t * t * r
        + 0.00072546 * t * r * r
        - 0.000003582 * t * t * r * r
}

/// Classify a heat index into a risk tier. Tier boundaries are fixed and
/// left-inclusive on the lower bound, partitioning the whole axis with no
/// gaps or overlaps.
pub fn classify_risk(heat_index: f32) -> RiskTier {
    if heat_index < CAUTION_THRESHOLD {
        RiskTier::Safe
    } else if heat_index < DANGER_THRESHOLD {
        RiskTier::Caution
    } else if heat_index < EXTREME_THRESHOLD {
        RiskTier::Danger
    } else {
        RiskTier::Extreme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_left_inclusive() {
        assert_eq!(classify_risk(26.999), RiskTier::Safe);
        assert_eq!(classify_risk(27.0), RiskTier::Caution);
        assert_eq!(classify_risk(31.999), RiskTier::Caution);
        assert_eq!(classify_risk(32.0), RiskTier::Danger);
        assert_eq!(classify_risk(40.999), RiskTier::Danger);
        assert_eq!(classify_risk(41.0), RiskTier::Extreme);
    }

    #[test]
    fn test_tiers_cover_extremes() {
        assert_eq!(classify_risk(-40.0), RiskTier::Safe);
        assert_eq!(classify_risk(80.0), RiskTier::Extreme);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::Safe < RiskTier::Caution);
        assert!(RiskTier::Caution < RiskTier::Danger);
        assert!(RiskTier::Danger < RiskTier::Extreme);
    }

    #[test]
    fn test_heat_index_reference_value() {
        // T=32C, R=60%: summing the nine regression terms by hand gives
        // ~37.074. Guards against coefficient drift.
        let hi = compute_heat_index(32.0, 60.0);
        assert!(
            (hi - 37.074).abs() < 0.01,
            "expected ~37.074, got {}",
            hi
        );
        assert_eq!(hi.round() as i32, 37);
    }

    #[test]
    fn test_heat_index_rises_with_humidity_when_hot() {
        let dry = compute_heat_index(38.0, 30.0);
        let humid = compute_heat_index(38.0, 70.0);
        assert!(
            humid > dry,
            "humidity should amplify perceived heat: {} vs {}",
            humid,
            dry
        );
    }

    #[test]
    fn test_heat_index_total_over_odd_inputs() {
        // Not physically meaningful, but the regression stays finite.
        assert!(compute_heat_index(-10.0, 0.0).is_finite());
        assert!(compute_heat_index(55.0, 100.0).is_finite());
    }
}
