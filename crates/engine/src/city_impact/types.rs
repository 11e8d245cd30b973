//! Output types for the city-wide risk figures.

use serde::{Deserialize, Serialize};

/// Qualitative city risk level, paired one-to-one with the risk percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CityRiskLevel {
    #[default]
    Low,
    Moderate,
    High,
    Critical,
}

impl CityRiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            CityRiskLevel::Low => "Low",
            CityRiskLevel::Moderate => "Moderate",
            CityRiskLevel::High => "High",
            CityRiskLevel::Critical => "Critical",
        }
    }
}

/// City-wide risk figures for the current conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityImpact {
    /// Share of the city at risk, percent (0-100).
    pub risk_percent: u32,
    /// Qualitative level matching `risk_percent`.
    pub risk_level: CityRiskLevel,
    /// Estimated vulnerable residents exposed at this risk level.
    pub vulnerable_at_risk: u32,
    /// Cooling centers open: demand-driven baseline plus policy-simulated
    /// additions.
    pub active_centers: u32,
}
