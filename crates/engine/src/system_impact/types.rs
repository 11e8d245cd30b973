//! Output types for the system-impact calculations.

use serde::{Deserialize, Serialize};

/// Qualitative strain tier, a pure function of the computed hospital load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SystemStress {
    #[default]
    Stable,
    Elevated,
    High,
    Critical,
}

impl SystemStress {
    pub fn label(self) -> &'static str {
        match self {
            SystemStress::Stable => "Stable",
            SystemStress::Elevated => "Elevated",
            SystemStress::High => "High",
            SystemStress::Critical => "Critical",
        }
    }
}

/// Civic-infrastructure strain figures for the current conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemImpact {
    /// Hospital load, percent of capacity (0-100).
    pub hospital_load_pct: u32,
    /// Emergency-call volume increase over baseline, percent (0-200).
    pub emergency_call_increase_pct: u32,
    /// Cooling-grid demand, percent of capacity (0-100).
    pub cooling_demand_pct: u32,
    /// Strain tier derived from the hospital load.
    pub stress: SystemStress,
}
