//! Heatwave detection over the daily forecast.

use serde::{Deserialize, Serialize};

/// Forecast maximum at or above this temperature counts as a heatwave day.
pub const HEATWAVE_TEMP_THRESHOLD_C: f32 = 35.0;
/// Minimum run of consecutive hot days before a heatwave is declared.
pub const MIN_HEATWAVE_DAYS: u32 = 3;

/// Heatwave severity, escalating with the length of the hot-day run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatwaveLevel {
    Moderate,
    Severe,
    Extreme,
}

impl HeatwaveLevel {
    pub fn label(self) -> &'static str {
        match self {
            HeatwaveLevel::Moderate => "Moderate",
            HeatwaveLevel::Severe => "Severe",
            HeatwaveLevel::Extreme => "Extreme",
        }
    }

    /// Demand multiplier applied to city-wide impact figures while the
    /// heatwave lasts.
    pub fn demand_multiplier(self) -> f32 {
        match self {
            HeatwaveLevel::Moderate => 1.1,
            HeatwaveLevel::Severe => 1.25,
            HeatwaveLevel::Extreme => 1.4,
        }
    }
}

/// Result of scanning the daily forecast for an ongoing heatwave.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatwaveStatus {
    /// Whether a heatwave is in effect (run of hot days >= 3).
    pub active: bool,
    /// Severity when active, `None` otherwise.
    pub level: Option<HeatwaveLevel>,
    /// Length of the unbroken hot-day run starting today; 0 when inactive.
    pub consecutive_days: u32,
}

impl HeatwaveStatus {
    /// Demand multiplier: 1.0 when no heatwave is active.
    pub fn demand_multiplier(&self) -> f32 {
        self.level.map_or(1.0, HeatwaveLevel::demand_multiplier)
    }
}

/// Scan the daily forecast for a heatwave.
///
/// The walk counts consecutive days with a forecast maximum at or above
/// [`HEATWAVE_TEMP_THRESHOLD_C`], starting at day 0 and stopping at the first
/// cooler day. A qualifying day after the break does not extend the run; only
/// the unbroken prefix counts. Runs shorter than [`MIN_HEATWAVE_DAYS`] report
/// as inactive with a count of 0.
pub fn detect_heatwave(daily_max_c: &[f32]) -> HeatwaveStatus {
    let run = daily_max_c
        .iter()
        .take_while(|&&t| t >= HEATWAVE_TEMP_THRESHOLD_C)
        .count() as u32;

    if run < MIN_HEATWAVE_DAYS {
        return HeatwaveStatus::default();
    }

    let level = match run {
        3 => HeatwaveLevel::Moderate,
        4 => HeatwaveLevel::Severe,
        _ => HeatwaveLevel::Extreme,
    };

    HeatwaveStatus {
        active: true,
        level: Some(level),
        consecutive_days: run,
    }
}
