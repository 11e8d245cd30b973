//! Pure functions for the predictive risk fold.

use crate::heat_index::{CAUTION_THRESHOLD, DANGER_THRESHOLD, EXTREME_THRESHOLD};

use super::constants::*;
use super::types::{DayRisk, PredictiveOutlook};

/// Map a forecast maximum to a base risk ordinal 1-4.
///
/// Uses the same boundary values as the heat-index tiers but applied to raw
/// temperature: daily forecast entries carry no humidity, so no heat index
/// exists for them.
pub fn base_risk_ordinal(temp_c: f32) -> u32 {
    if temp_c < CAUTION_THRESHOLD {
        1
    } else if temp_c < DANGER_THRESHOLD {
        2
    } else if temp_c < EXTREME_THRESHOLD {
        3
    } else {
        4
    }
}

/// Advance the momentum accumulator by one forecast day: hot days add
/// [`MOMENTUM_GAIN`], cooler days decay by [`MOMENTUM_DECAY`] floored at 0.
pub fn step_momentum(momentum: f32, temp_c: f32) -> f32 {
    if temp_c >= MOMENTUM_GAIN_THRESHOLD_C {
        momentum + MOMENTUM_GAIN
    } else {
        (momentum - MOMENTUM_DECAY).max(0.0)
    }
}

fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Project risk scores over the first [`FORECAST_HORIZON_DAYS`] forecast
/// days.
///
/// The momentum accumulator starts at 0 and is carried across the fold (not
/// reset per day), so each day's score reflects the heat history of the days
/// before it. Score = `(base + momentum) * vulnerable multiplier`, rounded to
/// one decimal. An empty forecast yields an empty series with zero momentum.
pub fn project_risk(daily_max_c: &[f32], vulnerable: bool) -> PredictiveOutlook {
    let modifier = if vulnerable { VULNERABLE_MULTIPLIER } else { 1.0 };

    let mut momentum = 0.0_f32;
    let mut series = Vec::with_capacity(FORECAST_HORIZON_DAYS);

    for (day, &temp) in daily_max_c.iter().take(FORECAST_HORIZON_DAYS).enumerate() {
        let base = base_risk_ordinal(temp) as f32;
        momentum = step_momentum(momentum, temp);
        series.push(DayRisk {
            day_offset: day as u32,
            score: round_to_tenth((base + momentum) * modifier),
        });
    }

    PredictiveOutlook { series, momentum }
}
