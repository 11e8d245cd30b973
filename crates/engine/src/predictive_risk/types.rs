//! Output types for the predictive risk projection.

use serde::{Deserialize, Serialize};

/// Predicted risk score for a single forecast day.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayRisk {
    /// Offset from today: 0 = today, 1 = tomorrow, ...
    pub day_offset: u32,
    /// Predicted score, rounded to one decimal place.
    pub score: f32,
}

/// The projected series plus the momentum the fold ended on.
///
/// Momentum is refolded from scratch on every recompute; the value here is
/// the accumulator after the last projected day, not state carried between
/// engine invocations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictiveOutlook {
    pub series: Vec<DayRisk>,
    pub momentum: f32,
}
