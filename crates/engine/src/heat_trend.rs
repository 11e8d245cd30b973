//! Short-term heat trend from the hourly forecast.
//!
//! Looks at the heat index over the next few hours and classifies whether
//! perceived heat is rising, falling, or holding steady relative to now.

use serde::{Deserialize, Serialize};

use crate::heat_index::compute_heat_index;

/// Hours of hourly forecast consulted for the trend.
pub const OUTLOOK_HOURS: usize = 3;
/// Dead band around the current heat index within which the trend reads as
/// steady.
const TREND_DEAD_BAND: f32 = 1.0;

/// Direction of the short-term heat trend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatTrend {
    Rising,
    Falling,
    Steady,
}

impl HeatTrend {
    pub fn label(self) -> &'static str {
        match self {
            HeatTrend::Rising => "Rising",
            HeatTrend::Falling => "Falling",
            HeatTrend::Steady => "Steady",
        }
    }
}

/// Heat indices for the next [`OUTLOOK_HOURS`] hours after `hour_index`, and
/// the trend of their average against the current heat index.
///
/// Fewer than [`OUTLOOK_HOURS`] values are returned when the hourly arrays
/// end early; the trend is `None` when no future hours are available at all.
pub fn hourly_outlook(
    hourly_temperature_c: &[f32],
    hourly_humidity_pct: &[f32],
    hour_index: usize,
    current_heat_index: i32,
) -> (Vec<i32>, Option<HeatTrend>) {
    let len = hourly_temperature_c.len().min(hourly_humidity_pct.len());

    let mut upcoming = Vec::with_capacity(OUTLOOK_HOURS);
    for offset in 1..=OUTLOOK_HOURS {
        let idx = hour_index + offset;
        if idx >= len {
            break;
        }
        let hi = compute_heat_index(hourly_temperature_c[idx], hourly_humidity_pct[idx]);
        upcoming.push(hi.round() as i32);
    }

    if upcoming.is_empty() {
        return (upcoming, None);
    }

    let avg = upcoming.iter().sum::<i32>() as f32 / upcoming.len() as f32;
    let current = current_heat_index as f32;
    let trend = if avg > current + TREND_DEAD_BAND {
        HeatTrend::Rising
    } else if avg < current - TREND_DEAD_BAND {
        HeatTrend::Falling
    } else {
        HeatTrend::Steady
    };

    (upcoming, Some(trend))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hourly_data_means_no_trend() {
        let (upcoming, trend) = hourly_outlook(&[], &[], 0, 30);
        assert!(upcoming.is_empty());
        assert_eq!(trend, None);
    }

    #[test]
    fn test_outlook_is_capped_at_three_hours() {
        let temps = vec![30.0; 24];
        let hums = vec![50.0; 24];
        let (upcoming, _) = hourly_outlook(&temps, &hums, 5, 30);
        assert_eq!(upcoming.len(), OUTLOOK_HOURS);
    }

    #[test]
    fn test_outlook_truncates_at_array_end() {
        let temps = vec![30.0; 10];
        let hums = vec![50.0; 10];
        let (upcoming, trend) = hourly_outlook(&temps, &hums, 8, 30);
        assert_eq!(upcoming.len(), 1, "only hour 9 remains");
        assert!(trend.is_some());
    }

    #[test]
    fn test_rising_trend() {
        // Hotter and more humid hours ahead push the average well above now.
        let temps = vec![32.0, 36.0, 37.0, 38.0];
        let hums = vec![50.0, 60.0, 60.0, 60.0];
        let current = compute_heat_index(32.0, 50.0).round() as i32;
        let (_, trend) = hourly_outlook(&temps, &hums, 0, current);
        assert_eq!(trend, Some(HeatTrend::Rising));
    }

    #[test]
    fn test_falling_trend() {
        let temps = vec![38.0, 30.0, 29.0, 28.0];
        let hums = vec![60.0, 50.0, 50.0, 50.0];
        let current = compute_heat_index(38.0, 60.0).round() as i32;
        let (_, trend) = hourly_outlook(&temps, &hums, 0, current);
        assert_eq!(trend, Some(HeatTrend::Falling));
    }

    #[test]
    fn test_steady_within_dead_band() {
        let temps = vec![30.0, 30.0, 30.0, 30.0];
        let hums = vec![50.0, 50.0, 50.0, 50.0];
        let current = compute_heat_index(30.0, 50.0).round() as i32;
        let (_, trend) = hourly_outlook(&temps, &hums, 0, current);
        assert_eq!(trend, Some(HeatTrend::Steady));
    }

    #[test]
    fn test_mismatched_array_lengths_use_shorter() {
        let temps = vec![30.0; 10];
        let hums = vec![50.0; 3];
        let (upcoming, _) = hourly_outlook(&temps, &hums, 1, 30);
        assert_eq!(upcoming.len(), 1, "humidity array ends at index 2");
    }
}
