//! Input resources: the current weather sample and the forecast arrays.
//!
//! Both resources are written by the caller (an upstream fetcher, the app
//! binary, or a test) with already-resolved values. The engine never performs
//! the acquisition itself; it only reacts to changes here.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Current conditions at the observed location.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Air temperature in Celsius.
    pub temperature_c: f32,
    /// Relative humidity in percent (0-100).
    pub relative_humidity_pct: f32,
}

impl Default for WeatherSample {
    fn default() -> Self {
        Self {
            temperature_c: 21.0,
            relative_humidity_pct: 50.0,
        }
    }
}

/// Forecast arrays for the observed location.
///
/// `daily_max_c[0]` is today's forecast maximum; the array is chronological
/// and typically 5-7 entries long, but any length (including empty) is
/// accepted. The hourly arrays cover the forecast day range at one entry per
/// hour, with `hour_index` marking the entry that corresponds to "now".
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Daily maximum temperatures in Celsius, index 0 = today.
    pub daily_max_c: Vec<f32>,
    /// Hourly temperatures in Celsius.
    pub hourly_temperature_c: Vec<f32>,
    /// Hourly relative humidity in percent, parallel to `hourly_temperature_c`.
    pub hourly_humidity_pct: Vec<f32>,
    /// Index of the current hour within the hourly arrays.
    pub hour_index: usize,
}

impl Forecast {
    /// Forecast with daily maxima only (no hourly data).
    pub fn from_daily(daily_max_c: Vec<f32>) -> Self {
        Self {
            daily_max_c,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_is_mild() {
        let sample = WeatherSample::default();
        assert!(sample.temperature_c < 27.0);
        assert!((0.0..=100.0).contains(&sample.relative_humidity_pct));
    }

    #[test]
    fn test_default_forecast_is_empty() {
        let forecast = Forecast::default();
        assert!(forecast.daily_max_c.is_empty());
        assert!(forecast.hourly_temperature_c.is_empty());
        assert_eq!(forecast.hour_index, 0);
    }

    #[test]
    fn test_from_daily() {
        let forecast = Forecast::from_daily(vec![36.0, 35.0, 33.0]);
        assert_eq!(forecast.daily_max_c.len(), 3);
        assert!(forecast.hourly_temperature_c.is_empty());
    }
}
