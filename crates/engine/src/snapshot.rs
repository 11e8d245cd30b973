//! The derived risk snapshot and its recompute system.

use bevy::prelude::*;
use serde::Serialize;

use crate::advice::{advice_for, AdviceEntry};
use crate::city_impact::{city_impact, CityImpact};
use crate::heat_index::{classify_risk, compute_heat_index, RiskTier};
use crate::heat_trend::{hourly_outlook, HeatTrend};
use crate::heat_wave::{detect_heatwave, HeatwaveStatus};
use crate::predictive_risk::{project_risk, PredictiveOutlook};
use crate::preferences::UserPreferences;
use crate::system_impact::{system_impact, SystemImpact};
use crate::weather::{Forecast, WeatherSample};

/// Everything the presentation layer needs, derived in one pass.
///
/// The record is rebuilt and replaced wholesale whenever any input changes;
/// consumers never see a partially updated mix of old and new fields.
#[derive(Resource, Clone, Debug, PartialEq, Serialize)]
pub struct RiskSnapshot {
    /// Perceived heat, rounded for display.
    pub heat_index: i32,
    /// Risk tier for the current heat index.
    pub risk: RiskTier,
    /// Safety advice for the current tier, three entries.
    pub advice: &'static [AdviceEntry],
    /// Heatwave scan over the daily forecast.
    pub heatwave: HeatwaveStatus,
    /// Predictive risk series and the momentum it ended on.
    pub outlook: PredictiveOutlook,
    /// City-wide risk figures.
    pub city: CityImpact,
    /// Civic-infrastructure strain figures.
    pub system: SystemImpact,
    /// Heat indices for the next few hours, when hourly data is present.
    pub hourly_heat_index: Vec<i32>,
    /// Short-term trend of the hourly outlook, `None` without hourly data.
    pub trend: Option<HeatTrend>,
}

impl RiskSnapshot {
    /// Run the full derivation pipeline.
    ///
    /// Stages run in a fixed order -- heat index, tier, advice, heatwave
    /// scan, predictive fold, city impact, system impact -- and every later
    /// stage receives the earlier results it depends on as parameters. The
    /// system-impact stage in particular takes the heatwave multiplier and
    /// the final momentum explicitly, so the dependency is carried by the
    /// call graph rather than by shared state.
    pub fn compute(
        weather: &WeatherSample,
        forecast: &Forecast,
        prefs: &UserPreferences,
    ) -> Self {
        let heat_index = compute_heat_index(weather.temperature_c, weather.relative_humidity_pct)
            .round() as i32;
        let hi = heat_index as f32;

        let risk = classify_risk(hi);
        let advice = advice_for(risk);

        let heatwave = detect_heatwave(&forecast.daily_max_c);
        let outlook = project_risk(&forecast.daily_max_c, prefs.vulnerable);

        let city = city_impact(hi, prefs.policy_center_count);
        let system = system_impact(
            city.risk_percent,
            heatwave.demand_multiplier(),
            outlook.momentum,
            prefs.policy_center_count,
        );

        let (hourly_heat_index, trend) = hourly_outlook(
            &forecast.hourly_temperature_c,
            &forecast.hourly_humidity_pct,
            forecast.hour_index,
            heat_index,
        );

        Self {
            heat_index,
            risk,
            advice,
            heatwave,
            outlook,
            city,
            system,
            hourly_heat_index,
            trend,
        }
    }
}

impl Default for RiskSnapshot {
    fn default() -> Self {
        Self::compute(
            &WeatherSample::default(),
            &Forecast::default(),
            &UserPreferences::default(),
        )
    }
}

/// Rebuild the snapshot when any input resource changed.
///
/// There is no partial update path: a changed vulnerability flag re-derives
/// the heat index too. The pipeline is cheap enough that recomputing
/// everything is simpler than tracking which stages a given input feeds.
pub fn refresh_snapshot(
    weather: Res<WeatherSample>,
    forecast: Res<Forecast>,
    prefs: Res<UserPreferences>,
    mut snapshot: ResMut<RiskSnapshot>,
) {
    if !(weather.is_changed() || forecast.is_changed() || prefs.is_changed()) {
        return;
    }
    *snapshot = RiskSnapshot::compute(&weather, &forecast, &prefs);
}

/// Log a one-line summary whenever a fresh snapshot lands.
pub fn report_snapshot(snapshot: Res<RiskSnapshot>) {
    if !snapshot.is_changed() {
        return;
    }
    info!(
        "risk {} (heat index {}) | city {}% {} | stress {}",
        snapshot.risk.label(),
        snapshot.heat_index,
        snapshot.city.risk_percent,
        snapshot.city.risk_level.label(),
        snapshot.system.stress.label(),
    );
}
