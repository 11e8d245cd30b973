//! Headless-App harness for end-to-end engine tests.
//!
//! `TestApp` wraps a minimal Bevy `App` with the engine plugin installed and
//! exposes builder methods for the input resources, mutators for mid-test
//! changes, and read accessors plus assertions on the derived state. A probe
//! system in the `Report` phase counts snapshot recomputes so tests can
//! verify both that changes propagate and that untouched inputs do not.

mod assertions;

use bevy::prelude::*;

use crate::centers::{CenterDirectory, CityLocation};
use crate::engine_rng::EngineRng;
use crate::preferences::UserPreferences;
use crate::snapshot::RiskSnapshot;
use crate::weather::{Forecast, WeatherSample};
use crate::{EngineSet, HeatRiskEnginePlugin};

/// Number of times the snapshot has been observed freshly derived.
#[derive(Resource, Default)]
pub struct SnapshotRecomputeCount(pub u32);

fn count_snapshot_changes(
    snapshot: Res<RiskSnapshot>,
    mut count: ResMut<SnapshotRecomputeCount>,
) {
    if snapshot.is_changed() {
        count.0 += 1;
    }
}

/// A headless app with the engine installed.
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(HeatRiskEnginePlugin)
            .init_resource::<SnapshotRecomputeCount>()
            .add_systems(Update, count_snapshot_changes.in_set(EngineSet::Report));
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Builders
    // -----------------------------------------------------------------------

    pub fn with_weather(mut self, temperature_c: f32, relative_humidity_pct: f32) -> Self {
        self.set_weather(temperature_c, relative_humidity_pct);
        self
    }

    pub fn with_daily_forecast(mut self, daily_max_c: Vec<f32>) -> Self {
        self.set_daily_forecast(daily_max_c);
        self
    }

    pub fn with_hourly_forecast(
        mut self,
        temps: Vec<f32>,
        humidity: Vec<f32>,
        hour_index: usize,
    ) -> Self {
        let mut forecast = self.app.world_mut().resource_mut::<Forecast>();
        forecast.hourly_temperature_c = temps;
        forecast.hourly_humidity_pct = humidity;
        forecast.hour_index = hour_index;
        self
    }

    pub fn with_vulnerable(mut self, vulnerable: bool) -> Self {
        self.app
            .world_mut()
            .resource_mut::<UserPreferences>()
            .vulnerable = vulnerable;
        self
    }

    pub fn with_policy_centers(mut self, count: u32) -> Self {
        self.set_policy_centers(count);
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64, label: &str) -> Self {
        self.set_location(latitude, longitude, label);
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.app
            .world_mut()
            .insert_resource(EngineRng::from_seed_u64(seed));
        self
    }

    // -----------------------------------------------------------------------
    // Mid-test mutators
    // -----------------------------------------------------------------------

    pub fn set_weather(&mut self, temperature_c: f32, relative_humidity_pct: f32) {
        let mut weather = self.app.world_mut().resource_mut::<WeatherSample>();
        weather.temperature_c = temperature_c;
        weather.relative_humidity_pct = relative_humidity_pct;
    }

    pub fn set_daily_forecast(&mut self, daily_max_c: Vec<f32>) {
        self.app
            .world_mut()
            .resource_mut::<Forecast>()
            .daily_max_c = daily_max_c;
    }

    pub fn set_policy_centers(&mut self, count: u32) {
        self.app
            .world_mut()
            .resource_mut::<UserPreferences>()
            .policy_center_count = count;
    }

    pub fn set_location(&mut self, latitude: f64, longitude: f64, label: &str) {
        let mut location = self.app.world_mut().resource_mut::<CityLocation>();
        location.latitude = latitude;
        location.longitude = longitude;
        location.label = label.to_string();
    }

    // -----------------------------------------------------------------------
    // Driving and accessors
    // -----------------------------------------------------------------------

    /// Run one schedule pass.
    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn snapshot(&self) -> &RiskSnapshot {
        self.app.world().resource::<RiskSnapshot>()
    }

    pub fn centers(&self) -> &CenterDirectory {
        self.app.world().resource::<CenterDirectory>()
    }

    pub fn recompute_count(&self) -> u32 {
        self.app.world().resource::<SnapshotRecomputeCount>().0
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
