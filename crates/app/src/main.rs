//! Headless runner for the heat risk engine.
//!
//! Builds a minimal Bevy app with the engine installed, feeds it a scenario,
//! runs one derivation pass, and prints the resulting snapshot as JSON on
//! stdout.
//!
//! Scenario input comes from the `HEATWATCH_SCENARIO` environment variable as
//! inline JSON (any subset of the fields; the rest keep their defaults):
//!
//! ```text
//! HEATWATCH_SCENARIO='{"weather":{"temperature_c":38.0,"relative_humidity_pct":55.0},
//!                      "forecast":{"daily_max_c":[36.0,36.0,36.0,36.0,30.0]}}' heatwatch
//! ```
//!
//! Setting `HEATWATCH_POLICY_SWEEP` switches to a policy-simulator sweep:
//! the app re-derives the snapshot for increasing cooling-center counts and
//! prints one line per step, demonstrating the reactive recompute path.

use bevy::prelude::*;
use serde::Deserialize;

use engine::centers::CityLocation;
use engine::engine_rng::EngineRng;
use engine::preferences::UserPreferences;
use engine::snapshot::RiskSnapshot;
use engine::weather::{Forecast, WeatherSample};
use engine::HeatRiskEnginePlugin;

/// A full engine input set. Every field defaults, so a scenario may specify
/// only what it cares about.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Scenario {
    weather: WeatherSample,
    forecast: Forecast,
    preferences: UserPreferences,
    location: CityLocation,
    /// Optional RNG seed for a reproducible center-marker layout.
    seed: Option<u64>,
}

fn load_scenario() -> Scenario {
    let Ok(raw) = std::env::var("HEATWATCH_SCENARIO") else {
        return Scenario::default();
    };
    match serde_json::from_str(&raw) {
        Ok(scenario) => scenario,
        Err(e) => {
            warn!("HEATWATCH_SCENARIO is not valid scenario JSON ({e}), using defaults");
            Scenario::default()
        }
    }
}

fn main() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(bevy::log::LogPlugin::default());
    app.add_plugins(HeatRiskEnginePlugin);

    let scenario = load_scenario();
    info!(
        "deriving risk snapshot for {} ({}C, {}% humidity)",
        scenario.location.label,
        scenario.weather.temperature_c,
        scenario.weather.relative_humidity_pct
    );

    if let Some(seed) = scenario.seed {
        app.insert_resource(EngineRng::from_seed_u64(seed));
    }
    app.insert_resource(scenario.weather);
    app.insert_resource(scenario.forecast);
    app.insert_resource(scenario.preferences);
    app.insert_resource(scenario.location);

    app.update();

    if std::env::var("HEATWATCH_POLICY_SWEEP").is_ok() {
        run_policy_sweep(&mut app);
        return;
    }

    let snapshot = app.world().resource::<RiskSnapshot>();
    match serde_json::to_string_pretty(snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("failed to serialize snapshot: {e}"),
    }
}

/// Re-derive the snapshot for increasing policy-center counts and print the
/// mitigation curve.
fn run_policy_sweep(app: &mut App) {
    println!("centers  hospital  emergency  cooling  stress");
    for centers in (0..=30).step_by(5) {
        app.world_mut()
            .resource_mut::<UserPreferences>()
            .policy_center_count = centers;
        app.update();

        let snapshot = app.world().resource::<RiskSnapshot>();
        println!(
            "{:>7}  {:>7}%  {:>8}%  {:>6}%  {}",
            centers,
            snapshot.system.hospital_load_pct,
            snapshot.system.emergency_call_increase_pct,
            snapshot.system.cooling_demand_pct,
            snapshot.system.stress.label(),
        );
    }
}
