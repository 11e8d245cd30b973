//! Heat risk & impact engine.
//!
//! Derives a complete, display-ready [`snapshot::RiskSnapshot`] from the
//! current weather, the daily forecast, and a small set of user preferences:
//! heat index, risk tier, safety advice, heatwave detection, a 5-day
//! predictive risk series with momentum, city-wide risk figures, and
//! downstream system-stress metrics (hospital load, emergency calls, cooling
//! demand).
//!
//! The pipeline itself is a synchronous, side-effect-free computation over
//! in-memory values ([`snapshot::RiskSnapshot::compute`]). The Bevy layer
//! around it provides the reactive wrapper: input resources are written by
//! the caller, and whenever any of them change the whole snapshot is rebuilt
//! and replaced wholesale. Consumers observe the one record instead of many
//! independently-updated cells, so a half-updated intermediate state is never
//! visible.

use bevy::prelude::*;

pub mod advice;
pub mod centers;
pub mod city_impact;
pub mod engine_rng;
pub mod heat_index;
pub mod heat_trend;
pub mod heat_wave;
pub mod predictive_risk;
pub mod preferences;
pub mod snapshot;
pub mod system_impact;
pub mod weather;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

// ---------------------------------------------------------------------------
// Schedule phases
// ---------------------------------------------------------------------------

/// Ordered phases for engine systems in the `Update` schedule.
///
/// Configured as a chain: `Ingest` → `Derive` → `Report`. The engine places
/// its own systems in `Derive` and `Report`; callers that feed the engine
/// from systems (rather than writing resources directly between updates)
/// should register those systems in `Ingest` so their writes land before the
/// recompute runs.
///
/// `Report` only ever *reads* derived state, so anything scheduled after it
/// sees a fully consistent snapshot.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EngineSet {
    /// Input resource writes: weather samples, forecast swaps, preference
    /// toggles, location updates.
    Ingest,
    /// Derived-state recomputation: the risk snapshot and the center
    /// directory.
    Derive,
    /// Read-only reporting on freshly derived state (logging).
    Report,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Registers the engine's input resources, derived-state resources, and the
/// recompute systems.
pub struct HeatRiskEnginePlugin;

impl Plugin for HeatRiskEnginePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<weather::WeatherSample>()
            .init_resource::<weather::Forecast>()
            .init_resource::<preferences::UserPreferences>()
            .init_resource::<centers::CityLocation>()
            .init_resource::<engine_rng::EngineRng>()
            .init_resource::<snapshot::RiskSnapshot>()
            .init_resource::<centers::CenterDirectory>();

        app.configure_sets(
            Update,
            (EngineSet::Ingest, EngineSet::Derive, EngineSet::Report).chain(),
        );

        app.add_systems(
            Update,
            (
                snapshot::refresh_snapshot.in_set(EngineSet::Derive),
                centers::refresh_centers.in_set(EngineSet::Derive),
                snapshot::report_snapshot.in_set(EngineSet::Report),
            ),
        );
    }
}
