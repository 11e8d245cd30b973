//! Placeholder cooling/hydration/park markers around the city location.
//!
//! The marker directory stands in for a real points-of-interest feed: it
//! scatters a fixed number of plausible locations near the observed
//! coordinates for the map layer to render. Generation is independent of the
//! risk pipeline and only reruns when the location changes. Layouts are
//! deterministic for a given [`EngineRng`](crate::engine_rng::EngineRng)
//! state.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine_rng::EngineRng;

/// Markers generated per location.
pub const CENTER_COUNT: usize = 12;
/// Scatter radius around the location, degrees (markers land within
/// +/- half of this on each axis).
const COORD_JITTER_DEG: f64 = 0.08;
/// Every n-th marker reports as at capacity.
const FULL_EVERY: usize = 4;

/// The observed city location, written by the caller alongside the weather.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable place name from the caller's geocoder.
    pub label: String,
}

impl Default for CityLocation {
    fn default() -> Self {
        Self {
            latitude: 32.08,
            longitude: 34.78,
            label: "Tel Aviv".to_string(),
        }
    }
}

/// Kind of relief a marker offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CenterKind {
    Cooling,
    Hydration,
    Park,
}

impl CenterKind {
    fn from_index(i: usize) -> Self {
        match i % 3 {
            0 => CenterKind::Cooling,
            1 => CenterKind::Hydration,
            _ => CenterKind::Park,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            CenterKind::Cooling => "cooling",
            CenterKind::Hydration => "hydration",
            CenterKind::Park => "park",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CenterKind::Cooling => "Open 9AM - 9PM",
            CenterKind::Hydration => "Free chilled water",
            CenterKind::Park => "Shaded green area",
        }
    }

    fn name_pool(self) -> &'static [&'static str] {
        match self {
            CenterKind::Cooling => &[
                "Community Center",
                "Cooling Oasis",
                "City Library",
                "Public Shelter",
                "Social Club",
            ],
            CenterKind::Hydration => &[
                "Public Fountain",
                "Water Station",
                "Hydration Hub",
                "Refill Point",
                "Cool Sprinkler",
            ],
            CenterKind::Park => &[
                "City Park",
                "Green Garden",
                "Botanical Zone",
                "Shaded Square",
                "Metro Plaza",
            ],
        }
    }
}

/// Operational status shown on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CenterStatus {
    Active,
    Full,
}

/// One point of interest for the map layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CenterMarker {
    pub id: String,
    pub title: String,
    pub description: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub kind: CenterKind,
    pub status: CenterStatus,
}

/// The generated marker set for the current location.
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize)]
pub struct CenterDirectory {
    pub markers: Vec<CenterMarker>,
}

/// Generate [`CENTER_COUNT`] markers scattered around the given coordinates,
/// cycling through the three kinds.
pub fn generate_centers(
    rng: &mut impl Rng,
    latitude: f64,
    longitude: f64,
) -> Vec<CenterMarker> {
    (0..CENTER_COUNT)
        .map(|i| {
            let kind = CenterKind::from_index(i);
            let pool = kind.name_pool();
            let name = pool[rng.gen_range(0..pool.len())];
            let status = if i % FULL_EVERY == 0 {
                CenterStatus::Full
            } else {
                CenterStatus::Active
            };
            CenterMarker {
                id: format!("center-{}-{}", i, kind.slug()),
                title: format!("{} {}", name, i + 1),
                description: kind.description(),
                latitude: latitude + (rng.gen::<f64>() - 0.5) * COORD_JITTER_DEG,
                longitude: longitude + (rng.gen::<f64>() - 0.5) * COORD_JITTER_DEG,
                kind,
                status,
            }
        })
        .collect()
}

/// Rebuild the marker directory when the location changes.
pub fn refresh_centers(
    location: Res<CityLocation>,
    mut rng: ResMut<EngineRng>,
    mut directory: ResMut<CenterDirectory>,
) {
    if !location.is_changed() {
        return;
    }
    directory.markers = generate_centers(&mut rng.0, location.latitude, location.longitude);
}
