//! Deterministic engine RNG resource.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. The only
//! consumer is the placeholder center-marker generator; systems take
//! `ResMut<EngineRng>` instead of `rand::thread_rng()` so that identical
//! seeds produce identical marker layouts.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// Deterministic RNG resource.
#[derive(Resource)]
pub struct EngineRng(pub ChaCha8Rng);

impl Default for EngineRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl EngineRng {
    /// Create an `EngineRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
