//! Constants for the predictive risk projection.

/// Number of leading forecast days projected.
pub const FORECAST_HORIZON_DAYS: usize = 5;

/// Days with a forecast maximum at or above this build momentum.
pub const MOMENTUM_GAIN_THRESHOLD_C: f32 = 32.0;

/// Momentum added per hot day.
pub const MOMENTUM_GAIN: f32 = 0.5;

/// Momentum lost per cooler day, floored at zero.
pub const MOMENTUM_DECAY: f32 = 0.3;

/// Score multiplier for vulnerable users.
pub const VULNERABLE_MULTIPLIER: f32 = 1.2;
