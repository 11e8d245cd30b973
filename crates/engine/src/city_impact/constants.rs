//! Constants for the city-wide risk figures.

/// Modeled city population.
pub const CITY_POPULATION: u32 = 500_000;

/// Fraction of the population considered heat-vulnerable (elderly, chronic
/// conditions, outdoor workers).
pub const VULNERABLE_POPULATION_RATIO: f32 = 0.18;

/// Baseline number of cooling centers kept open regardless of demand.
pub const MIN_ACTIVE_CENTERS: u32 = 5;
