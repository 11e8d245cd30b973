//! Constants for the system-impact calculations.

/// Hospital load contributed per city risk point.
pub const HOSPITAL_LOAD_PER_RISK_POINT: f32 = 0.6;

/// Hospital load ceiling, percent.
pub const HOSPITAL_LOAD_CAP: f32 = 100.0;

/// Extra load per unit of risk momentum.
pub const MOMENTUM_LOAD_FACTOR: f32 = 0.1;

/// Hospital-load reduction per policy-simulated cooling center.
pub const MITIGATION_PER_CENTER: f32 = 0.02;

/// Mitigation saturates here: extra centers past this point stop helping.
pub const MITIGATION_CAP: f32 = 0.4;

/// Emergency calls scale at this rate from hospital load.
pub const EMERGENCY_CALL_FACTOR: f32 = 1.5;

/// Emergency-call increase ceiling, percent.
pub const EMERGENCY_CALL_CAP: u32 = 200;

/// Cooling demand ceiling, percent.
pub const COOLING_DEMAND_CAP: f32 = 100.0;

/// Grid demand added per policy-simulated center kept running.
pub const COOLING_PER_POLICY_CENTER: f32 = 0.5;

/// Hospital load below this reads as Stable.
pub const STRESS_ELEVATED_THRESHOLD: f32 = 50.0;
/// Hospital load at or above this reads as High.
pub const STRESS_HIGH_THRESHOLD: f32 = 70.0;
/// Hospital load at or above this reads as Critical.
pub const STRESS_CRITICAL_THRESHOLD: f32 = 85.0;
