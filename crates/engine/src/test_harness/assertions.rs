//! Assertion helpers for `TestApp` integration tests.

use crate::heat_index::RiskTier;
use crate::heat_wave::HeatwaveLevel;
use crate::system_impact::SystemStress;

use super::TestApp;

impl TestApp {
    /// Assert the current risk tier.
    pub fn assert_risk(&self, expected: RiskTier) {
        let actual = self.snapshot().risk;
        assert_eq!(actual, expected, "expected {:?}, got {:?}", expected, actual);
    }

    /// Assert heatwave level and run length.
    pub fn assert_heatwave(&self, level: Option<HeatwaveLevel>, days: u32) {
        let heatwave = self.snapshot().heatwave;
        assert_eq!(heatwave.level, level, "heatwave level mismatch");
        assert_eq!(heatwave.consecutive_days, days, "heatwave day count mismatch");
        assert_eq!(heatwave.active, level.is_some());
    }

    /// Assert the system stress tier.
    pub fn assert_stress(&self, expected: SystemStress) {
        let actual = self.snapshot().system.stress;
        assert_eq!(actual, expected, "expected {:?}, got {:?}", expected, actual);
    }

    /// Assert at least this many cooling centers are open.
    pub fn assert_active_centers_at_least(&self, min: u32) {
        let actual = self.snapshot().city.active_centers;
        assert!(actual >= min, "expected >= {} centers, got {}", min, actual);
    }

    /// Assert the snapshot has been derived exactly this many times.
    pub fn assert_recompute_count(&self, expected: u32) {
        let actual = self.recompute_count();
        assert_eq!(
            actual, expected,
            "expected {} recomputes, got {}",
            expected, actual
        );
    }
}
