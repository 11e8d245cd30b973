//! End-to-end tests driving the engine through a headless Bevy app.

use crate::heat_index::RiskTier;
use crate::heat_wave::HeatwaveLevel;
use crate::system_impact::SystemStress;
use crate::test_harness::TestApp;

#[test]
fn test_first_update_derives_the_snapshot() {
    let mut city = TestApp::new();
    city.update();

    // Freshly inserted resources count as changed, so the first pass derives
    // once and the defaults read as safe.
    city.assert_recompute_count(1);
    city.assert_risk(RiskTier::Safe);
    city.assert_heatwave(None, 0);
    city.assert_stress(SystemStress::Stable);
}

#[test]
fn test_untouched_inputs_do_not_recompute() {
    let mut city = TestApp::new();
    city.update();
    city.update();
    city.update();
    city.assert_recompute_count(1);
}

#[test]
fn test_weather_change_triggers_full_recompute() {
    let mut city = TestApp::new();
    city.update();

    city.set_weather(38.0, 55.0);
    city.update();

    city.assert_recompute_count(2);
    city.assert_risk(RiskTier::Extreme);
}

#[test]
fn test_heatwave_scenario_end_to_end() {
    let mut city = TestApp::new()
        .with_weather(38.0, 55.0)
        .with_daily_forecast(vec![36.0, 36.0, 36.0, 36.0, 30.0]);
    city.update();

    city.assert_risk(RiskTier::Extreme);
    city.assert_heatwave(Some(HeatwaveLevel::Severe), 4);
    city.assert_active_centers_at_least(5);
    city.assert_stress(SystemStress::High);

    let snapshot = city.snapshot();
    assert_eq!(snapshot.city.risk_percent, 85);
    assert_eq!(snapshot.system.hospital_load_pct, 75);
}

#[test]
fn test_policy_slider_mitigates_hospital_load() {
    let mut city = TestApp::new()
        .with_weather(38.0, 55.0)
        .with_daily_forecast(vec![36.0, 36.0, 36.0, 36.0, 30.0]);
    city.update();
    let unmitigated = city.snapshot().system.hospital_load_pct;
    let baseline_centers = city.snapshot().city.active_centers;

    city.set_policy_centers(10);
    city.update();

    city.assert_recompute_count(2);
    let snapshot = city.snapshot();
    assert!(
        snapshot.system.hospital_load_pct < unmitigated,
        "10 extra centers should shave hospital load: {} vs {}",
        snapshot.system.hospital_load_pct,
        unmitigated
    );
    assert_eq!(snapshot.city.active_centers, baseline_centers + 10);
}

#[test]
fn test_mitigation_saturates_through_the_app() {
    let mut at_cap = TestApp::new()
        .with_weather(38.0, 55.0)
        .with_daily_forecast(vec![36.0; 5])
        .with_policy_centers(20);
    at_cap.update();

    let mut past_cap = TestApp::new()
        .with_weather(38.0, 55.0)
        .with_daily_forecast(vec![36.0; 5])
        .with_policy_centers(100);
    past_cap.update();

    assert_eq!(
        at_cap.snapshot().system.hospital_load_pct,
        past_cap.snapshot().system.hospital_load_pct,
        "mitigation stops growing past 20 centers"
    );
}

#[test]
fn test_vulnerability_toggle_replaces_the_whole_record() {
    let mut city = TestApp::new()
        .with_weather(33.0, 60.0)
        .with_daily_forecast(vec![36.0, 36.0, 30.0]);
    city.update();
    let before = city.snapshot().clone();

    {
        let mut prefs = city
            .app
            .world_mut()
            .resource_mut::<crate::preferences::UserPreferences>();
        prefs.vulnerable = true;
    }
    city.update();

    city.assert_recompute_count(2);
    let after = city.snapshot();
    assert_eq!(before.heat_index, after.heat_index);
    assert!(
        after.outlook.series[0].score > before.outlook.series[0].score,
        "vulnerable weighting should raise predicted scores"
    );
}

#[test]
fn test_centers_generate_on_startup_and_follow_the_location() {
    let mut city = TestApp::new().with_rng_seed(7);
    city.update();

    let initial = city.centers().clone();
    assert_eq!(initial.markers.len(), 12);

    // No location change, no regeneration.
    city.update();
    assert_eq!(*city.centers(), initial);

    city.set_location(48.85, 2.35, "Paris");
    city.update();
    let moved = city.centers();
    assert_eq!(moved.markers.len(), 12);
    for marker in &moved.markers {
        assert!((marker.latitude - 48.85).abs() <= 0.04);
        assert!((marker.longitude - 2.35).abs() <= 0.04);
    }
}

#[test]
fn test_hourly_outlook_flows_into_the_snapshot() {
    let mut city = TestApp::new()
        .with_weather(30.0, 50.0)
        .with_hourly_forecast(
            vec![30.0, 34.0, 35.0, 36.0, 36.0],
            vec![50.0, 55.0, 55.0, 55.0, 55.0],
            0,
        );
    city.update();

    let snapshot = city.snapshot();
    assert_eq!(snapshot.hourly_heat_index.len(), 3);
    assert_eq!(snapshot.trend, Some(crate::heat_trend::HeatTrend::Rising));
}
