use approx::assert_relative_eq;
use gloc::{
    resources::{ControlInputs, FlightModelConfig, FlightSession, TintColor},
    HazardKind,
};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_session_valid, cruise_controls, push_over_controls, TestAppBuilder,
};

fn hazard_kinds(session: &FlightSession) -> Vec<HazardKind> {
    session.hazard_log().events().iter().map(|h| h.kind).collect()
}

#[test]
fn test_push_over_first_tick() {
    let mut app = TestAppBuilder::new()
        .with_controls(push_over_controls(false))
        .build();
    app.start_flight();

    let session = app.session().expect("flight should be active");
    assert_eq!(session.ticks(), 1);
    assert_relative_eq!(session.g_force(), -3.21875, epsilon = 1e-12);
    assert_relative_eq!(session.consciousness_level(), 98.78125, epsilon = 1e-12);
    assert_eq!(hazard_kinds(session), vec![HazardKind::StructuralOverstress]);

    let tint = app.tint();
    assert_relative_eq!(tint.opacity, 0.0121875, epsilon = 1e-12);
    assert_eq!(tint.color, TintColor::Red);
    assert!(!tint.visible);
    assert!(app.warning().active);
}

#[test]
fn test_gear_overspeed_reported_before_overstress() {
    let mut app = TestAppBuilder::new()
        .with_controls(push_over_controls(true))
        .build();
    app.start_flight();

    assert_eq!(
        hazard_kinds(app.session().unwrap()),
        vec![HazardKind::GearOverspeed, HazardKind::StructuralOverstress]
    );
}

#[test]
fn test_g_settles_when_pitch_is_held() {
    let mut app = TestAppBuilder::new()
        .with_controls(push_over_controls(false))
        .build();
    app.start_flight();
    app.run_ticks(1);

    let session = app.session().unwrap();
    assert_relative_eq!(session.g_force(), -2.796875, epsilon = 1e-12);
    assert_relative_eq!(session.consciousness_level(), 97.984375, epsilon = 1e-12);
    // Back inside the structural limits
    assert_eq!(session.hazard_log().len(), 1);

    app.run_ticks(100);
    let session = app.session().unwrap();
    assert_session_valid(session);
    assert_relative_eq!(session.g_force(), 1.0, epsilon = 1e-3);
    assert!(!app.warning().active);
}

#[test]
fn test_gear_overspeed_logged_every_tick() {
    // 60% throttle is 270 kts
    let mut app = TestAppBuilder::new()
        .with_controls(cruise_controls(60.0, true))
        .build();
    app.start_flight();
    app.run_ticks(24);

    let session = app.session().unwrap();
    assert_eq!(session.hazard_log().len(), 25);
    assert_eq!(session.hazard_log().count(HazardKind::GearOverspeed), 25);
    assert_eq!(app.recorded().hazards.len(), 25);
    assert_eq!(session.g_force(), 1.0);
    assert_eq!(session.consciousness_level(), 100.0);

    // Raising the gear clears the condition
    app.set_controls(cruise_controls(60.0, false));
    app.run_ticks(5);
    assert_eq!(app.session().unwrap().hazard_log().len(), 25);
}

#[test]
fn test_measured_delta_when_not_reported() {
    let mut app = TestAppBuilder::new()
        .with_reported_delta(None)
        .with_controls(push_over_controls(false))
        .build();
    app.start_flight();

    // 50 ms step: 1 + (-30 / 50) * 4.5 * 5 = -12.5
    let session = app.session().unwrap();
    assert_relative_eq!(session.g_force(), -0.35, epsilon = 1e-9);
    assert!(session.hazard_log().is_empty());
}

#[test]
fn test_app_matches_direct_session() {
    let config = FlightModelConfig::default();
    let controls: Vec<ControlInputs> = (0..30)
        .map(|tick| ControlInputs {
            yoke_x: 0.0,
            yoke_y: ((tick as f64) * 0.7).sin(),
            throttle: 40.0 + tick as f64 * 2.0,
            gear_down: tick < 10,
        })
        .collect();

    let mut app = TestAppBuilder::new()
        .with_config(config.clone())
        .with_controls(controls[0])
        .build();
    let feed = app.subscribe();
    app.start_flight();
    for inputs in &controls[1..] {
        app.set_controls(*inputs);
        app.run_ticks(1);
    }

    let mut direct = FlightSession::new(config.clone());
    let snapshots: Vec<_> = feed.try_iter().collect();
    assert_eq!(snapshots.len(), controls.len());

    for (inputs, snapshot) in controls.iter().zip(&snapshots) {
        let report = direct.tick(&inputs.sample(&config.controls, 16.0));
        assert_eq!(snapshot.tick, report.tick);
        assert_relative_eq!(snapshot.g_force, report.g_force, epsilon = 1e-12);
        assert_relative_eq!(snapshot.consciousness, report.consciousness_level, epsilon = 1e-12);
        assert_eq!(snapshot.new_hazards, report.hazards);
    }
    assert_eq!(
        app.session().unwrap().hazard_log(),
        direct.hazard_log()
    );
}

#[test]
fn test_blackout_and_recovery() {
    let pump = |tick: u64| ControlInputs {
        yoke_y: if tick % 2 == 0 { 1.0 } else { -1.0 },
        ..push_over_controls(false)
    };

    let mut app = TestAppBuilder::new().with_controls(pump(0)).build();
    app.start_flight();
    for tick in 1..240 {
        app.set_controls(pump(tick));
        app.run_ticks(1);
    }

    let session = app.session().unwrap();
    assert_session_valid(session);
    assert!(session.is_blacked_out());
    assert!(session.g_force() > 4.0);

    let tint = app.tint();
    assert!(tint.visible);
    assert!(tint.gloc);
    assert_eq!(tint.color, TintColor::Black);
    assert!(app.warning().active);
    let blacked_out_opacity = tint.opacity;

    app.set_controls(cruise_controls(50.0, false));
    app.run_ticks(150);

    let session = app.session().unwrap();
    assert_session_valid(session);
    assert!(!session.is_blacked_out());
    assert!(app.tint().opacity < blacked_out_opacity);
    assert!(!app.tint().gloc);
}
