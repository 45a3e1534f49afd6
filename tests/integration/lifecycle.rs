use gloc::{resources::ScreenTint, HazardKind};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_session_valid, assert_summary_valid, cruise_controls, push_over_controls,
    TestAppBuilder,
};

#[test]
fn test_no_ticks_without_flight() {
    let mut app = TestAppBuilder::new()
        .with_controls(push_over_controls(true))
        .build();
    app.run_frames(10);

    assert!(app.session().is_none());
    assert!(app.last_flight().is_none());
    assert!(app.recorded().hazards.is_empty());
    assert_eq!(app.tint(), ScreenTint::default());
}

#[test]
fn test_start_creates_fresh_session() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();

    let session = app.session().expect("flight should be active");
    assert_session_valid(session);
    assert_eq!(session.ticks(), 1);
    assert_eq!(session.g_force(), 1.0);
    assert_eq!(session.consciousness_level(), 100.0);
    assert!(session.hazard_log().is_empty());
}

#[test]
fn test_end_publishes_summary_and_stops_ticking() {
    let mut app = TestAppBuilder::new()
        .with_controls(push_over_controls(true))
        .build();
    app.start_flight();
    app.run_ticks(9);
    let flight_id = app.session().unwrap().id();

    app.end_flight();
    assert!(app.session().is_none());

    let summary = app.last_flight().expect("summary should be published").clone();
    assert_summary_valid(&summary);
    assert_eq!(summary.flight_id, flight_id);
    assert_eq!(summary.ticks, 10);
    assert_eq!(summary.gear_overspeed_events, 10);
    assert_eq!(summary.structural_overstress_events, 1);
    assert_eq!(app.recorded().ended, vec![summary.clone()]);

    let hazards_seen = app.recorded().hazards.len();
    app.run_frames(5);
    assert_eq!(app.recorded().hazards.len(), hazards_seen);
    assert_eq!(app.last_flight(), Some(&summary));
}

#[test]
fn test_restart_does_not_carry_state() {
    let mut app = TestAppBuilder::new()
        .with_controls(push_over_controls(true))
        .build();
    app.start_flight();
    app.run_ticks(4);
    let first_id = app.session().unwrap().id();
    app.end_flight();

    // Neutral yoke on a fresh flight reads as level flight, not a pull-up from -30
    app.set_controls(cruise_controls(0.0, true));
    app.start_flight();

    let session = app.session().unwrap();
    assert_ne!(session.id(), first_id);
    assert_eq!(session.ticks(), 1);
    assert_eq!(session.g_force(), 1.0);
    assert_eq!(session.dynamics().last_pitch_deg, 0.0);
    assert_eq!(session.consciousness_level(), 100.0);
    assert!(session.hazard_log().is_empty());
}

#[test]
fn test_start_while_flying_closes_previous_flight() {
    let mut app = TestAppBuilder::new()
        .with_controls(cruise_controls(60.0, true))
        .build();
    app.start_flight();
    app.run_ticks(4);
    let first_id = app.session().unwrap().id();

    app.start_flight();

    let summary = app.last_flight().expect("previous flight should be closed");
    assert_eq!(summary.flight_id, first_id);
    assert_eq!(summary.ticks, 5);
    assert_eq!(summary.gear_overspeed_events, 5);
    assert_eq!(app.recorded().ended.len(), 1);

    let session = app.session().unwrap();
    assert_ne!(session.id(), first_id);
    assert_eq!(session.hazard_log().count(HazardKind::GearOverspeed), 1);
}

#[test]
fn test_end_without_flight_is_harmless() {
    let mut app = TestAppBuilder::new().build();
    app.end_flight();
    app.run_frames(3);

    assert!(app.session().is_none());
    assert!(app.last_flight().is_none());
    assert!(app.recorded().ended.is_empty());
}
