use gloc::{resources::SnapshotFeed, HazardEvent};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_snapshot_matches, cruise_controls, push_over_controls, TestAppBuilder,
};

#[test]
fn test_one_snapshot_per_tick() {
    let mut app = TestAppBuilder::new()
        .with_controls(cruise_controls(30.0, true))
        .build();
    let feed = app.subscribe();
    app.start_flight();
    app.run_ticks(9);

    let snapshots: Vec<_> = feed.try_iter().collect();
    assert_eq!(
        snapshots.iter().map(|s| s.tick).collect::<Vec<_>>(),
        (1..=10).collect::<Vec<_>>()
    );

    let session = app.session().unwrap();
    assert!(snapshots.iter().all(|s| s.flight_id == session.id()));
    assert_snapshot_matches(snapshots.last().unwrap(), session);
}

#[test]
fn test_snapshot_hazards_match_log_and_events() {
    let mut app = TestAppBuilder::new()
        .with_controls(push_over_controls(true))
        .build();
    let feed = app.subscribe();
    app.start_flight();
    app.run_ticks(5);

    let from_snapshots: Vec<HazardEvent> = feed
        .try_iter()
        .flat_map(|snapshot| snapshot.new_hazards)
        .collect();
    let session = app.session().unwrap();

    assert_eq!(from_snapshots.as_slice(), session.hazard_log().events());
    assert_eq!(app.recorded().hazards, from_snapshots);
}

#[test]
fn test_feed_goes_quiet_after_flight_ends() {
    let mut app = TestAppBuilder::new().build();
    let feed = app.subscribe();
    app.start_flight();
    app.run_ticks(2);
    app.end_flight();
    assert_eq!(feed.try_iter().count(), 3);

    app.run_frames(5);
    assert!(feed.try_recv().is_err());
}

#[test]
fn test_dropped_subscriber_is_forgotten() {
    let mut app = TestAppBuilder::new().build();
    drop(app.subscribe());
    let kept = app.subscribe();
    app.start_flight();

    assert_eq!(app.get_state::<SnapshotFeed>().unwrap().subscriber_count(), 1);
    assert_eq!(kept.try_iter().count(), 1);
}
