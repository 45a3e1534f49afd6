use bevy::prelude::*;

use crate::resources::{
    FlightSession, FlightSnapshot, ScreenTint, SnapshotFeed, TickOutcome, WarningCue,
};

/// Maps the tick's result onto the screen tint and warning cue, then publishes a
/// snapshot to any external subscribers.
pub fn presentation_system(
    session: Res<FlightSession>,
    outcome: Res<TickOutcome>,
    mut tint: ResMut<ScreenTint>,
    mut warning: ResMut<WarningCue>,
    mut feed: ResMut<SnapshotFeed>,
) {
    let config = session.config();
    *tint = ScreenTint::from_flight(
        session.consciousness_level(),
        outcome.g_force,
        &config.consciousness,
        &config.presentation,
    );
    *warning = WarningCue::from_g(outcome.g_force, &config.presentation);

    if feed.subscriber_count() == 0 {
        return;
    }

    feed.publish(&FlightSnapshot {
        flight_id: session.id(),
        tick: session.ticks(),
        g_force: outcome.g_force,
        consciousness: session.consciousness_level(),
        new_hazards: outcome.hazards.clone(),
        hazard_total: session.hazard_log().len(),
        tint: *tint,
        warning: *warning,
    });
}
