use bevy::prelude::*;

use crate::{
    plugins::{EndFlight, FlightEnded, StartFlight},
    resources::{
        FlightModelConfig, FlightSession, LastFlight, ScreenTint, TickOutcome, WarningCue,
    },
};

/// Closes the active flight, publishing its summary and dropping its state.
pub fn end_flight_system(
    mut commands: Commands,
    mut requests: EventReader<EndFlight>,
    session: Option<Res<FlightSession>>,
    mut last_flight: ResMut<LastFlight>,
    mut ended: EventWriter<FlightEnded>,
) {
    if requests.read().count() == 0 {
        return;
    }

    match session {
        Some(session) => {
            finish_flight(&session, &mut last_flight, &mut ended);
            commands.remove_resource::<FlightSession>();
        }
        None => warn!("End of flight requested with no flight in progress"),
    }
}

/// Creates a fresh flight session from the current model config.
///
/// A flight still in progress is closed first, so state never carries over.
pub fn start_flight_system(
    mut commands: Commands,
    mut requests: EventReader<StartFlight>,
    config: Res<FlightModelConfig>,
    session: Option<Res<FlightSession>>,
    mut last_flight: ResMut<LastFlight>,
    mut ended: EventWriter<FlightEnded>,
    mut outcome: ResMut<TickOutcome>,
    mut tint: ResMut<ScreenTint>,
    mut warning: ResMut<WarningCue>,
) {
    if requests.read().count() == 0 {
        return;
    }

    if let Some(previous) = session {
        warn!("Flight {} still in progress, closing it", previous.id());
        finish_flight(&previous, &mut last_flight, &mut ended);
    }

    let session = FlightSession::new(config.clone());
    info!("Flight {} started", session.id());

    *outcome = TickOutcome {
        g_force: session.g_force(),
        hazards: Vec::new(),
    };
    *tint = ScreenTint::default();
    *warning = WarningCue::default();
    commands.insert_resource(session);
}

fn finish_flight(
    session: &FlightSession,
    last_flight: &mut LastFlight,
    ended: &mut EventWriter<FlightEnded>,
) {
    let summary = session.summary();
    info!(
        "Flight {} ended after {} ticks: peak {:.2} g, lowest {:.2} g, {} hazards",
        summary.flight_id,
        summary.ticks,
        summary.peak_g,
        summary.lowest_g,
        session.hazard_log().len()
    );
    last_flight.0 = Some(summary.clone());
    ended.send(FlightEnded { summary });
}
