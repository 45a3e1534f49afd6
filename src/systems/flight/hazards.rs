use bevy::prelude::*;

use crate::{
    physics::HazardEvent,
    resources::{FlightSession, SimulationTick, TickOutcome},
};

/// Classifies the freshly integrated g-force and announces each hazard.
pub fn hazard_detection_system(
    session: Res<FlightSession>,
    tick: Res<SimulationTick>,
    mut outcome: ResMut<TickOutcome>,
    mut hazard_events: EventWriter<HazardEvent>,
) {
    let hazards = session.detect_hazards(outcome.g_force, tick.gear_down, tick.airspeed_kts);

    for hazard in &hazards {
        warn!(
            "Flight {} tick {}: {} ({:.2} g, {} kts)",
            session.id(),
            session.ticks() + 1,
            hazard.message,
            outcome.g_force,
            tick.airspeed_kts
        );
        hazard_events.send(hazard.clone());
    }

    outcome.hazards = hazards;
}
