use bevy::prelude::*;

use crate::resources::{FlightSession, SimulationTick, TickOutcome};

/// Advances the g-force integrator with this tick's sample.
pub fn flight_dynamics_system(
    mut session: ResMut<FlightSession>,
    tick: Res<SimulationTick>,
    mut outcome: ResMut<TickOutcome>,
) {
    outcome.g_force =
        session.advance_simulation(tick.target_pitch_deg, tick.airspeed_kts, tick.delta_time_ms);
    outcome.hazards.clear();
}
