use bevy::prelude::*;

use crate::resources::{FlightSession, TickOutcome};

/// Drains or recovers consciousness and records the tick's hazards.
pub fn consciousness_system(mut session: ResMut<FlightSession>, outcome: Res<TickOutcome>) {
    let was_blacked_out = session.is_blacked_out();
    let level = session
        .apply_physics_tick(outcome.g_force, &outcome.hazards)
        .consciousness_level;

    match (was_blacked_out, session.is_blacked_out()) {
        (false, true) => warn!(
            "Flight {}: pilot blacking out at {:.2} g (consciousness {:.1})",
            session.id(),
            outcome.g_force,
            level
        ),
        (true, false) => info!(
            "Flight {}: pilot recovered (consciousness {:.1})",
            session.id(),
            level
        ),
        _ => {}
    }
}
