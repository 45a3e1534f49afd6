use bevy::prelude::*;

use crate::resources::{ControlInputs, FlightSession, SimulationTick};

/// Samples the cockpit controls into this tick's simulation inputs.
///
/// The reported delta comes from the flight's tick config when set, otherwise from
/// the fixed-step clock.
pub fn control_sampling_system(
    controls: Res<ControlInputs>,
    session: Res<FlightSession>,
    time: Res<Time>,
    mut tick: ResMut<SimulationTick>,
) {
    let config = session.config();
    let measured_ms = time.delta().as_secs_f64() * 1000.0;
    let delta_time_ms = config.tick.reported_delta_ms.unwrap_or(measured_ms);

    *tick = controls.sample(&config.controls, delta_time_ms);
}
