use bevy::prelude::*;

use crate::resources::FlightSummary;

/// Begins a new flight with fresh dynamics, consciousness and hazard log.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StartFlight;

/// Ends the flight in progress. Ticks stop once it is handled.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct EndFlight;

#[derive(Event, Debug, Clone)]
pub struct FlightEnded {
    pub summary: FlightSummary,
}
