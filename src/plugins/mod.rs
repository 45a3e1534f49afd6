mod events;
mod flight;

pub use events::{EndFlight, FlightEnded, StartFlight};
pub use flight::{FlightPlugin, FlightSet};
