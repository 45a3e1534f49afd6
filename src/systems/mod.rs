pub mod flight;
mod session;

pub use flight::{
    consciousness_system, control_sampling_system, flight_dynamics_system,
    hazard_detection_system, presentation_system,
};
pub use session::{end_flight_system, start_flight_system};
