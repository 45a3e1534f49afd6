mod consciousness;
mod controls;
mod dynamics;
mod hazards;
mod presentation;

pub use consciousness::consciousness_system;
pub use controls::control_sampling_system;
pub use dynamics::flight_dynamics_system;
pub use hazards::hazard_detection_system;
pub use presentation::presentation_system;
