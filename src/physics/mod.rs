//! Flight-feel model: g-force integration, hazard classification and the
//! pilot consciousness regulator. Plain data and functions; scheduling lives
//! in the systems and plugins built on top.

pub mod consciousness;
pub mod dynamics;
pub mod hazards;

pub use consciousness::ConsciousnessState;
pub use dynamics::FlightDynamicsState;
pub use hazards::{check_failures, HazardEvent, HazardKind, HazardLog};
