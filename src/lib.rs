//! Flight-feel simulation core: turns yoke and throttle input into a smoothed
//! g-force, flags structural and gear hazards, and tracks how close the pilot
//! is to a g-induced loss of consciousness.

pub mod physics;
pub mod plugins;
pub mod replay;
pub mod resources;
pub mod systems;
pub mod utils;

pub use physics::{ConsciousnessState, FlightDynamicsState, HazardEvent, HazardKind, HazardLog};
pub use plugins::{EndFlight, FlightEnded, FlightPlugin, FlightSet, StartFlight};
pub use resources::{FlightModelConfig, FlightSession, FlightSummary};
pub use utils::{FlightError, Result};
