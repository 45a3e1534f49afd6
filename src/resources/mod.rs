pub mod config;
mod controls;
mod overlay;
mod session;
mod snapshot;

pub use config::{
    ConsciousnessConfig, ControlMapping, DynamicsConfig, FlightModelConfig, HazardLimits,
    PresentationConfig, TickConfig,
};
pub use controls::{ControlInputs, SimulationTick, TickOutcome};
pub use overlay::{ScreenTint, TintColor, WarningCue};
pub use session::{
    FlightId, FlightSession, FlightSummary, LastFlight, PhysicsTickResult, TickReport,
};
pub use snapshot::{FlightSnapshot, SnapshotFeed};
