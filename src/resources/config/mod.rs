pub mod flight_model;

pub use flight_model::{
    ConsciousnessConfig, ControlMapping, DynamicsConfig, FlightModelConfig, HazardLimits,
    PresentationConfig, TickConfig,
};
