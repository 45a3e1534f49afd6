use bevy::prelude::*;

use crate::{
    physics::HazardEvent,
    plugins::{EndFlight, FlightEnded, StartFlight},
    resources::{
        ControlInputs, FlightModelConfig, FlightSession, LastFlight, ScreenTint, SimulationTick,
        SnapshotFeed, TickOutcome, WarningCue,
    },
    systems::{
        consciousness_system, control_sampling_system, end_flight_system,
        flight_dynamics_system, hazard_detection_system, presentation_system,
        start_flight_system,
    },
};

/// Stages of a flight tick, run in this order.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Controls,
    Dynamics,
    Hazards,
    Consciousness,
    Presentation,
}

/// Flight-feel simulation on the fixed timestep.
///
/// Ticks run only while a [`FlightSession`] exists; send [`StartFlight`] and
/// [`EndFlight`] to open and close one.
pub struct FlightPlugin {
    pub config: FlightModelConfig,
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self {
            config: FlightModelConfig::default(),
        }
    }
}

impl FlightPlugin {
    pub fn with_config(config: FlightModelConfig) -> Self {
        Self { config }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<ControlInputs>()
            .init_resource::<SimulationTick>()
            .init_resource::<TickOutcome>()
            .init_resource::<ScreenTint>()
            .init_resource::<WarningCue>()
            .init_resource::<SnapshotFeed>()
            .init_resource::<LastFlight>();

        app.add_event::<StartFlight>()
            .add_event::<EndFlight>()
            .add_event::<FlightEnded>()
            .add_event::<HazardEvent>();

        // Configure fixed timestep
        app.insert_resource(Time::<Fixed>::from_duration(self.config.tick.period()));

        app.configure_sets(
            FixedUpdate,
            (
                FlightSet::Controls,
                FlightSet::Dynamics,
                FlightSet::Hazards,
                FlightSet::Consciousness,
                FlightSet::Presentation,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                control_sampling_system.in_set(FlightSet::Controls),
                flight_dynamics_system.in_set(FlightSet::Dynamics),
                hazard_detection_system.in_set(FlightSet::Hazards),
                consciousness_system.in_set(FlightSet::Consciousness),
                presentation_system.in_set(FlightSet::Presentation),
            )
                .run_if(resource_exists::<FlightSession>),
        );

        // Lifecycle runs before the fixed loop so a new flight ticks on the frame it starts
        app.add_systems(PreUpdate, (end_flight_system, start_flight_system).chain());
    }
}
