use bevy::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{
    physics::{
        check_failures, ConsciousnessState, FlightDynamicsState, HazardEvent, HazardKind,
        HazardLog,
    },
    resources::{config::FlightModelConfig, SimulationTick},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(pub Uuid);

impl FlightId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FlightId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State after the consciousness regulator has run for a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsTickResult<'a> {
    pub consciousness_level: f64,
    pub hazard_log: &'a [HazardEvent],
}

/// Everything one full tick produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u64,
    pub g_force: f64,
    pub hazards: Vec<HazardEvent>,
    pub consciousness_level: f64,
}

/// Debrief of a finished (or in-progress) flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub flight_id: FlightId,
    pub started_at: DateTime<Utc>,
    pub ticks: u64,
    pub peak_g: f64,
    pub lowest_g: f64,
    pub lowest_consciousness: f64,
    pub final_consciousness: f64,
    pub blackout_ticks: u64,
    pub gear_overspeed_events: usize,
    pub structural_overstress_events: usize,
}

/// Debrief of the most recently ended flight.
#[derive(Resource, Debug, Clone, Default)]
pub struct LastFlight(pub Option<FlightSummary>);

/// One in-progress flight. Created at flight start, dropped at flight end, so no
/// simulation state outlives the flight it belongs to.
///
/// Owns the integrator state, the consciousness level and the hazard log. The
/// scheduler hands it to one system at a time, which is the single-writer
/// guarantee the tick pipeline relies on.
#[derive(Resource, Debug, Clone)]
pub struct FlightSession {
    id: FlightId,
    started_at: DateTime<Utc>,
    config: FlightModelConfig,
    dynamics: FlightDynamicsState,
    consciousness: ConsciousnessState,
    hazard_log: HazardLog,
    ticks: u64,
    peak_g: f64,
    lowest_g: f64,
    lowest_consciousness: f64,
    blackout_ticks: u64,
}

impl FlightSession {
    pub fn new(config: FlightModelConfig) -> Self {
        let dynamics = FlightDynamicsState::new(&config.dynamics);
        let consciousness = ConsciousnessState::new(&config.consciousness);
        Self {
            id: FlightId::new(),
            started_at: Utc::now(),
            peak_g: dynamics.current_g,
            lowest_g: dynamics.current_g,
            lowest_consciousness: consciousness.level(),
            config,
            dynamics,
            consciousness,
            hazard_log: HazardLog::new(),
            ticks: 0,
            blackout_ticks: 0,
        }
    }

    pub fn id(&self) -> FlightId {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn config(&self) -> &FlightModelConfig {
        &self.config
    }

    pub fn dynamics(&self) -> &FlightDynamicsState {
        &self.dynamics
    }

    pub fn g_force(&self) -> f64 {
        self.dynamics.current_g
    }

    pub fn consciousness(&self) -> &ConsciousnessState {
        &self.consciousness
    }

    pub fn consciousness_level(&self) -> f64 {
        self.consciousness.level()
    }

    pub fn is_blacked_out(&self) -> bool {
        self.consciousness.is_blacked_out(&self.config.consciousness)
    }

    pub fn hazard_log(&self) -> &HazardLog {
        &self.hazard_log
    }

    /// Completed regulator ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn advance_simulation(
        &mut self,
        target_pitch_deg: f64,
        airspeed_kts: f64,
        delta_time_ms: f64,
    ) -> f64 {
        self.dynamics.update(
            target_pitch_deg,
            airspeed_kts,
            delta_time_ms,
            &self.config.dynamics,
        )
    }

    pub fn detect_hazards(
        &self,
        g_force: f64,
        gear_down: bool,
        airspeed_kts: f64,
    ) -> Vec<HazardEvent> {
        check_failures(g_force, gear_down, airspeed_kts, &self.config.hazards)
    }

    /// Runs the consciousness regulator and appends `hazards` to the session log.
    pub fn apply_physics_tick(
        &mut self,
        g_force: f64,
        hazards: &[HazardEvent],
    ) -> PhysicsTickResult<'_> {
        let level = self
            .consciousness
            .apply(g_force, &self.config.consciousness);
        self.hazard_log.append(hazards);

        self.ticks += 1;
        if g_force.is_finite() {
            self.peak_g = self.peak_g.max(g_force);
            self.lowest_g = self.lowest_g.min(g_force);
        }
        self.lowest_consciousness = self.lowest_consciousness.min(level);
        if self.is_blacked_out() {
            self.blackout_ticks += 1;
        }

        PhysicsTickResult {
            consciousness_level: level,
            hazard_log: self.hazard_log.events(),
        }
    }

    /// Runs integrator, detector and regulator in order for one sample.
    pub fn tick(&mut self, sample: &SimulationTick) -> TickReport {
        let g_force = self.advance_simulation(
            sample.target_pitch_deg,
            sample.airspeed_kts,
            sample.delta_time_ms,
        );
        let hazards = self.detect_hazards(g_force, sample.gear_down, sample.airspeed_kts);
        let consciousness_level = self.apply_physics_tick(g_force, &hazards).consciousness_level;

        TickReport {
            tick: self.ticks,
            g_force,
            hazards,
            consciousness_level,
        }
    }

    pub fn summary(&self) -> FlightSummary {
        FlightSummary {
            flight_id: self.id,
            started_at: self.started_at,
            ticks: self.ticks,
            peak_g: self.peak_g,
            lowest_g: self.lowest_g,
            lowest_consciousness: self.lowest_consciousness,
            final_consciousness: self.consciousness.level(),
            blackout_ticks: self.blackout_ticks,
            gear_overspeed_events: self.hazard_log.count(HazardKind::GearOverspeed),
            structural_overstress_events: self
                .hazard_log
                .count(HazardKind::StructuralOverstress),
        }
    }
}
