use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    physics::HazardEvent,
    resources::config::ControlMapping,
    utils::{LEVEL_FLIGHT_G, REPORTED_DELTA_MS},
};

/// Cockpit control positions written by the input layer.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlInputs {
    /// Lateral yoke deflection in [-1, 1]. Roll is not simulated.
    pub yoke_x: f64,
    /// Fore/aft yoke deflection in [-1, 1]; positive is pushing forward.
    pub yoke_y: f64,
    /// Throttle lever position in percent.
    pub throttle: f64,
    pub gear_down: bool,
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self {
            yoke_x: 0.0,
            yoke_y: 0.0,
            throttle: 0.0,
            gear_down: true,
        }
    }
}

impl ControlInputs {
    /// Converts control positions into the integrator's per-tick sample.
    pub fn sample(&self, mapping: &ControlMapping, delta_time_ms: f64) -> SimulationTick {
        let yoke_y = sanitize(self.yoke_y, -1.0, 1.0);
        let throttle = sanitize(self.throttle, 0.0, 100.0);

        SimulationTick {
            target_pitch_deg: yoke_y * mapping.pitch_per_yoke_deg,
            airspeed_kts: (throttle * mapping.kts_per_throttle_percent).round(),
            delta_time_ms,
            gear_down: self.gear_down,
        }
    }
}

fn sanitize(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

/// Inputs consumed by one tick of the flight model.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationTick {
    pub target_pitch_deg: f64,
    pub airspeed_kts: f64,
    pub delta_time_ms: f64,
    pub gear_down: bool,
}

impl Default for SimulationTick {
    fn default() -> Self {
        Self {
            target_pitch_deg: 0.0,
            airspeed_kts: 0.0,
            delta_time_ms: REPORTED_DELTA_MS,
            gear_down: true,
        }
    }
}

/// Results handed between the chained flight systems within a tick.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub g_force: f64,
    pub hazards: Vec<HazardEvent>,
}

impl Default for TickOutcome {
    fn default() -> Self {
        Self {
            g_force: LEVEL_FLIGHT_G,
            hazards: Vec::new(),
        }
    }
}
