use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::config::DynamicsConfig;

/// Smoothed load-factor state carried between ticks of one flight.
///
/// The model is tuned for feel rather than accuracy: the load is driven by the
/// rate of change of commanded pitch scaled by airspeed, then blended into the
/// running value with a fixed per-tick weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightDynamicsState {
    pub current_g: f64,
    pub last_pitch_deg: f64,
}

impl Default for FlightDynamicsState {
    fn default() -> Self {
        Self::new(&DynamicsConfig::default())
    }
}

impl FlightDynamicsState {
    pub fn new(config: &DynamicsConfig) -> Self {
        Self {
            current_g: config.initial_g,
            last_pitch_deg: 0.0,
        }
    }

    /// Load the pilot would feel if the current inputs were held indefinitely.
    pub fn instantaneous_g(
        &self,
        target_pitch_deg: f64,
        airspeed_kts: f64,
        delta_time_ms: f64,
        config: &DynamicsConfig,
    ) -> f64 {
        let pitch_rate = (target_pitch_deg - self.last_pitch_deg) / delta_time_ms;
        let speed_factor = airspeed_kts / config.speed_divisor;
        1.0 + pitch_rate * speed_factor * config.feel_coefficient
    }

    /// Advances the integrator by one tick and returns the smoothed g-force.
    ///
    /// A non-positive or non-finite `delta_time_ms`, or a NaN input, drops the tick
    /// and returns the previous value. Pitch and airspeed are clamped to the
    /// configured envelope before use.
    pub fn update(
        &mut self,
        target_pitch_deg: f64,
        airspeed_kts: f64,
        delta_time_ms: f64,
        config: &DynamicsConfig,
    ) -> f64 {
        if !delta_time_ms.is_finite() || delta_time_ms <= 0.0 {
            debug!("Dropping dynamics tick with delta {} ms", delta_time_ms);
            return self.current_g;
        }
        if target_pitch_deg.is_nan() || airspeed_kts.is_nan() {
            debug!(
                "Dropping dynamics tick with NaN input: pitch={}, airspeed={}",
                target_pitch_deg, airspeed_kts
            );
            return self.current_g;
        }

        let pitch = target_pitch_deg.clamp(-config.max_pitch_deg, config.max_pitch_deg);
        let airspeed = airspeed_kts.clamp(0.0, config.max_airspeed_kts);

        let instantaneous = self.instantaneous_g(pitch, airspeed, delta_time_ms, config);
        let blended =
            self.current_g * (1.0 - config.smoothing) + instantaneous * config.smoothing;

        // Vanishing steps can push the pitch rate to infinity
        if !blended.is_finite() {
            debug!("Dropping dynamics tick with non-finite load {}", blended);
            return self.current_g;
        }

        self.current_g = blended;
        self.last_pitch_deg = pitch;
        self.current_g
    }
}
