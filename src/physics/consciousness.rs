use serde::{Deserialize, Serialize};

use crate::resources::config::ConsciousnessConfig;

/// Pilot alertness on a 0 (full blackout) to `max_level` (fully alert) scale.
///
/// Behaves as a leaky integrator: sustained positive load above the onset drains it,
/// negative load below the onset drains it at a steeper slope, and anything in between
/// recovers at a fixed rate. There is no terminal state; the pilot always comes back
/// given enough time in the safe band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsciousnessState {
    level: f64,
}

impl Default for ConsciousnessState {
    fn default() -> Self {
        Self::new(&ConsciousnessConfig::default())
    }
}

impl ConsciousnessState {
    pub fn new(config: &ConsciousnessConfig) -> Self {
        Self {
            level: config.max_level,
        }
    }

    /// Starts from an arbitrary level, clamped into range.
    pub fn with_level(level: f64, config: &ConsciousnessConfig) -> Self {
        let level = if level.is_nan() { config.max_level } else { level };
        Self {
            level: level.clamp(0.0, config.max_level),
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn is_blacked_out(&self, config: &ConsciousnessConfig) -> bool {
        self.level < config.blackout_level
    }

    /// Change in level for one tick spent at `g_force`, before clamping.
    pub fn delta_for(g_force: f64, config: &ConsciousnessConfig) -> f64 {
        if g_force > config.positive_g_onset {
            -(g_force - config.positive_g_onset) * config.positive_drain_rate
        } else if g_force < config.negative_g_onset {
            -(g_force.abs() - config.negative_g_onset.abs()) * config.negative_drain_rate
        } else {
            config.recovery_rate
        }
    }

    /// Applies one tick of drain or recovery and returns the new level.
    pub fn apply(&mut self, g_force: f64, config: &ConsciousnessConfig) -> f64 {
        if !g_force.is_finite() {
            return self.level;
        }
        let delta = Self::delta_for(g_force, config);
        self.level = (self.level + delta).clamp(0.0, config.max_level);
        self.level
    }
}
