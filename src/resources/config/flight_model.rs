use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::{constants::*, FlightError, Result};

/// Tuning for the g-force integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsConfig {
    pub initial_g: f64,
    /// Weight given to the instantaneous load each tick.
    pub smoothing: f64,
    pub feel_coefficient: f64,
    pub speed_divisor: f64,
    pub max_pitch_deg: f64,
    pub max_airspeed_kts: f64,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            initial_g: LEVEL_FLIGHT_G,
            smoothing: G_SMOOTHING_FACTOR,
            feel_coefficient: G_FEEL_COEFFICIENT,
            speed_divisor: SPEED_FACTOR_DIVISOR,
            max_pitch_deg: MAX_PITCH_DEG,
            max_airspeed_kts: MAX_AIRSPEED_KTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardLimits {
    pub gear_overspeed_kts: f64,
    pub max_g: f64,
    pub min_g: f64,
}

impl Default for HazardLimits {
    fn default() -> Self {
        Self {
            gear_overspeed_kts: GEAR_OVERSPEED_KTS,
            max_g: STRUCTURAL_MAX_G,
            min_g: STRUCTURAL_MIN_G,
        }
    }
}

/// Drain and recovery slopes of the consciousness model, applied once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsciousnessConfig {
    pub max_level: f64,
    pub positive_g_onset: f64,
    pub negative_g_onset: f64,
    pub positive_drain_rate: f64,
    pub negative_drain_rate: f64,
    pub recovery_rate: f64,
    pub blackout_level: f64,
}

impl Default for ConsciousnessConfig {
    fn default() -> Self {
        Self {
            max_level: MAX_CONSCIOUSNESS,
            positive_g_onset: POSITIVE_G_ONSET,
            negative_g_onset: NEGATIVE_G_ONSET,
            positive_drain_rate: POSITIVE_G_DRAIN,
            negative_drain_rate: NEGATIVE_G_DRAIN,
            recovery_rate: CONSCIOUSNESS_RECOVERY,
            blackout_level: BLACKOUT_LEVEL,
        }
    }
}

/// Mapping from cockpit controls to the integrator's inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlMapping {
    pub pitch_per_yoke_deg: f64,
    pub kts_per_throttle_percent: f64,
}

impl Default for ControlMapping {
    fn default() -> Self {
        Self {
            pitch_per_yoke_deg: PITCH_PER_YOKE_DEG,
            kts_per_throttle_percent: KTS_PER_THROTTLE_PERCENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickConfig {
    pub period_ms: u64,
    /// Delta handed to the integrator instead of the measured step.
    /// `None` uses the fixed-step delta measured by the scheduler.
    pub reported_delta_ms: Option<f64>,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            period_ms: TICK_PERIOD_MS,
            reported_delta_ms: Some(REPORTED_DELTA_MS),
        }
    }
}

impl TickConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub tint_visible_opacity: f64,
    pub gloc_banner_opacity: f64,
    pub warning_high_g: f64,
    pub warning_low_g: f64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            tint_visible_opacity: TINT_VISIBLE_OPACITY,
            gloc_banner_opacity: GLOC_BANNER_OPACITY,
            warning_high_g: WARNING_HIGH_G,
            warning_low_g: WARNING_LOW_G,
        }
    }
}

/// Complete tuning of the flight-feel model. Defaults reproduce the reference feel.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightModelConfig {
    pub dynamics: DynamicsConfig,
    pub hazards: HazardLimits,
    pub consciousness: ConsciousnessConfig,
    pub controls: ControlMapping,
    pub tick: TickConfig,
    pub presentation: PresentationConfig,
}

impl FlightModelConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        info!("Loaded flight model config from {:?}", path.as_ref());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Loads from `path`, or from the user config location when `path` is `None`.
    /// A missing default file yields the reference config; an explicit path must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(path),
                _ => {
                    info!("No flight model config found, using reference defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gloc").join("flight_model.yaml"))
    }

    pub fn validate(&self) -> Result<()> {
        let d = &self.dynamics;
        if !(d.smoothing > 0.0 && d.smoothing <= 1.0) {
            return Err(invalid("dynamics.smoothing", d.smoothing));
        }
        if !(d.speed_divisor > 0.0) || !d.speed_divisor.is_finite() {
            return Err(invalid("dynamics.speed_divisor", d.speed_divisor));
        }
        for (name, value) in [
            ("dynamics.initial_g", d.initial_g),
            ("dynamics.feel_coefficient", d.feel_coefficient),
        ] {
            if !value.is_finite() {
                return Err(invalid(name, value));
            }
        }
        for (name, value) in [
            ("dynamics.max_pitch_deg", d.max_pitch_deg),
            ("dynamics.max_airspeed_kts", d.max_airspeed_kts),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(invalid(name, value));
            }
        }

        let h = &self.hazards;
        if !(h.max_g > h.min_g) {
            return Err(FlightError::InvalidConfig(format!(
                "hazards.max_g ({}) must exceed hazards.min_g ({})",
                h.max_g, h.min_g
            )));
        }

        let c = &self.consciousness;
        if !(c.max_level > 0.0) || !c.max_level.is_finite() {
            return Err(invalid("consciousness.max_level", c.max_level));
        }
        if !(c.positive_g_onset > c.negative_g_onset) {
            return Err(FlightError::InvalidConfig(format!(
                "consciousness.positive_g_onset ({}) must exceed negative_g_onset ({})",
                c.positive_g_onset, c.negative_g_onset
            )));
        }
        for (name, value) in [
            ("consciousness.positive_drain_rate", c.positive_drain_rate),
            ("consciousness.negative_drain_rate", c.negative_drain_rate),
            ("consciousness.recovery_rate", c.recovery_rate),
            ("consciousness.blackout_level", c.blackout_level),
        ] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(invalid(name, value));
            }
        }

        if self.tick.period_ms == 0 {
            return Err(FlightError::InvalidConfig(
                "tick.period_ms must be greater than zero".to_string(),
            ));
        }
        if let Some(delta) = self.tick.reported_delta_ms {
            if !(delta > 0.0) || !delta.is_finite() {
                return Err(invalid("tick.reported_delta_ms", delta));
            }
        }
        Ok(())
    }
}

fn invalid(name: &str, value: f64) -> FlightError {
    FlightError::InvalidConfig(format!("invalid value for {}: {}", name, value))
}
