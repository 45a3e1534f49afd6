use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    resources::ControlInputs,
    utils::{FlightError, Result},
};

/// Control positions held for a number of ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManeuverSegment {
    pub ticks: u64,
    #[serde(default)]
    pub yoke_x: f64,
    #[serde(default)]
    pub yoke_y: f64,
    #[serde(default)]
    pub throttle: f64,
    #[serde(default = "default_gear_down")]
    pub gear_down: bool,
}

fn default_gear_down() -> bool {
    true
}

impl ManeuverSegment {
    pub fn controls(&self) -> ControlInputs {
        ControlInputs {
            yoke_x: self.yoke_x,
            yoke_y: self.yoke_y,
            throttle: self.throttle,
            gear_down: self.gear_down,
        }
    }
}

/// A scripted flight: segments are flown back to back from a fresh session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManeuverScript {
    #[serde(default)]
    pub name: String,
    pub segments: Vec<ManeuverSegment>,
}

impl ManeuverScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let script: Self = serde_yaml::from_reader(file)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let script: Self = serde_yaml::from_str(yaml)?;
        script.validate()?;
        Ok(script)
    }

    pub fn total_ticks(&self) -> u64 {
        self.segments.iter().map(|segment| segment.ticks).sum()
    }

    pub fn validate(&self) -> Result<()> {
        if self.segments.is_empty() {
            return Err(FlightError::InvalidScript(
                "script has no segments".to_string(),
            ));
        }
        for (index, segment) in self.segments.iter().enumerate() {
            if segment.ticks == 0 {
                return Err(FlightError::InvalidScript(format!(
                    "segment {} holds for zero ticks",
                    index
                )));
            }
            for (name, value) in [
                ("yoke_x", segment.yoke_x),
                ("yoke_y", segment.yoke_y),
                ("throttle", segment.throttle),
            ] {
                if !value.is_finite() {
                    return Err(FlightError::InvalidScript(format!(
                        "segment {} has non-finite {}: {}",
                        index, name, value
                    )));
                }
            }
        }
        Ok(())
    }
}
