use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::resources::config::HazardLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardKind {
    GearOverspeed,
    StructuralOverstress,
}

impl HazardKind {
    pub fn message(&self) -> &'static str {
        match self {
            HazardKind::GearOverspeed => "GEAR OVERSPEED! RETRACT IMMEDIATELY",
            HazardKind::StructuralOverstress => "G-FORCE LIMIT EXCEEDED",
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HazardKind::GearOverspeed => write!(f, "GEAR_OVERSPEED"),
            HazardKind::StructuralOverstress => write!(f, "STRUCTURAL_OVERSTRESS"),
        }
    }
}

/// A hazard detected on one tick. Also broadcast as an event for annunciators.
#[derive(Event, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardEvent {
    pub kind: HazardKind,
    pub message: String,
}

impl HazardEvent {
    pub fn new(kind: HazardKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

/// Classifies one tick's flight state. Gear overspeed is always reported before
/// structural overstress.
pub fn check_failures(
    g_force: f64,
    gear_down: bool,
    airspeed_kts: f64,
    limits: &HazardLimits,
) -> Vec<HazardEvent> {
    let mut failures = Vec::new();

    if gear_down && airspeed_kts > limits.gear_overspeed_kts {
        failures.push(HazardEvent::new(HazardKind::GearOverspeed));
    }

    if g_force > limits.max_g || g_force < limits.min_g {
        failures.push(HazardEvent::new(HazardKind::StructuralOverstress));
    }

    failures
}

/// Append-only record of every hazard detected during one flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HazardLog(Vec<HazardEvent>);

impl HazardLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, hazards: &[HazardEvent]) {
        self.0.extend_from_slice(hazards);
    }

    pub fn events(&self) -> &[HazardEvent] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count(&self, kind: HazardKind) -> usize {
        self.0.iter().filter(|event| event.kind == kind).count()
    }
}
