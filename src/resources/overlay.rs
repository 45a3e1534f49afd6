use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::config::{ConsciousnessConfig, PresentationConfig};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TintColor {
    #[default]
    Black,
    Red,
}

/// Full-screen tint derived from consciousness: black for blackout, red for redout.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenTint {
    pub opacity: f64,
    pub color: TintColor,
    pub visible: bool,
    /// The G-LOC banner is shown over a nearly opaque tint.
    pub gloc: bool,
}

impl ScreenTint {
    pub fn from_flight(
        level: f64,
        g_force: f64,
        consciousness: &ConsciousnessConfig,
        presentation: &PresentationConfig,
    ) -> Self {
        let opacity = ((consciousness.max_level - level) / consciousness.max_level).max(0.0);
        let color = if g_force < 0.0 {
            TintColor::Red
        } else {
            TintColor::Black
        };
        let visible = opacity > presentation.tint_visible_opacity;

        Self {
            opacity,
            color,
            visible,
            gloc: visible && opacity > presentation.gloc_banner_opacity,
        }
    }
}

/// Audible over-g warning state.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningCue {
    pub active: bool,
}

impl WarningCue {
    pub fn from_g(g_force: f64, presentation: &PresentationConfig) -> Self {
        Self {
            active: g_force > presentation.warning_high_g || g_force < presentation.warning_low_g,
        }
    }
}
