// Reference flight-feel constants. All rates are per tick, not per second.

pub const LEVEL_FLIGHT_G: f64 = 1.0; // g
pub const G_SMOOTHING_FACTOR: f64 = 0.1; // blend weight of the instantaneous load per tick
pub const G_FEEL_COEFFICIENT: f64 = 5.0; // tuned pitch-rate to load multiplier
pub const SPEED_FACTOR_DIVISOR: f64 = 100.0; // kts per unit of speed factor

pub const MAX_PITCH_DEG: f64 = 45.0; // deg
pub const MAX_AIRSPEED_KTS: f64 = 500.0; // kts

// Hazard limits
pub const GEAR_OVERSPEED_KTS: f64 = 250.0; // kts
pub const STRUCTURAL_MAX_G: f64 = 9.0; // g
pub const STRUCTURAL_MIN_G: f64 = -3.0; // g

// Consciousness model
pub const MAX_CONSCIOUSNESS: f64 = 100.0;
pub const POSITIVE_G_ONSET: f64 = 5.0; // g
pub const NEGATIVE_G_ONSET: f64 = -2.0; // g
pub const POSITIVE_G_DRAIN: f64 = 0.5; // level per g above onset
pub const NEGATIVE_G_DRAIN: f64 = 1.0; // level per g below onset
pub const CONSCIOUSNESS_RECOVERY: f64 = 1.0; // level per tick in the safe band
pub const BLACKOUT_LEVEL: f64 = 20.0;

// Cockpit control mapping
pub const PITCH_PER_YOKE_DEG: f64 = -30.0; // deg at full yoke deflection
pub const KTS_PER_THROTTLE_PERCENT: f64 = 4.5;

// Tick cadence
pub const TICK_PERIOD_MS: u64 = 50;
pub const REPORTED_DELTA_MS: f64 = 16.0;

// Presentation
pub const TINT_VISIBLE_OPACITY: f64 = 0.05;
pub const GLOC_BANNER_OPACITY: f64 = 0.8;
pub const WARNING_HIGH_G: f64 = 4.0; // g
pub const WARNING_LOW_G: f64 = 0.0; // g
