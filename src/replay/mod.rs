//! Scripted, headless flights: hold control positions for a number of ticks
//! and collect what the flight model produced.

mod runner;
mod script;

pub use runner::{build_app, fly_until, run_script, session_ticks, ReplayReport};
pub use script::{ManeuverScript, ManeuverSegment};
