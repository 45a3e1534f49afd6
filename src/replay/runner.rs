use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy};
use serde::{Deserialize, Serialize};

use crate::{
    plugins::{EndFlight, FlightPlugin, StartFlight},
    replay::ManeuverScript,
    resources::{
        ControlInputs, FlightModelConfig, FlightSession, FlightSnapshot, FlightSummary,
        LastFlight, SnapshotFeed,
    },
    utils::{FlightError, Result},
};

/// Frames allowed to pass without a completed tick before giving up.
const MAX_IDLE_UPDATES: u32 = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayReport {
    pub script: String,
    pub snapshots: Vec<FlightSnapshot>,
    pub summary: FlightSummary,
}

/// Headless app whose clock advances exactly one tick period per update.
///
/// `logging` installs the log subscriber, which can only happen once per process.
pub fn build_app(config: FlightModelConfig, logging: bool) -> App {
    let period = config.tick.period();
    let mut app = App::new();

    app.add_plugins(MinimalPlugins);
    if logging {
        app.add_plugins(LogPlugin::default());
    }
    app.add_plugins(FlightPlugin::with_config(config))
        .insert_resource(TimeUpdateStrategy::ManualDuration(period));

    // The first update only starts the clock
    app.update();
    app
}

/// Ticks completed by the flight in progress.
pub fn session_ticks(app: &App) -> Result<u64> {
    app.world()
        .get_resource::<FlightSession>()
        .map(|session| session.ticks())
        .ok_or(FlightError::NoActiveFlight)
}

/// Updates the app until the flight in progress has completed `target` ticks.
pub fn fly_until(app: &mut App, target: u64) -> Result<()> {
    let mut idle_updates = 0;
    loop {
        let ticks = session_ticks(app)?;
        if ticks >= target {
            return Ok(());
        }

        app.update();

        if session_ticks(app)? == ticks {
            idle_updates += 1;
            if idle_updates > MAX_IDLE_UPDATES {
                return Err(FlightError::Stalled(format!(
                    "no tick completed in {} updates (at tick {} of {})",
                    MAX_IDLE_UPDATES, ticks, target
                )));
            }
        } else {
            idle_updates = 0;
        }
    }
}

/// Flies `script` from a fresh session and returns every snapshot plus the debrief.
pub fn run_script(
    config: FlightModelConfig,
    script: &ManeuverScript,
    logging: bool,
) -> Result<ReplayReport> {
    config.validate()?;
    script.validate()?;

    let mut app = build_app(config, logging);
    let snapshots = app.world_mut().resource_mut::<SnapshotFeed>().subscribe();

    // Controls must be in place before the start frame, which already ticks
    *app.world_mut().resource_mut::<ControlInputs>() = script.segments[0].controls();
    app.world_mut().send_event(StartFlight);
    app.update();
    info!(
        "Replaying '{}': {} segments, {} ticks",
        script.name,
        script.segments.len(),
        script.total_ticks()
    );

    let mut target = 0;
    for segment in &script.segments {
        *app.world_mut().resource_mut::<ControlInputs>() = segment.controls();
        target += segment.ticks;
        fly_until(&mut app, target)?;
    }

    app.world_mut().send_event(EndFlight);
    app.update();

    let summary = app
        .world()
        .resource::<LastFlight>()
        .0
        .clone()
        .ok_or(FlightError::NoActiveFlight)?;

    Ok(ReplayReport {
        script: script.name.clone(),
        snapshots: snapshots.try_iter().collect(),
        summary,
    })
}
