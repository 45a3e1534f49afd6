use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use gloc::{
    replay::{run_script, ManeuverScript},
    FlightModelConfig,
};

/// Flies a maneuver script headless and prints one JSON line per tick, followed
/// by the flight summary.
///
/// Usage: gloc_replay <maneuver.yaml> [flight_model.yaml]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let script_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Usage: gloc_replay <maneuver.yaml> [flight_model.yaml]");
            std::process::exit(2);
        }
    };
    let config_path = args.next().map(PathBuf::from);

    let script = ManeuverScript::load(&script_path)?;
    let config = FlightModelConfig::load_or_default(config_path.as_deref())?;

    let report = run_script(config, &script, true)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for snapshot in &report.snapshots {
        writeln!(out, "{}", serde_json::to_string(snapshot)?)?;
    }
    writeln!(
        out,
        "{}",
        serde_json::json!({ "script": report.script, "summary": report.summary })
    )?;
    out.flush()?;

    Ok(())
}
