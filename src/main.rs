//! Command line entry point.
//!
//! ```text
//! plume <namelist_dir> <profile_csv> <output_root>
//! plume merge <output_root>
//! ```
//!
//! The first form runs a simulation into a new `runNNNNNN/` directory under
//! `<output_root>`. The second prints the summaries of every run under
//! `<output_root>` as one JSON array. `RUST_LOG` controls verbosity.

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use chrono::Utc;
use log::info;

use plume_rs::analysis::RunSummary;
use plume_rs::config::PlumeConfig;
use plume_rs::io::{
    ExperimentDir, build_summary, collect_summaries, format_run_date, read_profile_file,
    write_output, write_summary,
};
use plume_rs::simulation::PlumeSimulation;

const USAGE: &str = "usage: plume <namelist_dir> <profile_csv> <output_root>\n       plume merge <output_root>";

fn run(namelist_dir: &Path, profile_path: &Path, output_root: &Path) -> Result<(), Box<dyn Error>> {
    let config = PlumeConfig::load_dir(namelist_dir)?;
    let profile = read_profile_file(profile_path)?;
    info!(
        "profile {} with {} levels",
        profile_path.display(),
        profile.len()
    );

    let simulation = PlumeSimulation::new(config, &profile)?;
    let exp = ExperimentDir::create(output_root)?;
    exp.log_namelists(namelist_dir)?;

    #[cfg(feature = "parallel")]
    let output = simulation.run_parallel()?;
    #[cfg(not(feature = "parallel"))]
    let output = simulation.run()?;

    write_output(&exp.path, &output)?;

    let metrics = RunSummary::compute(simulation.config(), &output);
    let summary = build_summary(
        &exp.run_id,
        &format_run_date(Utc::now()),
        simulation.config(),
        &metrics,
    )?;
    write_summary(&exp.path, &summary)?;

    if let Some(state) = metrics.final_state {
        info!("run{} finished: {state}", exp.run_id);
    }
    Ok(())
}

fn merge(output_root: &Path) -> Result<(), Box<dyn Error>> {
    let summaries = collect_summaries(output_root)?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [cmd, root] if cmd == "merge" => merge(Path::new(root)),
        [namelists, profile, root] => run(Path::new(namelists), Path::new(profile), Path::new(root)),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
