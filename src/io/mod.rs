//! I/O utilities for plume runs.
//!
//! This module provides:
//! - **Ambient profiles**: CSV reader producing an [`AmbientProfile`](crate::ambient::AmbientProfile)
//! - **Time series**: tab-separated `plumeState.csv` and `parameters.csv` per cylinder
//! - **Run summary**: flat `summary.json` with namelists and metrics
//! - **Experiment directories**: `runNNNNNN/` numbering with namelist logging
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use plume_rs::io::{ExperimentDir, read_profile_file, write_output};
//! # use plume_rs::{config::PlumeConfig, simulation::PlumeSimulation};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = read_profile_file(Path::new("oceanProfilesInput.csv"))?;
//! let config = PlumeConfig::load_dir("namelists")?;
//! let output = PlumeSimulation::new(config, &profile)?.run()?;
//!
//! let exp = ExperimentDir::create(Path::new("products"))?;
//! write_output(&exp.path, &output)?;
//! # Ok(())
//! # }
//! ```

mod experiment;
mod output;
mod profile_reader;
mod summary;

pub use experiment::{ExperimentDir, LOG_DIR};
pub use output::{
    OutputError, PARAMETER_FILE, STATE_FILE, output_file_names, write_cylinder, write_output,
    write_table,
};
pub use profile_reader::{ProfileFileError, REQUIRED_COLUMNS, parse_profile, read_profile_file};
pub use summary::{
    RUN_DATE_FORMAT, SUMMARY_FILE, build_summary, collect_summaries, flatten_into,
    format_run_date, write_summary,
};
