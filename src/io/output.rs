//! Writers for the plume time series.
//!
//! Both tables are tab separated with a header row and 8 decimals:
//!
//! ```text
//! Time [min]	Mass	U	V	W	C	Density	A_Density	Tkness	Radius	x	y	z
//! 0.00000000	0.56003757	0.00000000	...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::simulation::{CylinderRun, SimulationOutput};
use crate::solver::{PARAMETER_HEADER, STATE_HEADER};

pub const STATE_FILE: &str = "plumeState.csv";
pub const PARAMETER_FILE: &str = "parameters.csv";

/// Error type for writing run products.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error with the offending path
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Summary serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Experiment directory exists already
    #[error("experiment directory {0} already exists, refusing to overwrite")]
    RunExists(PathBuf),
}

impl OutputError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write one table: header then one line per row.
pub fn write_table<W: Write, const N: usize>(
    writer: W,
    header: &[&str; N],
    rows: impl IntoIterator<Item = [f64; N]>,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{}", header.join("\t"))?;
    for row in rows {
        let mut first = true;
        for value in row {
            if !first {
                write!(writer, "\t")?;
            }
            write!(writer, "{value:.8}")?;
            first = false;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

/// File names of cylinder `index`; runs with several cylinders get a
/// `_cylNNN` suffix.
pub fn output_file_names(index: usize, ncyl: usize) -> (String, String) {
    if ncyl <= 1 {
        return (STATE_FILE.to_string(), PARAMETER_FILE.to_string());
    }
    let suffixed = |name: &str| match name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}_cyl{index:03}.{ext}"),
        None => format!("{name}_cyl{index:03}"),
    };
    (suffixed(STATE_FILE), suffixed(PARAMETER_FILE))
}

/// Write the state and parameter tables of one cylinder into `dir`.
pub fn write_cylinder(
    dir: &Path,
    run: &CylinderRun,
    ncyl: usize,
) -> Result<(PathBuf, PathBuf), OutputError> {
    let (state_name, parameter_name) = output_file_names(run.index, ncyl);

    let state_path = dir.join(state_name);
    let file = File::create(&state_path).map_err(OutputError::io(&state_path))?;
    write_table(file, &STATE_HEADER, run.states.iter().map(|r| r.to_row()))
        .map_err(OutputError::io(&state_path))?;

    let parameter_path = dir.join(parameter_name);
    let file = File::create(&parameter_path).map_err(OutputError::io(&parameter_path))?;
    write_table(
        file,
        &PARAMETER_HEADER,
        run.parameters.iter().map(|r| r.to_row()),
    )
    .map_err(OutputError::io(&parameter_path))?;

    Ok((state_path, parameter_path))
}

/// Write the tables of every cylinder; returns the files written.
pub fn write_output(dir: &Path, output: &SimulationOutput) -> Result<Vec<PathBuf>, OutputError> {
    let ncyl = output.len();
    let mut written = Vec::with_capacity(2 * ncyl);
    for run in &output.cylinders {
        let (state, parameters) = write_cylinder(dir, run, ncyl)?;
        written.push(state);
        written.push(parameters);
    }
    Ok(written)
}
