//! Experiment directories with sequential run numbering.
//!
//! Every run gets `<root>/runNNNNNN/`, where `NNNNNN` is the number of
//! entries under `<root>` whose name contains `run`, zero padded to six
//! digits. The namelists used are copied into `LOG/`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::OutputError;
use crate::config::NAMELIST_FILES;

pub const LOG_DIR: &str = "LOG";

/// A freshly created experiment directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentDir {
    /// Zero-padded run number, e.g. `000004`
    pub run_id: String,
    pub path: PathBuf,
}

impl ExperimentDir {
    /// Create the next run directory under `root`.
    ///
    /// Fails with [`OutputError::RunExists`] rather than writing into an
    /// existing run.
    pub fn create(root: &Path) -> Result<Self, OutputError> {
        fs::create_dir_all(root).map_err(OutputError::io(root))?;

        let count = fs::read_dir(root)
            .map_err(OutputError::io(root))?
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains("run"))
            .count();
        let run_id = format!("{count:06}");
        let path = root.join(format!("run{run_id}"));

        if path.exists() {
            return Err(OutputError::RunExists(path));
        }
        let log = path.join(LOG_DIR);
        fs::create_dir_all(&log).map_err(OutputError::io(&log))?;

        info!("experiment directory {}", path.display());
        Ok(Self { run_id, path })
    }

    pub fn log_dir(&self) -> PathBuf {
        self.path.join(LOG_DIR)
    }

    /// Copy the namelists found in `namelist_dir` into `LOG/`.
    ///
    /// Returns the number of files copied; optional namelists that are
    /// absent are skipped.
    pub fn log_namelists(&self, namelist_dir: &Path) -> Result<usize, OutputError> {
        let log = self.log_dir();
        let mut copied = 0;
        for name in NAMELIST_FILES {
            let source = namelist_dir.join(name);
            if !source.is_file() {
                continue;
            }
            let target = log.join(name);
            fs::copy(&source, &target).map_err(OutputError::io(&target))?;
            debug!("logged {}", target.display());
            copied += 1;
        }
        Ok(copied)
    }
}
