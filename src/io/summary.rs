//! JSON summary of a run.
//!
//! The summary is a flat object: run identification, every namelist entry
//! (nested keys joined with `_` and prefixed by the namelist) and the
//! [`RunSummary`] metrics.
//!
//! ```text
//! {"runId": "000003", "runDate": "20261019T10:42:07Z",
//!  "numerical_dt": 1.0, "numerical_entrain_params_a1": 0.057, ...,
//!  "release_z0": -100.0, ..., "ambient_SEA_AREA": "GLOBAL",
//!  "oil_volume0": 0.0157, "tmax": 600, "oil_volume": 9.0, ...}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use super::OutputError;
use crate::analysis::RunSummary;
use crate::config::PlumeConfig;

pub const SUMMARY_FILE: &str = "summary.json";

/// Timestamp format of `runDate`.
pub const RUN_DATE_FORMAT: &str = "%Y%m%dT%H:%M:%SZ";

pub fn format_run_date(date: DateTime<Utc>) -> String {
    date.format(RUN_DATE_FORMAT).to_string()
}

/// Insert the leaves of `value` into `out`, joining nested keys with `_`.
pub fn flatten_into(out: &mut Map<String, Value>, prefix: &str, value: Value) {
    match value {
        Value::Object(entries) => {
            for (key, nested) in entries {
                flatten_into(out, &format!("{prefix}{key}_"), nested);
            }
        }
        leaf => {
            let key = prefix.strip_suffix('_').unwrap_or(prefix);
            out.insert(key.to_string(), leaf);
        }
    }
}

fn flatten_namelist<T: Serialize>(
    out: &mut Map<String, Value>,
    prefix: &str,
    namelist: &T,
) -> Result<(), OutputError> {
    flatten_into(out, prefix, serde_json::to_value(namelist)?);
    Ok(())
}

/// Assemble the summary object of a run.
pub fn build_summary(
    run_id: &str,
    run_date: &str,
    config: &PlumeConfig,
    metrics: &RunSummary,
) -> Result<Map<String, Value>, OutputError> {
    let mut out = Map::new();
    out.insert("runId".to_string(), Value::from(run_id));
    out.insert("runDate".to_string(), Value::from(run_date));

    flatten_namelist(&mut out, "numerical_", &config.numerical)?;
    flatten_namelist(&mut out, "release_", &config.release)?;
    flatten_namelist(&mut out, "ambient_", &config.ambient)?;
    flatten_namelist(&mut out, "", metrics)?;
    Ok(out)
}

/// Write `summary.json` into `dir`.
pub fn write_summary(dir: &Path, summary: &Map<String, Value>) -> Result<PathBuf, OutputError> {
    let path = dir.join(SUMMARY_FILE);
    let text = serde_json::to_string_pretty(summary)?;
    fs::write(&path, text).map_err(OutputError::io(&path))?;
    info!("summary saved in {}", path.display());
    Ok(path)
}

/// Load the summaries of every `run*` directory under `root`, in name order.
///
/// Unreadable summaries are skipped with a warning.
pub fn collect_summaries(root: &Path) -> Result<Vec<Map<String, Value>>, OutputError> {
    let entries = fs::read_dir(root).map_err(OutputError::io(root))?;
    let mut runs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().contains("run"))
        .map(|e| e.path())
        .collect();
    runs.sort();

    let mut summaries = Vec::with_capacity(runs.len());
    for run in runs {
        let path = run.join(SUMMARY_FILE);
        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str::<Map<String, Value>>(&text).map_err(|e| e.to_string()));
        match parsed {
            Ok(summary) => summaries.push(summary),
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
    }
    info!("{} run(s) loaded from {}", summaries.len(), root.display());
    Ok(summaries)
}
