//! Reader for ambient ocean profile files.
//!
//! # File Format
//!
//! Comma-separated with a header row. Columns are matched by name, so their
//! order is free and unknown columns are ignored:
//!
//! ```text
//! depth,thetao,so,uo,vo,rhoa
//! -0.49402538,10.12,35.01,0.052,-0.011,1026.95
//! -1.54137540,10.11,35.01,0.051,-0.011,1026.96
//! ```
//!
//! `depth` is the elevation of each level (negative below the surface).
//! `rhoa` is optional; without it the ambient density is derived from
//! `thetao` and `so`. Rows with an empty or NaN field are dropped, which is
//! how the ocean products mark levels below the sea floor.

use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::ambient::{AmbientError, AmbientProfile};

/// Columns every profile must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["depth", "thetao", "so", "uo", "vo"];

/// Error type for profile file parsing.
#[derive(Debug, Error)]
pub enum ProfileFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No header row
    #[error("Profile file contains no header")]
    MissingHeader,

    /// Header lacks a required column
    #[error("Profile file has no '{0}' column")]
    MissingColumn(&'static str),

    /// Parse error with line number
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Every row was dropped
    #[error("Profile file contains no complete rows")]
    EmptyFile,

    /// Columns do not form a valid profile
    #[error(transparent)]
    Profile(#[from] AmbientError),
}

/// Read a profile file.
pub fn read_profile_file(path: &Path) -> Result<AmbientProfile, ProfileFileError> {
    let content = fs::read_to_string(path)?;
    parse_profile(&content)
}

/// Parse a profile from CSV text.
pub fn parse_profile(content: &str) -> Result<AmbientProfile, ProfileFileError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let (_, header) = lines.next().ok_or(ProfileFileError::MissingHeader)?;
    let names: Vec<String> = header
        .split(',')
        .map(|h| h.trim().trim_matches('"').to_ascii_lowercase())
        .collect();
    let position = |name: &str| names.iter().position(|n| n == name);

    let mut indices = [0usize; 5];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = position(name).ok_or(ProfileFileError::MissingColumn(name))?;
    }
    let rhoa_index = position("rhoa");

    let mut columns: [Vec<f64>; 5] = Default::default();
    let mut rhoa = Vec::new();
    let mut dropped = 0usize;

    for (line, text) in lines {
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        let mut row = [0.0; 6];
        let wanted = indices.iter().copied().chain(rhoa_index);

        let mut complete = true;
        for (value, index) in row.iter_mut().zip(wanted) {
            match parse_field(fields.get(index).copied(), line)? {
                Some(v) => *value = v,
                None => complete = false,
            }
        }
        if !complete {
            dropped += 1;
            continue;
        }

        for (column, &value) in columns.iter_mut().zip(&row) {
            column.push(value);
        }
        if rhoa_index.is_some() {
            rhoa.push(row[5]);
        }
    }

    if dropped > 0 {
        debug!("dropped {dropped} incomplete profile rows");
    }
    if columns[0].is_empty() {
        return Err(ProfileFileError::EmptyFile);
    }

    let [depth, thetao, so, uo, vo] = columns;
    let profile = if rhoa_index.is_some() {
        AmbientProfile::new(depth, thetao, so, uo, vo, rhoa)?
    } else {
        AmbientProfile::with_derived_density(depth, thetao, so, uo, vo)?
    };
    Ok(profile)
}

/// `None` for a missing, empty or NaN field.
fn parse_field(field: Option<&str>, line: usize) -> Result<Option<f64>, ProfileFileError> {
    let Some(text) = field.map(|f| f.trim_matches('"')) else {
        return Ok(None);
    };
    if text.is_empty() {
        return Ok(None);
    }
    let value: f64 = text.parse().map_err(|_| ProfileFileError::Parse {
        line,
        message: format!("invalid number '{text}'"),
    })?;
    Ok((!value.is_nan()).then_some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_with_density() {
        let content = "\
depth,thetao,so,uo,vo,rhoa
0.0,10.0,35.0,0.1,0.0,1027.0
-50.0,8.0,35.1,0.05,0.01,1027.5
";
        let p = parse_profile(content).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.depth, vec![0.0, -50.0]);
        assert_eq!(p.rhoa, vec![1027.0, 1027.5]);
        assert_eq!(p.vo, vec![0.0, 0.01]);
    }

    #[test]
    fn test_column_order_is_free() {
        let content = "\
rhoa,vo,uo,so,thetao,depth,extra
1027.0,0.2,0.1,35.0,10.0,-5.0,x
";
        let p = parse_profile(content).unwrap();
        assert_eq!(p.depth, vec![-5.0]);
        assert_eq!(p.thetao, vec![10.0]);
        assert_eq!(p.uo, vec![0.1]);
        assert_eq!(p.vo, vec![0.2]);
    }

    #[test]
    fn test_incomplete_rows_dropped() {
        let content = "\
depth,thetao,so,uo,vo,rhoa
0.0,10.0,35.0,0.1,0.0,1027.0
-10.0,9.0,35.0,0.1,0.0,1027.2
-20.0,nan,35.0,0.1,0.0,1027.3
-30.0,,35.0,0.1,0.0,1027.4
-40.0,8.0,35.0
";
        let p = parse_profile(content).unwrap();
        assert_eq!(p.depth, vec![0.0, -10.0]);
    }

    #[test]
    fn test_density_derived_when_absent() {
        let content = "depth,thetao,so,uo,vo\n0,10,35,0,0\n-100,10,35,0,0\n";
        let p = parse_profile(content).unwrap();
        assert_eq!(p.rhoa.len(), 2);
        assert_relative_eq!(p.rhoa[0], 1026.98, epsilon = 0.1);
    }

    #[test]
    fn test_missing_column() {
        let err = parse_profile("depth,thetao,so,uo\n0,1,2,3\n").unwrap_err();
        assert!(matches!(err, ProfileFileError::MissingColumn("vo")));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_profile("depth,thetao,so,uo,vo\n\n0,abc,35,0,0\n").unwrap_err();
        assert!(matches!(err, ProfileFileError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(matches!(parse_profile(""), Err(ProfileFileError::MissingHeader)));
        assert!(matches!(
            parse_profile("depth,thetao,so,uo,vo\n0,nan,35,0,0\n"),
            Err(ProfileFileError::EmptyFile)
        ));
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oceanProfilesInput.csv");
        fs::write(&path, "depth,thetao,so,uo,vo,rhoa\n0,10,35,0,0,1027\n-20,9,35,0,0,1027.1\n")
            .unwrap();
        let p = read_profile_file(&path).unwrap();
        assert_eq!(p.len(), 2);
    }
}
