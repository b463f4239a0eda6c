//! Run configuration read from YAML namelists.
//!
//! A namelist directory holds up to four files:
//!
//! | File | Struct | Required |
//! |------|--------|----------|
//! | `NaturalConstants.yaml` | [`NaturalConstants`] | no |
//! | `NumericalSimulation.yaml` | [`NumericalConfig`] | yes |
//! | `Release.yaml` | [`ReleaseConfig`] | yes |
//! | `Ambient.yaml` | [`AmbientConfig`] | no |
//!
//! Optional files fall back to their defaults. [`PlumeConfig::validate`]
//! rejects configurations that cannot be integrated before any work starts.

mod namelists;

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::entrainment::{EntrainmentCoefficients, EntrainmentMode, SINGULARITY_EPS};
use crate::equations::OilDensity;
use crate::solver::ClosureConstants;

pub use namelists::{
    AmbientConfig, EntrainmentParams, NaturalConstants, NumericalConfig, ReleaseConfig,
};

pub const CONSTANTS_FILE: &str = "NaturalConstants.yaml";
pub const NUMERICAL_FILE: &str = "NumericalSimulation.yaml";
pub const RELEASE_FILE: &str = "Release.yaml";
pub const AMBIENT_FILE: &str = "Ambient.yaml";

/// Namelist files in the order they are read.
pub const NAMELIST_FILES: [&str; 4] = [CONSTANTS_FILE, NUMERICAL_FILE, RELEASE_FILE, AMBIENT_FILE];

/// Errors loading or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Namelist could not be read
    #[error("cannot read namelist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Namelist is not valid YAML for its structure
    #[error("invalid namelist {name}: {source}")]
    Yaml {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// `total_entrain` is neither 0 nor 1
    #[error("unknown entrainment combination mode {0} (expected 0 = max, 1 = sum)")]
    UnknownEntrainmentMode(i64),

    /// Parameter outside its admissible range
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Parse one namelist from YAML text; `name` is used in error messages.
pub fn parse_namelist<T: DeserializeOwned>(name: &str, text: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(text).map_err(|source| ConfigError::Yaml {
        name: name.to_string(),
        source,
    })
}

fn read_namelist<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_namelist(&path.display().to_string(), &text)
}

fn read_optional_namelist<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    if path.exists() {
        read_namelist(path)
    } else {
        info!("{} not found, using defaults", path.display());
        Ok(T::default())
    }
}

/// Complete configuration of a plume run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlumeConfig {
    pub constants: NaturalConstants,
    pub numerical: NumericalConfig,
    pub release: ReleaseConfig,
    pub ambient: AmbientConfig,
}

impl PlumeConfig {
    /// Load the namelists of `dir`.
    ///
    /// Does not validate; call [`PlumeConfig::validate`] before running.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        Ok(Self {
            constants: read_optional_namelist(&dir.join(CONSTANTS_FILE))?,
            numerical: read_namelist(&dir.join(NUMERICAL_FILE))?,
            release: read_namelist(&dir.join(RELEASE_FILE))?,
            ambient: read_optional_namelist(&dir.join(AMBIENT_FILE))?,
        })
    }

    pub fn with_constants(mut self, constants: NaturalConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn with_numerical(mut self, numerical: NumericalConfig) -> Self {
        self.numerical = numerical;
        self
    }

    pub fn with_release(mut self, release: ReleaseConfig) -> Self {
        self.release = release;
        self
    }

    pub fn with_ambient(mut self, ambient: AmbientConfig) -> Self {
        self.ambient = ambient;
        self
    }

    /// Check every parameter the integration depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = &self.numerical;
        let r = &self.release;

        positive("dt", n.dt)?;
        positive("time_max", n.time_max)?;
        if n.ncyl == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "ncyl",
                value: 0.0,
                reason: "at least one cylinder is required",
            });
        }
        self.entrainment()?;

        positive("g", self.constants.g)?;
        positive("b0", r.b0)?;
        positive("rho_oil_0", r.rho_oil_0)?;
        if r.z0.is_nan() || r.z0 >= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "z0",
                value: r.z0,
                reason: "release must be below the sea surface",
            });
        }
        if r.w0.is_nan() || r.w0 <= SINGULARITY_EPS {
            return Err(ConfigError::InvalidParameter {
                name: "w0",
                value: r.w0,
                reason: "release must rise (w0 > 0)",
            });
        }
        if !(0.0..=1.0).contains(&r.c0) {
            return Err(ConfigError::InvalidParameter {
                name: "c0",
                value: r.c0,
                reason: "oil fraction must lie in [0, 1]",
            });
        }
        for (name, value) in [
            ("x0", r.x0),
            ("y0", r.y0),
            ("u0", r.u0),
            ("v0", r.v0),
            ("T0", r.t0),
            ("S0", r.s0),
            ("T_oil_0", r.t_oil_0),
            ("c_T", self.constants.c_t),
            ("c_a", self.constants.c_a),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        Ok(())
    }

    /// Entrainment coefficients with the decoded combination mode.
    pub fn entrainment(&self) -> Result<EntrainmentCoefficients, ConfigError> {
        let p = &self.numerical.entrain_params;
        let mode = EntrainmentMode::from_flag(p.total_entrain)
            .ok_or(ConfigError::UnknownEntrainmentMode(p.total_entrain))?;
        Ok(EntrainmentCoefficients {
            a1: p.a1,
            a2: p.a2,
            a3: p.a3,
            mode,
        })
    }

    pub fn oil_density(&self) -> OilDensity {
        OilDensity::new(
            self.release.rho_oil_0,
            self.release.t_oil_0,
            self.constants.c_t,
        )
    }

    pub fn closure_constants(&self) -> ClosureConstants {
        ClosureConstants {
            g: self.constants.g,
            ca: self.constants.c_a,
        }
    }

    /// Step budget of each cylinder.
    pub fn tmax(&self) -> usize {
        self.numerical.tmax()
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        })
    }
}
