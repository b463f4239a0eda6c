//! Vertical ocean profile at the spill location.

use super::AmbientError;
use crate::equations::{EquationOfState, REFERENCE_PRESSURE_DBAR};

/// Column-oriented ambient profile.
///
/// Column names follow the ocean model output the profiles are extracted
/// from (`thetao`, `so`, `uo`, `vo`); `rhoa` is the ambient density.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientProfile {
    /// z of each level, negative below the surface (m)
    pub depth: Vec<f64>,
    pub thetao: Vec<f64>,
    pub so: Vec<f64>,
    pub uo: Vec<f64>,
    pub vo: Vec<f64>,
    pub rhoa: Vec<f64>,
}

impl AmbientProfile {
    /// Profile from complete columns.
    ///
    /// Only lengths are checked here; ordering and finiteness are checked
    /// when the interpolators are built.
    pub fn new(
        depth: Vec<f64>,
        thetao: Vec<f64>,
        so: Vec<f64>,
        uo: Vec<f64>,
        vo: Vec<f64>,
        rhoa: Vec<f64>,
    ) -> Result<Self, AmbientError> {
        let profile = Self {
            depth,
            thetao,
            so,
            uo,
            vo,
            rhoa,
        };
        profile.check_lengths()?;
        Ok(profile)
    }

    /// Profile whose density is derived from temperature and salinity with
    /// UNESCO EOS-80 at the reference pressure.
    pub fn with_derived_density(
        depth: Vec<f64>,
        thetao: Vec<f64>,
        so: Vec<f64>,
        uo: Vec<f64>,
        vo: Vec<f64>,
    ) -> Result<Self, AmbientError> {
        if so.len() != thetao.len() {
            return Err(AmbientError::LengthMismatch {
                variable: "so",
                expected: thetao.len(),
                found: so.len(),
            });
        }
        let eos = EquationOfState::with_pressure();
        let rhoa = thetao
            .iter()
            .zip(&so)
            .map(|(&t, &s)| eos.density(t, s, REFERENCE_PRESSURE_DBAR))
            .collect();
        Self::new(depth, thetao, so, uo, vo, rhoa)
    }

    /// Depth-independent profile spanning `[bottom, 0]`.
    pub fn uniform(bottom: f64, thetao: f64, so: f64, uo: f64, vo: f64, rhoa: f64) -> Self {
        let n = 2;
        Self {
            depth: vec![0.0, bottom],
            thetao: vec![thetao; n],
            so: vec![so; n],
            uo: vec![uo; n],
            vo: vec![vo; n],
            rhoa: vec![rhoa; n],
        }
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// Named columns other than depth.
    fn columns(&self) -> [(&'static str, &[f64]); 5] {
        [
            ("uo", &self.uo),
            ("vo", &self.vo),
            ("thetao", &self.thetao),
            ("so", &self.so),
            ("rhoa", &self.rhoa),
        ]
    }

    fn check_lengths(&self) -> Result<(), AmbientError> {
        let expected = self.depth.len();
        for (variable, column) in self.columns() {
            if column.len() != expected {
                return Err(AmbientError::LengthMismatch {
                    variable,
                    expected,
                    found: column.len(),
                });
            }
        }
        Ok(())
    }
}
