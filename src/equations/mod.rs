//! Physical equations of the plume model.
//!
//! - [`EquationOfState`] / [`SeawaterEos`]: density of the water fraction and
//!   of ambient water
//! - [`OilDensity`] and [`mixture_density`]: density of the oil phase and of
//!   the oil/water mixture
//! - [`PlumeEquations`]: the ODE right-hand side advanced by the integrator

mod equation_of_state;
mod mixture;
mod plume;

pub use equation_of_state::{
    EquationOfState, LinearEquationOfState, REFERENCE_PRESSURE_DBAR, SeawaterEos,
};
pub use mixture::{OilDensity, mixture_density};
pub use plume::{FrozenForcing, PlumeEquations};
