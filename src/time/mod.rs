//! Time integration methods.

mod integrator;

pub use integrator::{
    ForwardEuler, Integrable, IntegratorInfo, Rk4, StandardIntegrator, TimeIntegrator,
};
