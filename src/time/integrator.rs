//! Trait-based time integrator abstraction.
//!
//! This module provides traits for time integration that enable:
//! - Generic integrators that work with any state type
//! - Compile-time dispatch through [`TimeIntegrator`] and runtime selection
//!   through [`StandardIntegrator`]
//!
//! # Example
//! ```
//! use plume_rs::solver::PlumeState;
//! use plume_rs::time::{Integrable, Rk4, TimeIntegrator};
//!
//! let mut q = PlumeState([1.0; 10]);
//!
//! // dq/dt = -q (exponential decay)
//! Rk4.step(&mut q, 0.01, 0.0, |state, _time| {
//!     let mut rhs = *state;
//!     rhs.scale(-1.0);
//!     rhs
//! });
//! assert!(q.mass() < 1.0);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Integrable Trait
// =============================================================================

/// Trait for state types that can be time-integrated.
///
/// This provides the vector space operations needed by explicit integrators:
/// - `scale`: Multiply by scalar (x <- c * x)
/// - `axpy`: Add scaled vector (x <- x + c * y)
pub trait Integrable: Clone + Send + Sized {
    /// Scale the state by a constant: self <- c * self
    fn scale(&mut self, c: f64);

    /// Add a scaled vector: self <- self + c * other
    fn axpy(&mut self, c: f64, other: &Self);

    /// Create a zero-initialized state with the same shape.
    ///
    /// Default implementation clones and scales by zero.
    fn zeros_like(&self) -> Self {
        let mut result = self.clone();
        result.scale(0.0);
        result
    }
}

// =============================================================================
// IntegratorInfo Trait (non-generic, dyn-compatible)
// =============================================================================

/// Non-generic information about a time integrator.
///
/// Separate from [`TimeIntegrator`] so it can be queried without naming a
/// state type.
pub trait IntegratorInfo: Send + Sync {
    /// Human-readable name for logging and run summaries.
    fn name(&self) -> &'static str;

    /// Order of accuracy.
    fn order(&self) -> usize;

    /// Number of right-hand side evaluations per step.
    fn n_stages(&self) -> usize;

    /// Times at which the RHS is evaluated relative to the current time.
    fn stage_times(&self, dt: f64) -> Vec<f64>;
}

// =============================================================================
// TimeIntegrator Trait
// =============================================================================

/// Trait for explicit one-step integrators.
///
/// The RHS closure receives a (possibly intermediate) state and a time and
/// returns the time derivative. It must accept any state handed to it, not
/// only the state at the start of the step.
pub trait TimeIntegrator<S: Integrable>: IntegratorInfo {
    /// Advance the state by one time step in place.
    ///
    /// # Arguments
    /// * `state` - State to advance (modified in place)
    /// * `dt` - Time step size
    /// * `t` - Current time
    /// * `rhs` - Function computing the RHS: f(state, time) -> time_derivative
    fn step<F>(&self, state: &mut S, dt: f64, t: f64, rhs: F)
    where
        F: Fn(&S, f64) -> S;

    /// Change of the state over one step, without modifying it.
    ///
    /// Zero for `dt == 0` whenever the RHS is finite.
    fn increment<F>(&self, state: &S, dt: f64, t: f64, rhs: F) -> S
    where
        F: Fn(&S, f64) -> S,
    {
        let mut next = state.clone();
        self.step(&mut next, dt, t, rhs);
        next.axpy(-1.0, state);
        next
    }
}

// =============================================================================
// Classical RK4
// =============================================================================

/// Classical fourth-order Runge-Kutta integrator.
///
/// ```text
/// k1 = L(u, t)
/// k2 = L(u + dt/2 * k1, t + dt/2)
/// k3 = L(u + dt/2 * k2, t + dt/2)
/// k4 = L(u + dt * k3, t + dt)
/// u_new = u + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Rk4;

impl IntegratorInfo for Rk4 {
    fn name(&self) -> &'static str {
        "rk4"
    }

    fn order(&self) -> usize {
        4
    }

    fn n_stages(&self) -> usize {
        4
    }

    fn stage_times(&self, dt: f64) -> Vec<f64> {
        vec![0.0, 0.5 * dt, 0.5 * dt, dt]
    }
}

impl<S: Integrable> TimeIntegrator<S> for Rk4 {
    fn step<F>(&self, state: &mut S, dt: f64, t: f64, rhs: F)
    where
        F: Fn(&S, f64) -> S,
    {
        let half = 0.5 * dt;

        let k1 = rhs(state, t);

        let mut u = state.clone();
        u.axpy(half, &k1);
        let k2 = rhs(&u, t + half);

        let mut u = state.clone();
        u.axpy(half, &k2);
        let k3 = rhs(&u, t + half);

        let mut u = state.clone();
        u.axpy(dt, &k3);
        let k4 = rhs(&u, t + dt);

        let w = dt / 6.0;
        state.axpy(w, &k1);
        state.axpy(2.0 * w, &k2);
        state.axpy(2.0 * w, &k3);
        state.axpy(w, &k4);
    }
}

// =============================================================================
// Forward Euler (for comparison/testing)
// =============================================================================

/// Forward Euler integrator (1st order).
///
/// ```text
/// u_new = u + dt * L(u, t)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl IntegratorInfo for ForwardEuler {
    fn name(&self) -> &'static str {
        "forward-euler"
    }

    fn order(&self) -> usize {
        1
    }

    fn n_stages(&self) -> usize {
        1
    }

    fn stage_times(&self, _dt: f64) -> Vec<f64> {
        vec![0.0]
    }
}

impl<S: Integrable> TimeIntegrator<S> for ForwardEuler {
    fn step<F>(&self, state: &mut S, dt: f64, t: f64, rhs: F)
    where
        F: Fn(&S, f64) -> S,
    {
        let l_u = rhs(state, t);
        state.axpy(dt, &l_u);
    }
}

// =============================================================================
// Standard Integrator Enum (Zero-Cost Dispatch)
// =============================================================================

/// Enum wrapper for built-in integrators, selectable from the namelists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StandardIntegrator {
    /// Classical RK4 (default)
    #[default]
    Rk4,
    /// Forward Euler (1st order, for testing)
    ForwardEuler,
}

impl IntegratorInfo for StandardIntegrator {
    fn name(&self) -> &'static str {
        match self {
            StandardIntegrator::Rk4 => Rk4.name(),
            StandardIntegrator::ForwardEuler => ForwardEuler.name(),
        }
    }

    fn order(&self) -> usize {
        match self {
            StandardIntegrator::Rk4 => 4,
            StandardIntegrator::ForwardEuler => 1,
        }
    }

    fn n_stages(&self) -> usize {
        match self {
            StandardIntegrator::Rk4 => 4,
            StandardIntegrator::ForwardEuler => 1,
        }
    }

    fn stage_times(&self, dt: f64) -> Vec<f64> {
        match self {
            StandardIntegrator::Rk4 => Rk4.stage_times(dt),
            StandardIntegrator::ForwardEuler => ForwardEuler.stage_times(dt),
        }
    }
}

impl<S: Integrable> TimeIntegrator<S> for StandardIntegrator {
    fn step<F>(&self, state: &mut S, dt: f64, t: f64, rhs: F)
    where
        F: Fn(&S, f64) -> S,
    {
        match self {
            StandardIntegrator::Rk4 => Rk4.step(state, dt, t, rhs),
            StandardIntegrator::ForwardEuler => ForwardEuler.step(state, dt, t, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Scalar(f64);

    impl Integrable for Scalar {
        fn scale(&mut self, c: f64) {
            self.0 *= c;
        }

        fn axpy(&mut self, c: f64, other: &Self) {
            self.0 += c * other.0;
        }
    }

    #[test]
    fn test_rk4_order() {
        // du/dt = u, u(0) = 1; exact u(t) = exp(t)
        let mut u = Scalar(1.0);
        let dt = 0.1;
        for i in 0..10 {
            Rk4.step(&mut u, dt, dt * i as f64, |s, _| *s);
        }
        let error = (u.0 - 1.0_f64.exp()).abs();
        assert!(error < 1e-5, "error {error}");
    }

    #[test]
    fn test_rk4_time_dependent_rhs() {
        // du/dt = 3t², u(0) = 0; RK4 is exact for cubics
        let mut u = Scalar(0.0);
        let dt = 0.25;
        for i in 0..4 {
            Rk4.step(&mut u, dt, dt * i as f64, |_, t| Scalar(3.0 * t * t));
        }
        assert!((u.0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_forward_euler_order() {
        // du/dt = -u, u(0) = 1
        let mut u = Scalar(1.0);
        let dt = 0.001;
        for i in 0..100 {
            ForwardEuler.step(&mut u, dt, dt * i as f64, |s, _| Scalar(-s.0));
        }
        assert!((u.0 - (-0.1_f64).exp()).abs() < 1e-3);
    }

    #[test]
    fn test_increment_leaves_state_untouched() {
        let u = Scalar(2.0);
        let du = Rk4.increment(&u, 0.5, 0.0, |_, _| Scalar(1.0));
        assert_eq!(u, Scalar(2.0));
        assert!((du.0 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_step_has_zero_increment() {
        let u = Scalar(3.7);
        let du = Rk4.increment(&u, 0.0, 0.0, |s, _| Scalar(s.0 * s.0 - 1.0));
        assert_eq!(du.0, 0.0);
    }

    #[test]
    fn test_standard_integrator_dispatch() {
        let mut a = Scalar(1.0);
        let mut b = Scalar(1.0);
        StandardIntegrator::Rk4.step(&mut a, 0.1, 0.0, |s, _| *s);
        Rk4.step(&mut b, 0.1, 0.0, |s, _| *s);
        assert_eq!(a, b);
        assert_eq!(StandardIntegrator::default(), StandardIntegrator::Rk4);
    }

    #[test]
    fn test_integrator_info() {
        assert_eq!(Rk4.name(), "rk4");
        assert_eq!(StandardIntegrator::ForwardEuler.name(), "forward-euler");
        assert_eq!(StandardIntegrator::Rk4.order(), 4);
        let times = Rk4.stage_times(0.2);
        assert_eq!(times, vec![0.0, 0.1, 0.1, 0.2]);
    }

    #[test]
    fn test_zeros_like() {
        assert_eq!(Scalar(5.0).zeros_like(), Scalar(0.0));
    }
}
