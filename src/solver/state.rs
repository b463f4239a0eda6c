//! The integrated plume state of one cylinder.
//!
//! Ten conserved-like quantities in a fixed order:
//!
//! ```text
//! [ m, m·u, m·v, m·w, m·c, x, y, z, m·T, m·S ]
//! ```
//!
//! Mass, momentum, oil mass, heat and salt content are extensive and grow
//! by entrainment; `x, y, z` is the cylinder centre.

use std::ops::Index;

use crate::time::Integrable;

/// Number of integrated variables.
pub const N_STATE: usize = 10;

/// Plume state vector of one cylinder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlumeState(pub [f64; N_STATE]);

/// Specific (per unit mass) view of a [`PlumeState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlumePrimitives {
    pub m: f64,
    pub u: f64,
    pub v: f64,
    pub w: f64,
    /// Oil mass fraction
    pub c: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub temperature: f64,
    pub salinity: f64,
}

impl PlumeState {
    pub const MASS: usize = 0;
    pub const MOM_U: usize = 1;
    pub const MOM_V: usize = 2;
    pub const MOM_W: usize = 3;
    pub const OIL: usize = 4;
    pub const X: usize = 5;
    pub const Y: usize = 6;
    pub const Z: usize = 7;
    pub const HEAT: usize = 8;
    pub const SALT: usize = 9;

    /// All-zero state (also the zero increment).
    pub fn zero() -> Self {
        Self([0.0; N_STATE])
    }

    /// Build the state from specific quantities.
    pub fn from_primitives(p: &PlumePrimitives) -> Self {
        let m = p.m;
        Self([
            m,
            m * p.u,
            m * p.v,
            m * p.w,
            m * p.c,
            p.x,
            p.y,
            p.z,
            m * p.temperature,
            m * p.salinity,
        ])
    }

    /// Divide extensive quantities by the mass.
    ///
    /// Callers check [`PlumeState::is_physical`] first; a zero mass yields
    /// non-finite primitives.
    pub fn primitives(&self) -> PlumePrimitives {
        let q = &self.0;
        let m = q[Self::MASS];
        PlumePrimitives {
            m,
            u: q[Self::MOM_U] / m,
            v: q[Self::MOM_V] / m,
            w: q[Self::MOM_W] / m,
            c: q[Self::OIL] / m,
            x: q[Self::X],
            y: q[Self::Y],
            z: q[Self::Z],
            temperature: q[Self::HEAT] / m,
            salinity: q[Self::SALT] / m,
        }
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.0[Self::MASS]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0[Self::Z]
    }

    /// Cylinder centre `(x, y, z)`.
    #[inline]
    pub fn position(&self) -> [f64; 3] {
        [self.0[Self::X], self.0[Self::Y], self.0[Self::Z]]
    }

    /// Euclidean distance between the centres of two states.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let a = self.position();
        let b = other.position();
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
    }

    /// Positive finite mass and finite components throughout.
    pub fn is_physical(&self) -> bool {
        self.mass() > 0.0 && self.0.iter().all(|q| q.is_finite())
    }
}

impl Index<usize> for PlumeState {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl Integrable for PlumeState {
    fn scale(&mut self, c: f64) {
        for q in &mut self.0 {
            *q *= c;
        }
    }

    fn axpy(&mut self, c: f64, other: &Self) {
        for (q, o) in self.0.iter_mut().zip(other.0.iter()) {
            *q += c * o;
        }
    }

    fn zeros_like(&self) -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlumePrimitives {
        PlumePrimitives {
            m: 2.0,
            u: 0.1,
            v: -0.2,
            w: 0.5,
            c: 0.8,
            x: 1.0,
            y: 2.0,
            z: -50.0,
            temperature: 12.0,
            salinity: 35.0,
        }
    }

    #[test]
    fn test_primitive_layout() {
        let q = PlumeState::from_primitives(&sample());
        assert_eq!(q[PlumeState::MASS], 2.0);
        assert_eq!(q[PlumeState::MOM_W], 1.0);
        assert_eq!(q[PlumeState::OIL], 1.6);
        assert_eq!(q[PlumeState::Z], -50.0);
        assert_eq!(q[PlumeState::SALT], 70.0);

        let p = q.primitives();
        assert!((p.v + 0.2).abs() < 1e-15);
        assert!((p.temperature - 12.0).abs() < 1e-15);
    }

    #[test]
    fn test_axpy_and_scale() {
        let mut q = PlumeState::from_primitives(&sample());
        let dq = PlumeState([1.0; N_STATE]);
        q.axpy(0.5, &dq);
        assert_eq!(q.mass(), 2.5);
        assert_eq!(q.z(), -49.5);

        q.scale(0.0);
        assert_eq!(q, PlumeState::zero());
    }

    #[test]
    fn test_distance() {
        let a = PlumeState::from_primitives(&sample());
        let mut b = a;
        b.0[PlumeState::X] += 3.0;
        b.0[PlumeState::Z] += 4.0;
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_physical_check() {
        let q = PlumeState::from_primitives(&sample());
        assert!(q.is_physical());

        let mut bad = q;
        bad.0[PlumeState::MASS] = 0.0;
        assert!(!bad.is_physical());

        let mut nan = q;
        nan.0[PlumeState::Y] = f64::NAN;
        assert!(!nan.is_physical());
    }
}
