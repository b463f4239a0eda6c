//! Strongly-typed domain types for safer APIs.
//!
//! # Example
//!
//! ```
//! use plume_rs::types::{Elevation, Orientation};
//!
//! let z = Elevation::new(-50.0);
//! assert_eq!(z.depth(), 50.0);
//!
//! // Vertical release: φ = 90°
//! let o = Orientation::from_velocity(0.0, 0.0, 1.0, 1.0);
//! assert!((o.phi - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

mod orientation;
mod physical;

pub use orientation::Orientation;
pub use physical::Elevation;
