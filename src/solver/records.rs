//! Rows of the two output time series of a cylinder.

/// Column names of the plume state series.
pub const STATE_HEADER: [&str; 13] = [
    "Time [min]",
    "Mass",
    "U",
    "V",
    "W",
    "C",
    "Density",
    "A_Density",
    "Tkness",
    "Radius",
    "x",
    "y",
    "z",
];

/// Column names of the diagnostic parameter series.
pub const PARAMETER_HEADER: [&str; 11] = [
    "Time [min]",
    "alpha",
    "va proj",
    "v_0",
    "rhoa",
    "Qs",
    "Qf",
    "Qe",
    "v_phi",
    "g1",
    "Fd2",
];

/// One row of the plume state series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateRecord {
    /// Minutes since the start of the run
    pub time_min: f64,
    pub mass: f64,
    pub u: f64,
    pub v: f64,
    pub w: f64,
    /// Oil mass fraction
    pub c: f64,
    /// Mixture density (kg/m³)
    pub density: f64,
    /// Ambient density (kg/m³)
    pub ambient_density: f64,
    /// Cylinder thickness h (m)
    pub thickness: f64,
    /// Cylinder radius b (m)
    pub radius: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl StateRecord {
    /// Values in [`STATE_HEADER`] order.
    pub fn to_row(&self) -> [f64; 13] {
        [
            self.time_min,
            self.mass,
            self.u,
            self.v,
            self.w,
            self.c,
            self.density,
            self.ambient_density,
            self.thickness,
            self.radius,
            self.x,
            self.y,
            self.z,
        ]
    }

    /// Same row stamped with another time.
    pub fn at_time(mut self, time_min: f64) -> Self {
        self.time_min = time_min;
        self
    }
}

/// One row of the diagnostic parameter series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRecord {
    pub time_min: f64,
    /// Shear entrainment coefficient α
    pub alpha: f64,
    /// Ambient current projected on the plume velocity (m/s)
    pub projected_velocity: f64,
    /// Plume speed |V| (m/s)
    pub speed: f64,
    pub ambient_density: f64,
    pub qs: f64,
    pub qf: f64,
    pub qe: f64,
    /// Elevation angle φ (rad)
    pub phi: f64,
    /// Reduced gravity (m/s²)
    pub g1: f64,
    /// Densimetric Froude proxy |V|²/(2·g'·b)
    pub fd2: f64,
}

impl ParameterRecord {
    /// Values in [`PARAMETER_HEADER`] order.
    pub fn to_row(&self) -> [f64; 11] {
        [
            self.time_min,
            self.alpha,
            self.projected_velocity,
            self.speed,
            self.ambient_density,
            self.qs,
            self.qf,
            self.qe,
            self.phi,
            self.g1,
            self.fd2,
        ]
    }

    pub fn at_time(mut self, time_min: f64) -> Self {
        self.time_min = time_min;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_widths_match_headers() {
        let s = StateRecord {
            time_min: 0.5,
            mass: 1.0,
            u: 2.0,
            v: 3.0,
            w: 4.0,
            c: 5.0,
            density: 6.0,
            ambient_density: 7.0,
            thickness: 8.0,
            radius: 9.0,
            x: 10.0,
            y: 11.0,
            z: 12.0,
        };
        let row = s.to_row();
        assert_eq!(row.len(), STATE_HEADER.len());
        assert_eq!(row[3], 3.0);
        assert_eq!(row[12], 12.0);
        assert_eq!(s.at_time(2.0).time_min, 2.0);
    }

    #[test]
    fn test_parameter_order() {
        let p = ParameterRecord {
            time_min: 0.0,
            alpha: 0.1,
            projected_velocity: 0.2,
            speed: 0.3,
            ambient_density: 1025.0,
            qs: 1.0,
            qf: 2.0,
            qe: 3.0,
            phi: 1.5,
            g1: 1.7,
            fd2: 0.01,
        };
        let row = p.to_row();
        assert_eq!(row.len(), PARAMETER_HEADER.len());
        assert_eq!(row[PARAMETER_HEADER.iter().position(|h| *h == "Qe").unwrap()], 3.0);
        assert_eq!(row[PARAMETER_HEADER.iter().position(|h| *h == "g1").unwrap()], 1.7);
    }
}
