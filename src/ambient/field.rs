//! Bundle of depth interpolators sampled by the plume controller.

use super::{AmbientError, AmbientProfile, AmbientSample, CurrentRotation, DepthInterpolator};

/// Ambient currents, temperature, salinity and density as functions of depth.
///
/// Built once per run and shared read-only by every cylinder.
#[derive(Clone, Debug)]
pub struct AmbientField {
    ua: DepthInterpolator,
    va: DepthInterpolator,
    temperature: DepthInterpolator,
    salinity: DepthInterpolator,
    density: DepthInterpolator,
}

impl AmbientField {
    /// Build interpolators from a profile, rotating the currents first.
    pub fn from_profile(
        profile: &AmbientProfile,
        rotation: CurrentRotation,
    ) -> Result<Self, AmbientError> {
        // zip would silently truncate a short vo column
        if profile.vo.len() != profile.uo.len() {
            return Err(AmbientError::LengthMismatch {
                variable: "vo",
                expected: profile.uo.len(),
                found: profile.vo.len(),
            });
        }
        let (uo, vo): (Vec<f64>, Vec<f64>) = profile
            .uo
            .iter()
            .zip(&profile.vo)
            .map(|(&u, &v)| rotation.apply(u, v))
            .unzip();

        let z = &profile.depth;
        Ok(Self {
            ua: DepthInterpolator::new("uo", z, &uo)?,
            va: DepthInterpolator::new("vo", z, &vo)?,
            temperature: DepthInterpolator::new("thetao", z, &profile.thetao)?,
            salinity: DepthInterpolator::new("so", z, &profile.so)?,
            density: DepthInterpolator::new("rhoa", z, &profile.rhoa)?,
        })
    }

    /// Ambient properties at depth `z`.
    pub fn sample(&self, z: f64) -> Result<AmbientSample, AmbientError> {
        Ok(AmbientSample {
            ua: self.ua.eval(z)?,
            va: self.va.eval(z)?,
            temperature: self.temperature.eval(z)?,
            salinity: self.salinity.eval(z)?,
            density: self.density.eval(z)?,
        })
    }

    /// Depth range (z_min, z_max) where every variable is defined.
    pub fn depth_range(&self) -> (f64, f64) {
        self.ua.range()
    }

    pub fn contains(&self, z: f64) -> bool {
        self.ua.contains(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stratified() -> AmbientProfile {
        AmbientProfile::new(
            vec![0.0, -20.0, -100.0],
            vec![14.0, 10.0, 6.0],
            vec![34.0, 35.0, 35.2],
            vec![0.2, 0.1, 0.0],
            vec![0.0, 0.05, 0.0],
            vec![1025.5, 1026.8, 1027.6],
        )
        .unwrap()
    }

    #[test]
    fn test_sample_interpolates_every_variable() {
        let field = AmbientField::from_profile(&stratified(), CurrentRotation::none()).unwrap();
        let s = field.sample(-10.0).unwrap();
        assert!((s.ua - 0.15).abs() < 1e-12);
        assert!((s.va - 0.025).abs() < 1e-12);
        assert!((s.temperature - 12.0).abs() < 1e-12);
        assert!((s.salinity - 34.5).abs() < 1e-12);
        assert!((s.density - 1026.15).abs() < 1e-9);
        assert_eq!(field.depth_range(), (-100.0, 0.0));
    }

    #[test]
    fn test_rotation_applied_before_interpolation() {
        let field =
            AmbientField::from_profile(&stratified(), CurrentRotation::for_sea_area("NORTHSEA"))
                .unwrap();
        let s = field.sample(0.0).unwrap();
        assert!(s.ua.abs() < 1e-12);
        assert!((s.va - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_below_profile_reports_variable_and_depth() {
        let field = AmbientField::from_profile(&stratified(), CurrentRotation::none()).unwrap();
        match field.sample(-150.0) {
            Err(AmbientError::OutOfDomain {
                variable,
                depth,
                min,
                ..
            }) => {
                assert_eq!(variable, "uo");
                assert_eq!(depth, -150.0);
                assert_eq!(min, -100.0);
            }
            other => panic!("expected OutOfDomain, got {other:?}"),
        }
        assert!(!field.contains(-150.0));
    }
}
