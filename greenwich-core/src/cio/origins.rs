//! Equation of the origins.
//!
//! The EO is the arc on the CIP equator from the CIO to the equinox, so
//! that
//!
//! ```text
//! GAST = ERA - EO
//! ```
//!
//! It is dominated by accumulated precession in right ascension and is
//! about -0.21° in 2016.

use crate::matrix::RotationMatrix3;

/// Stateless; all methods are associated functions.
pub struct EquationOfOrigins;

impl EquationOfOrigins {
    /// EO in radians from the NPB matrix and the CIO locator `s`.
    ///
    /// Locates the equinox in the CIP frame and returns `s - atan2(q, p)`,
    /// or `s` when the equinox direction degenerates to `p = q = 0`.
    pub fn from_npb_and_locator(npb_matrix: &RotationMatrix3, s: f64) -> f64 {
        let matrix = npb_matrix.elements();

        let x = matrix[2][0];
        let ax = x / (1.0 + matrix[2][2]);
        let xs = 1.0 - ax * x;
        let ys = -ax * matrix[2][1];
        let zs = -x;

        let p = matrix[0][0] * xs + matrix[0][1] * ys + matrix[0][2] * zs;
        let q = matrix[1][0] * xs + matrix[1][1] * ys + matrix[1][2] * zs;

        if p != 0.0 || q != 0.0 {
            s - libm::atan2(q, p)
        } else {
            s
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precession::FukushimaWilliamsAngles;

    #[test]
    fn test_identity_matrix_gives_s() {
        let identity = RotationMatrix3::identity();
        assert_eq!(EquationOfOrigins::from_npb_and_locator(&identity, 0.0), 0.0);
        assert_eq!(EquationOfOrigins::from_npb_and_locator(&identity, 1e-8), 1e-8);
    }

    #[test]
    fn test_degenerate_direction_returns_s() {
        let zero = RotationMatrix3::from_array([[0.0; 3]; 3]);
        assert_eq!(EquationOfOrigins::from_npb_and_locator(&zero, 2e-8), 2e-8);
    }

    #[test]
    fn test_pure_z_rotation() {
        let m = RotationMatrix3::identity().rotated_z(1e-6);
        let eo = EquationOfOrigins::from_npb_and_locator(&m, 0.0);
        assert!((eo - 1e-6).abs() < 1e-18);
    }

    #[test]
    fn test_reference_epoch_2016() {
        let fw = FukushimaWilliamsAngles::at(0.16469541409993155);
        let m = fw.npb_matrix(-1.9823315657192618e-05, -4.692676250910643e-05);
        let eo = EquationOfOrigins::from_npb_and_locator(&m, 3.8812715409724094e-08);
        assert!((eo - -0.0036647180537675754).abs() < 1e-13);
    }
}
