//! IAU 2006 precession in the Fukushima-Williams parameterization.
//!
//! Four angles orient the mean equator and equinox of date relative to the
//! GCRS, frame bias included:
//! - **gamb** (γ̄): GCRS right ascension of the intersection of the ecliptic
//!   of date with the GCRS equator
//! - **phib** (φ̄): obliquity of the ecliptic of date on the GCRS equator
//! - **psib** (ψ̄): precession angle plus bias in longitude along the
//!   ecliptic of date
//! - **epsa** (ε_A): mean obliquity of date
//!
//! Adding nutation to ψ̄ and ε_A and composing with [`fw2m`] gives the
//! bias-precession-nutation matrix.
//!
//! # References
//!
//! - IERS Conventions (2010), Chapter 5
//! - Capitaine, N., Wallace, P.T., & Chapront, J. (2003), A&A 412, 567-586
//! - Hilton, J.L., et al. (2006), Celest. Mech. Dyn. Astron. 94, 351-367

use crate::constants::ARCSEC_TO_RAD;
use crate::matrix::RotationMatrix3;

/// Fukushima-Williams angles at one epoch, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FukushimaWilliamsAngles {
    pub gamb: f64,
    pub phib: f64,
    pub psib: f64,
    pub epsa: f64,
}

impl FukushimaWilliamsAngles {
    /// Evaluates the IAU 2006 polynomials at `t` TT Julian centuries from
    /// J2000.0.
    ///
    /// ```
    /// use greenwich_core::precession::FukushimaWilliamsAngles;
    ///
    /// let fw = FukushimaWilliamsAngles::at(0.0);
    /// assert!((fw.epsa.to_degrees() - 23.4392794).abs() < 1e-6);
    /// ```
    pub fn at(t: f64) -> Self {
        let gamb = (-0.052928
            + (10.556378
                + (0.4932044 + (-0.00031238 + (-0.000002788 + (0.0000000260) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        let phib = (84381.412819
            + (-46.811016
                + (0.0511268 + (0.00053289 + (-0.000000440 + (-0.0000000176) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        let psib = (-0.041775
            + (5038.481484
                + (1.5584175 + (-0.00018522 + (-0.000026452 + (-0.0000000148) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        Self {
            gamb,
            phib,
            psib,
            epsa: mean_obliquity(t),
        }
    }

    /// Bias-precession-nutation matrix for nutation `dpsi`, `deps` (radians).
    pub fn npb_matrix(&self, dpsi: f64, deps: f64) -> RotationMatrix3 {
        fw2m(self.gamb, self.phib, self.psib + dpsi, self.epsa + deps)
    }
}

/// IAU 2006 mean obliquity of the ecliptic, radians.
///
/// 84381.406″ at J2000.0, falling by about 47″ per century.
pub fn mean_obliquity(t: f64) -> f64 {
    (84381.406
        + (-46.836769
            + (-0.0001831 + (0.00200340 + (-0.000000576 + (-0.0000000434) * t) * t) * t) * t)
            * t)
        * ARCSEC_TO_RAD
}

/// Builds the rotation matrix from Fukushima-Williams angles.
///
/// Starting from the identity, applies in order:
/// 1. Rz(gamb)
/// 2. Rx(phib)
/// 3. Rz(-psi)
/// 4. Rx(-eps)
///
/// Each step left-multiplies, so the result is
/// `Rx(-eps)·Rz(-psi)·Rx(phib)·Rz(gamb)`. Pass ψ̄ + Δψ and ε_A + Δε to
/// include nutation.
pub fn fw2m(gamb: f64, phib: f64, psi: f64, eps: f64) -> RotationMatrix3 {
    RotationMatrix3::identity()
        .rotated_z(gamb)
        .rotated_x(phib)
        .rotated_z(-psi)
        .rotated_x(-eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::assert_ulp_le;

    #[test]
    fn test_angles_at_j2000() {
        let fw = FukushimaWilliamsAngles::at(0.0);
        assert_ulp_le(fw.gamb, -0.052928 * ARCSEC_TO_RAD, 1, "gamb at t=0");
        assert_ulp_le(fw.phib, 84381.412819 * ARCSEC_TO_RAD, 1, "phib at t=0");
        assert_ulp_le(fw.psib, -0.041775 * ARCSEC_TO_RAD, 1, "psib at t=0");
        assert_ulp_le(fw.epsa, 84381.406 * ARCSEC_TO_RAD, 1, "epsa at t=0");
    }

    #[test]
    fn test_angles_reference_epoch_2016() {
        let fw = FukushimaWilliamsAngles::at(0.16469541409993155);
        assert!((fw.gamb - 8.237157086553656e-06).abs() < 1e-17);
        assert!((fw.phib - 0.40905526339492243).abs() < 1e-15);
        assert!((fw.psib - 0.004023058053929451).abs() < 1e-15);
        assert!((fw.epsa - 0.40905520305699283).abs() < 1e-15);
    }

    #[test]
    fn test_fw2m_is_rotation_across_epochs() {
        let mut t = -30.0;
        while t <= 30.0 {
            let fw = FukushimaWilliamsAngles::at(t);
            let m = fw2m(fw.gamb, fw.phib, fw.psib, fw.epsa);
            assert!(m.is_rotation_matrix(1e-12), "t={}", t);
            assert!((m.determinant() - 1.0).abs() < 1e-12);
            t += 1.5;
        }
    }

    #[test]
    fn test_fw2m_arbitrary_angles_orthogonal() {
        let m = fw2m(1.1, -2.3, 0.7, 4.0);
        let product = m.multiply(&m.transpose());
        assert!(product.max_difference(&RotationMatrix3::identity()) < 1e-14);
    }

    #[test]
    fn test_fw2m_order() {
        let (g, p, s, e) = (0.3, 0.4, 0.5, 0.6);
        let expected = RotationMatrix3::identity()
            .rotated_x(-e)
            .multiply(&RotationMatrix3::identity().rotated_z(-s))
            .multiply(&RotationMatrix3::identity().rotated_x(p))
            .multiply(&RotationMatrix3::identity().rotated_z(g));
        assert!(fw2m(g, p, s, e).max_difference(&expected) < 1e-15);
    }

    #[test]
    fn test_npb_matrix_with_zero_nutation() {
        let fw = FukushimaWilliamsAngles::at(0.5);
        let plain = fw2m(fw.gamb, fw.phib, fw.psib, fw.epsa);
        assert_eq!(fw.npb_matrix(0.0, 0.0), plain);
    }

    #[test]
    fn test_npb_matrix_reference_epoch_2016() {
        let fw = FukushimaWilliamsAngles::at(0.16469541409993155);
        let npb = fw.npb_matrix(-1.9823315657192618e-05, -4.692676250910643e-05);
        let m = npb.elements();
        assert!((m[2][0] - 0.0015920810193804592).abs() < 1e-15);
        assert!((m[2][1] - -4.9897810990240377e-05).abs() < 1e-15);
    }

    #[test]
    fn test_mean_obliquity_decreases() {
        assert!(mean_obliquity(1.0) < mean_obliquity(0.0));
    }
}
