use greenwich_core::angle::wrap_0_2pi;
use greenwich_core::constants::ARCSEC_TO_RAD;

/// Greenwich Mean Sidereal Time (IAU 2006) in radians, [0, 2π).
///
/// Adds the IAU 2006 precession-rate polynomial in `tt_centuries` to the
/// rotation angle `angle`. For the conventional GMST the angle is the ERA.
pub fn gmst06(angle: f64, tt_centuries: f64) -> f64 {
    let t = tt_centuries;

    let polynomial_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * (-0.0000000368)))));

    wrap_0_2pi(angle + polynomial_arcsec * ARCSEC_TO_RAD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidereal::era00;
    use crate::JulianDate;
    use greenwich_core::constants::TWOPI;
    use greenwich_core::utils::jd_to_centuries;

    #[test]
    fn test_gmst_reference_2016() {
        let gmst = gmst06(4.697142823447599, 0.16469541409993155);
        assert!((gmst - 4.700825726489213).abs() < 1e-12, "{}", gmst);
    }

    #[test]
    fn test_matches_sofa_gmst06() {
        // SOFA iauGmst06 with UT1 = TT = 2400000.5 + 53736.0.
        let era = era00(&JulianDate::new(2400000.5, 53736.0)).unwrap();
        let gmst = gmst06(era, jd_to_centuries(2400000.5, 53736.0));
        assert!((gmst - 1.754174971870091203).abs() < 1e-12, "{}", gmst);
    }

    #[test]
    fn test_constant_term_at_j2000() {
        let gmst = gmst06(1.0, 0.0);
        assert!((gmst - (1.0 + 0.014506 * ARCSEC_TO_RAD)).abs() < 1e-15);
    }

    #[test]
    fn test_result_is_wrapped() {
        let gmst = gmst06(TWOPI - 1e-9, 0.5);
        assert!((0.0..TWOPI).contains(&gmst));
        assert!(gmst < 0.02);
    }

    #[test]
    fn test_precession_rate() {
        let a = gmst06(1.0, 0.0);
        let b = gmst06(1.0, 0.01);
        let rate_arcsec_per_century = (b - a) / ARCSEC_TO_RAD / 0.01;
        assert!((rate_arcsec_per_century - 4612.17).abs() < 0.1);
    }
}
