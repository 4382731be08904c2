//! CIO locator `s` for the IAU 2006/2000A precession-nutation model.
//!
//! `s` positions the Celestial Intermediate Origin on the CIP equator. The
//! series gives `s + XY/2` as a fifth-degree polynomial in t whose
//! coefficients carry periodic terms:
//!
//! ```text
//! s = (w0 + (w1 + (w2 + (w3 + (w4 + w5·t)·t)·t)·t)·t)·AS2R − X·Y/2
//! wk = SP[k] + Σ Sk·sin(arg) + Ck·cos(arg)
//! ```
//!
//! with 33, 3, 25, 4 and 1 periodic terms for k = 0..4, each argument an
//! integer combination of (l, l′, F, D, Ω, Ve, E, pA). Coefficients are in
//! arcseconds.
//!
//! # References
//!
//! - Capitaine et al. (2003), A&A 400, 1145-1154
//! - IERS Conventions (2003), Chapter 5, Table 5.2c

use crate::constants::ARCSEC_TO_RAD;
use crate::nutation::IERS2003FundamentalArgs;

#[derive(Clone, Copy)]
struct SeriesTerm {
    coeffs: [i8; 8],
    sine: f64,
    cosine: f64,
}

const fn term(coeffs: [i8; 8], sine: f64, cosine: f64) -> SeriesTerm {
    SeriesTerm {
        coeffs,
        sine,
        cosine,
    }
}

/// Polynomial part, arcseconds.
const SP: [f64; 6] = [94.00e-6, 3808.65e-6, -122.68e-6, -72574.11e-6, 27.98e-6, 15.62e-6];

const S0: [SeriesTerm; 33] = [
    term([0, 0, 0, 0, 1, 0, 0, 0], -2640.73e-6, 0.39e-6),
    term([0, 0, 0, 0, 2, 0, 0, 0], -63.53e-6, 0.02e-6),
    term([0, 0, 2, -2, 3, 0, 0, 0], -11.75e-6, -0.01e-6),
    term([0, 0, 2, -2, 1, 0, 0, 0], -11.21e-6, -0.01e-6),
    term([0, 0, 2, -2, 2, 0, 0, 0], 4.57e-6, 0.00e-6),
    term([0, 0, 2, 0, 3, 0, 0, 0], -2.02e-6, 0.00e-6),
    term([0, 0, 2, 0, 1, 0, 0, 0], -1.98e-6, 0.00e-6),
    term([0, 0, 0, 0, 3, 0, 0, 0], 1.72e-6, 0.00e-6),
    term([0, 1, 0, 0, 1, 0, 0, 0], 1.41e-6, 0.01e-6),
    term([0, 1, 0, 0, -1, 0, 0, 0], 1.26e-6, 0.01e-6),
    term([1, 0, 0, 0, -1, 0, 0, 0], 0.63e-6, 0.00e-6),
    term([1, 0, 0, 0, 1, 0, 0, 0], 0.63e-6, 0.00e-6),
    term([0, 1, 2, -2, 3, 0, 0, 0], -0.46e-6, 0.00e-6),
    term([0, 1, 2, -2, 1, 0, 0, 0], -0.45e-6, 0.00e-6),
    term([0, 0, 4, -4, 4, 0, 0, 0], -0.36e-6, 0.00e-6),
    term([0, 0, 1, -1, 1, -8, 12, 0], 0.24e-6, 0.12e-6),
    term([0, 0, 2, 0, 0, 0, 0, 0], -0.32e-6, 0.00e-6),
    term([0, 0, 2, 0, 2, 0, 0, 0], -0.28e-6, 0.00e-6),
    term([1, 0, 2, 0, 3, 0, 0, 0], -0.27e-6, 0.00e-6),
    term([1, 0, 2, 0, 1, 0, 0, 0], -0.26e-6, 0.00e-6),
    term([0, 0, 2, -2, 0, 0, 0, 0], 0.21e-6, 0.00e-6),
    term([0, 1, -2, 2, -3, 0, 0, 0], -0.19e-6, 0.00e-6),
    term([0, 1, -2, 2, -1, 0, 0, 0], -0.18e-6, 0.00e-6),
    term([0, 0, 0, 0, 0, 8, -13, -1], 0.10e-6, -0.05e-6),
    term([0, 0, 0, 2, 0, 0, 0, 0], -0.15e-6, 0.00e-6),
    term([2, 0, -2, 0, -1, 0, 0, 0], 0.14e-6, 0.00e-6),
    term([0, 1, 2, -2, 2, 0, 0, 0], 0.14e-6, 0.00e-6),
    term([1, 0, 0, -2, 1, 0, 0, 0], -0.14e-6, 0.00e-6),
    term([1, 0, 0, -2, -1, 0, 0, 0], -0.14e-6, 0.00e-6),
    term([0, 0, 4, -2, 4, 0, 0, 0], -0.13e-6, 0.00e-6),
    term([0, 0, 2, -2, 4, 0, 0, 0], 0.11e-6, 0.00e-6),
    term([1, 0, -2, 0, -3, 0, 0, 0], -0.11e-6, 0.00e-6),
    term([1, 0, -2, 0, -1, 0, 0, 0], -0.11e-6, 0.00e-6),
];

const S1: [SeriesTerm; 3] = [
    term([0, 0, 0, 0, 2, 0, 0, 0], -0.07e-6, 3.57e-6),
    term([0, 0, 0, 0, 1, 0, 0, 0], 1.73e-6, -0.03e-6),
    term([0, 0, 2, -2, 3, 0, 0, 0], 0.00e-6, 0.48e-6),
];

const S2: [SeriesTerm; 25] = [
    term([0, 0, 0, 0, 1, 0, 0, 0], 743.52e-6, -0.17e-6),
    term([0, 0, 2, -2, 2, 0, 0, 0], 56.91e-6, 0.06e-6),
    term([0, 0, 2, 0, 2, 0, 0, 0], 9.84e-6, -0.01e-6),
    term([0, 0, 0, 0, 2, 0, 0, 0], -8.85e-6, 0.01e-6),
    term([0, 1, 0, 0, 0, 0, 0, 0], -6.38e-6, -0.05e-6),
    term([1, 0, 0, 0, 0, 0, 0, 0], -3.07e-6, 0.00e-6),
    term([0, 1, 2, -2, 2, 0, 0, 0], 2.23e-6, 0.00e-6),
    term([0, 0, 2, 0, 1, 0, 0, 0], 1.67e-6, 0.00e-6),
    term([1, 0, 2, 0, 2, 0, 0, 0], 1.30e-6, 0.00e-6),
    term([0, 1, -2, 2, -2, 0, 0, 0], 0.93e-6, 0.00e-6),
    term([1, 0, 0, -2, 0, 0, 0, 0], 0.68e-6, 0.00e-6),
    term([0, 0, 2, -2, 1, 0, 0, 0], -0.55e-6, 0.00e-6),
    term([1, 0, -2, 0, -2, 0, 0, 0], 0.53e-6, 0.00e-6),
    term([0, 0, 0, 2, 0, 0, 0, 0], -0.27e-6, 0.00e-6),
    term([1, 0, 0, 0, 1, 0, 0, 0], -0.27e-6, 0.00e-6),
    term([1, 0, -2, -2, -2, 0, 0, 0], -0.26e-6, 0.00e-6),
    term([1, 0, 0, 0, -1, 0, 0, 0], -0.25e-6, 0.00e-6),
    term([1, 0, 2, 0, 1, 0, 0, 0], 0.22e-6, 0.00e-6),
    term([2, 0, 0, -2, 0, 0, 0, 0], -0.21e-6, 0.00e-6),
    term([2, 0, -2, 0, -1, 0, 0, 0], 0.20e-6, 0.00e-6),
    term([0, 0, 2, 2, 2, 0, 0, 0], 0.17e-6, 0.00e-6),
    term([2, 0, 2, 0, 2, 0, 0, 0], 0.13e-6, 0.00e-6),
    term([2, 0, 0, 0, 0, 0, 0, 0], -0.13e-6, 0.00e-6),
    term([1, 0, 2, -2, 2, 0, 0, 0], -0.12e-6, 0.00e-6),
    term([0, 0, 2, 0, 0, 0, 0, 0], -0.11e-6, 0.00e-6),
];

const S3: [SeriesTerm; 4] = [
    term([0, 0, 0, 0, 1, 0, 0, 0], 0.30e-6, -23.42e-6),
    term([0, 0, 2, -2, 2, 0, 0, 0], -0.03e-6, -1.46e-6),
    term([0, 0, 2, 0, 2, 0, 0, 0], -0.01e-6, -0.25e-6),
    term([0, 0, 0, 0, 2, 0, 0, 0], 0.00e-6, 0.23e-6),
];

const S4: [SeriesTerm; 1] = [term([0, 0, 0, 0, 1, 0, 0, 0], -0.26e-6, -0.01e-6)];

#[inline]
fn sum_terms(w: &mut f64, terms: &[SeriesTerm], fa: &[f64; 8]) {
    for term in terms.iter().rev() {
        let mut arg = 0.0;
        for (coeff, item) in term.coeffs.iter().zip(fa) {
            arg += f64::from(*coeff) * item;
        }
        *w += term.sine * arg.sin() + term.cosine * arg.cos();
    }
}

fn fundamental_arguments(t: f64) -> [f64; 8] {
    [
        t.moon_mean_anomaly(),
        t.sun_mean_anomaly(),
        t.mean_argument_of_latitude(),
        t.mean_elongation(),
        t.moon_ascending_node_longitude(),
        t.venus_lng(),
        t.earth_lng(),
        t.general_precession(),
    ]
}

/// `s + XY/2` in radians.
fn series_s_plus_xy_half(t: f64) -> f64 {
    let fa = fundamental_arguments(t);

    let mut w0 = SP[0];
    sum_terms(&mut w0, &S0, &fa);

    let mut w1 = SP[1];
    sum_terms(&mut w1, &S1, &fa);

    let mut w2 = SP[2];
    sum_terms(&mut w2, &S2, &fa);

    let mut w3 = SP[3];
    sum_terms(&mut w3, &S3, &fa);

    let mut w4 = SP[4];
    sum_terms(&mut w4, &S4, &fa);

    let w5 = SP[5];

    (w0 + (w1 + (w2 + (w3 + (w4 + w5 * t) * t) * t) * t) * t) * ARCSEC_TO_RAD
}

/// CIO locator at one epoch.
///
/// ```
/// use greenwich_core::cio::CioLocator;
///
/// let locator = CioLocator::iau2006a(0.5);
/// let s = locator.calculate(1.0e-7, 2.0e-7);
/// assert!(s.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CioLocator {
    tt_centuries: f64,
}

impl CioLocator {
    /// `tt_centuries` is TT Julian centuries from J2000.0.
    pub fn iau2006a(tt_centuries: f64) -> Self {
        Self { tt_centuries }
    }

    /// `s` in radians for CIP coordinates `x`, `y` (radians).
    pub fn calculate(&self, x: f64, y: f64) -> f64 {
        series_s_plus_xy_half(self.tt_centuries) - x * y / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jd_to_centuries;

    #[test]
    fn test_table_sizes() {
        assert_eq!(S0.len() + S1.len() + S2.len() + S3.len() + S4.len(), 66);
    }

    #[test]
    fn test_cio_locator_at_j2000() {
        let s = CioLocator::iau2006a(0.0).calculate(0.0, 0.0);
        assert!((s - -9.756652246326891e-09).abs() < 1e-20);
    }

    #[test]
    fn test_cio_locator_reference_epoch_2016() {
        let s = CioLocator::iau2006a(0.16469541409993155)
            .calculate(0.0015920810193804592, -4.9897810990240377e-05);
        assert!((s - 3.8812715409724094e-08).abs() < 1e-19);
    }

    #[test]
    fn test_matches_sofa_s06() {
        // SOFA iauS06 at 2400000.5 + 53736.0 TT.
        let t = jd_to_centuries(2400000.5, 53736.0);
        let s = CioLocator::iau2006a(t)
            .calculate(0.5791308486706011000e-3, 0.4020579816732961219e-4);
        assert!((s - -0.1220032213076463117e-7).abs() < 1e-18);
    }

    #[test]
    fn test_xy_correction() {
        let locator = CioLocator::iau2006a(0.2);
        let s_zero = locator.calculate(0.0, 0.0);
        let s_offset = locator.calculate(2e-3, 3e-3);
        assert!((s_zero - s_offset - 3e-6).abs() < 1e-18);
    }

    #[test]
    fn test_total_far_from_j2000() {
        let s = CioLocator::iau2006a(-30.0).calculate(0.0, 0.0);
        assert!(s.is_finite());
    }
}
