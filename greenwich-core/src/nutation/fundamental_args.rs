//! Fundamental arguments for nutation and the CIO locator.
//!
//! Fundamental arguments are the slowly varying angles of the Earth-Moon-Sun
//! system and the planets. Every periodic term in the nutation series and in
//! the CIO locator series is a sine or cosine of an integer combination of
//! them.
//!
//! Two traits, implemented on `f64` holding TT Julian centuries from J2000.0:
//!
//! - [`IERS2003FundamentalArgs`]: IERS Conventions (2003) expressions for the
//!   Delaunay arguments, the planetary mean longitudes and the general
//!   precession.
//! - [`MHB2000FundamentalArgs`]: the Mathews-Herring-Buffett 2000 variants.
//!   The luni-solar nutation series takes l′ and D from here, and the
//!   planetary series uses the linear l, F, D, Ω and Neptune forms.
//!
//! # Reduction
//!
//! The Delaunay arguments are degree-4 polynomials in arcseconds reduced
//! modulo 1 296 000″ before conversion to radians; the linear forms are
//! reduced modulo 2π. Both use a floored modulo, so every result lies in
//! [0, 2π). The general precession [`IERS2003FundamentalArgs::general_precession`]
//! is the one exception and is returned unreduced.
//!
//! # References
//!
//! - IERS Conventions (2003), Chapter 5
//! - Mathews, Herring & Buffett 2002, J. Geophys. Res. 107(B4)

use crate::constants::{ARCSEC_TO_RAD, CIRCULAR_ARCSECONDS, TWOPI};
use crate::math::modulo;

#[inline]
fn reduce_arcsec(arcsec: f64) -> f64 {
    modulo(arcsec, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD
}

/// Fundamental arguments from the IERS Conventions (2003).
///
/// ```
/// use greenwich_core::nutation::IERS2003FundamentalArgs;
///
/// let t: f64 = 0.1;
/// let l = t.moon_mean_anomaly();
/// let om = t.moon_ascending_node_longitude();
/// assert!((0.0..std::f64::consts::TAU).contains(&l));
/// assert!((0.0..std::f64::consts::TAU).contains(&om));
/// ```
pub trait IERS2003FundamentalArgs {
    /// Mean anomaly of the Moon, l.
    fn moon_mean_anomaly(&self) -> f64;

    /// Mean anomaly of the Sun, l′.
    fn sun_mean_anomaly(&self) -> f64;

    /// Mean longitude of the Moon minus that of its node, F.
    fn mean_argument_of_latitude(&self) -> f64;

    /// Mean elongation of the Moon from the Sun, D.
    fn mean_elongation(&self) -> f64;

    /// Mean longitude of the Moon's ascending node, Ω.
    fn moon_ascending_node_longitude(&self) -> f64;

    fn mercury_lng(&self) -> f64;

    fn venus_lng(&self) -> f64;

    fn earth_lng(&self) -> f64;

    fn mars_lng(&self) -> f64;

    fn jupiter_lng(&self) -> f64;

    fn saturn_lng(&self) -> f64;

    fn uranus_lng(&self) -> f64;

    /// General accumulated precession in longitude, pA (not reduced).
    fn general_precession(&self) -> f64;
}

impl IERS2003FundamentalArgs for f64 {
    #[inline]
    fn moon_mean_anomaly(&self) -> f64 {
        reduce_arcsec(
            485868.249036
                + (1717915923.2178 + (31.8792 + (0.051635 + (-0.00024470) * self) * self) * self)
                    * self,
        )
    }

    #[inline]
    fn sun_mean_anomaly(&self) -> f64 {
        reduce_arcsec(
            1287104.793048
                + (129596581.0481 + (-0.5532 + (0.000136 + (-0.00001149) * self) * self) * self)
                    * self,
        )
    }

    #[inline]
    fn mean_argument_of_latitude(&self) -> f64 {
        reduce_arcsec(
            335779.526232
                + (1739527262.8478 + (-12.7512 + (-0.001037 + (0.00000417) * self) * self) * self)
                    * self,
        )
    }

    #[inline]
    fn mean_elongation(&self) -> f64 {
        reduce_arcsec(
            1072260.703692
                + (1602961601.2090 + (-6.3706 + (0.006593 + (-0.00003169) * self) * self) * self)
                    * self,
        )
    }

    #[inline]
    fn moon_ascending_node_longitude(&self) -> f64 {
        reduce_arcsec(
            450160.398036
                + (-6962890.5431 + (7.4722 + (0.007702 + (-0.00005939) * self) * self) * self)
                    * self,
        )
    }

    #[inline]
    fn mercury_lng(&self) -> f64 {
        modulo(4.402608842 + 2608.7903141574 * self, TWOPI)
    }

    #[inline]
    fn venus_lng(&self) -> f64 {
        modulo(3.176146697 + 1021.3285546211 * self, TWOPI)
    }

    #[inline]
    fn earth_lng(&self) -> f64 {
        modulo(1.753470314 + 628.3075849991 * self, TWOPI)
    }

    #[inline]
    fn mars_lng(&self) -> f64 {
        modulo(6.203480913 + 334.0612426700 * self, TWOPI)
    }

    #[inline]
    fn jupiter_lng(&self) -> f64 {
        modulo(0.599546497 + 52.9690962641 * self, TWOPI)
    }

    #[inline]
    fn saturn_lng(&self) -> f64 {
        modulo(0.874016757 + 21.3299104960 * self, TWOPI)
    }

    #[inline]
    fn uranus_lng(&self) -> f64 {
        modulo(5.481293872 + 7.4781598567 * self, TWOPI)
    }

    #[inline]
    fn general_precession(&self) -> f64 {
        (0.024381750 + 0.00000538691 * self) * self
    }
}

/// Fundamental arguments as used by the MHB2000 nutation series.
///
/// The `_mhb` methods are the arcsecond polynomials with MHB2000 constants;
/// the `_linear` methods are the truncated linear expressions the planetary
/// series is defined with.
///
/// ```
/// use greenwich_core::nutation::MHB2000FundamentalArgs;
///
/// let t: f64 = 0.1;
/// let lp = t.sun_mean_anomaly_mhb();
/// let ne = t.neptune_lng_mhb();
/// assert!(lp >= 0.0 && ne >= 0.0);
/// ```
pub trait MHB2000FundamentalArgs {
    /// Mean anomaly of the Sun, l′.
    fn sun_mean_anomaly_mhb(&self) -> f64;

    /// Mean elongation of the Moon from the Sun, D.
    fn mean_elongation_mhb(&self) -> f64;

    /// Mean anomaly of the Moon, l (linear form).
    fn moon_mean_anomaly_linear(&self) -> f64;

    /// Mean argument of latitude of the Moon, F (linear form).
    fn mean_argument_of_latitude_linear(&self) -> f64;

    /// Mean elongation of the Moon from the Sun, D (linear form).
    fn mean_elongation_linear(&self) -> f64;

    /// Mean longitude of the Moon's ascending node, Ω (linear form).
    fn moon_ascending_node_longitude_linear(&self) -> f64;

    fn neptune_lng_mhb(&self) -> f64;
}

impl MHB2000FundamentalArgs for f64 {
    #[inline]
    fn sun_mean_anomaly_mhb(&self) -> f64 {
        reduce_arcsec(
            1287104.79305
                + (129596581.0481 + (-0.5532 + (0.000136 + (-0.00001149) * self) * self) * self)
                    * self,
        )
    }

    #[inline]
    fn mean_elongation_mhb(&self) -> f64 {
        reduce_arcsec(
            1072260.70369
                + (1602961601.2090 + (-6.3706 + (0.006593 + (-0.00003169) * self) * self) * self)
                    * self,
        )
    }

    #[inline]
    fn moon_mean_anomaly_linear(&self) -> f64 {
        modulo(2.35555598 + 8328.6914269554 * self, TWOPI)
    }

    #[inline]
    fn mean_argument_of_latitude_linear(&self) -> f64 {
        modulo(1.627905234 + 8433.466158131 * self, TWOPI)
    }

    #[inline]
    fn mean_elongation_linear(&self) -> f64 {
        modulo(5.198466741 + 7771.3771468121 * self, TWOPI)
    }

    #[inline]
    fn moon_ascending_node_longitude_linear(&self) -> f64 {
        modulo(2.18243920 - 33.757045 * self, TWOPI)
    }

    #[inline]
    fn neptune_lng_mhb(&self) -> f64 {
        modulo(5.321159000 + 3.8127774000 * self, TWOPI)
    }
}
