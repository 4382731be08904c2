//! Earth Rotation Angle (IAU 2000).
//!
//! ```text
//! ERA = 2π (0.7790572732640 + 1.00273781191135448 Du),  Du = JD(UT1) − 2451545.0
//! ```
//!
//! The whole-turn part of `1.0027… Du` is dropped by taking the fractional
//! days of both halves of the two-part date separately, which keeps full
//! precision for dates far from J2000.0.

use crate::julian::JulianDate;
use crate::{TimeError, TimeResult};
use greenwich_core::angle::wrap_0_2pi;
use greenwich_core::constants::{J2000_JD, TWOPI};
use greenwich_core::math::fmod;
use greenwich_core::{AstroError, MathErrorKind};

/// ERA at J2000.0, in turns.
const ERA_AT_J2000: f64 = 0.7790572732640;

/// Excess of the sidereal rotation rate over one turn per UT1 day.
const ROTATION_RATE_EXCESS: f64 = 0.00273781191135448;

/// Largest |JD(UT1) − J2000| in days for which the angle is evaluated.
const MAX_DAYS_FROM_J2000: f64 = 1e12;

/// Earth Rotation Angle in radians, [0, 2π), from a UT1 Julian Date.
pub fn era00(jd_ut1: &JulianDate) -> TimeResult<f64> {
    let (jd1, jd2) = (jd_ut1.jd1(), jd_ut1.jd2());
    let (d1, d2) = if jd1 < jd2 { (jd1, jd2) } else { (jd2, jd1) };

    let t = d1 + (d2 - J2000_JD);

    if !t.is_finite() || t.abs() > MAX_DAYS_FROM_J2000 {
        return Err(TimeError::Core(AstroError::math_error(
            "era00",
            MathErrorKind::OutOfRange,
            &format!("{} days from J2000.0 is outside the supported range", t),
        )));
    }

    let f = fmod(d1, 1.0) + fmod(d2, 1.0);

    Ok(wrap_0_2pi(
        TWOPI * (f + ERA_AT_J2000 + ROTATION_RATE_EXCESS * t),
    ))
}
