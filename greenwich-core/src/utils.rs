//! Small conversions shared by both crates.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Converts a two-part Julian Date to Julian centuries from J2000.0.
///
/// The J2000.0 offset is taken from `jd1` before `jd2` is added, so a
/// day-number/fraction split keeps the fraction's precision.
///
/// ```
/// use greenwich_core::utils::jd_to_centuries;
///
/// assert_eq!(jd_to_centuries(2451544.5, 0.5), 0.0);
/// assert_eq!(jd_to_centuries(2451545.0, 36525.0), 1.0);
/// ```
#[inline]
pub fn jd_to_centuries(jd1: f64, jd2: f64) -> f64 {
    ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY
}
