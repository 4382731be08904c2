//! Angle normalization onto a full positive turn.
//!
//! Every absolute angle the pipeline reports (ERA, GAST, GMST) lives in
//! [0, 2π). The equation of the equinoxes is a small signed residual and is
//! deliberately left unwrapped.
//!
//! # Algorithm Notes
//!
//! [`wrap_0_2pi`] uses `libm::fmod` (via [`crate::math::fmod`]) rather than
//! the `%` operator. `fmod` keeps the sign of the dividend:
//!
//! - `fmod(-1.0, 2π)` = `-1.0`
//!
//! so a negative remainder is lifted by one turn afterwards. That single
//! correction is the closed form of "add or subtract 2π until in range",
//! and it terminates for every finite input.

use crate::constants::TWOPI;
use crate::math::fmod;

/// Wraps an angle to [0, 2π) radians.
///
/// ```
/// use greenwich_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_0_2pi(-PI / 2.0);
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-10);
///
/// let y = wrap_0_2pi(5.0 * PI);
/// assert!((y - PI).abs() < 1e-10);
/// ```
///
/// A tiny negative input lifts to exactly 2π in floating point; that case
/// folds back to 0 so the upper bound stays open.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    let w = if w < 0.0 { w + TWOPI } else { w };
    if w >= TWOPI {
        0.0
    } else {
        w
    }
}
