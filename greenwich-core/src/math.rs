#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Floored modulo for a positive period: the result lies in `[0, y)`.
///
/// `fmod` keeps the sign of `x`; fundamental arguments and series phases
/// are reduced onto the positive turn instead.
#[inline]
pub fn modulo(x: f64, y: f64) -> f64 {
    let r = fmod(x, y);
    let r = if r < 0.0 { r + y } else { r };
    if r >= y {
        0.0
    } else {
        r
    }
}
