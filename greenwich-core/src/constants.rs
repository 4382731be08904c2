pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Arcseconds in a full turn.
pub const CIRCULAR_ARCSECONDS: f64 = 1296000.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const NANOSECONDS_PER_SECOND_F64: f64 = 1_000_000_000.0;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

/// Nutation amplitudes are tabulated in units of 0.1 microarcsecond.
#[allow(clippy::excessive_precision)]
pub const TENTH_MICROARCSEC_TO_RAD: f64 = ARCSEC_TO_RAD / 1.0e7;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;
