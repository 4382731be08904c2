//! IAU 2006 precession.
//!
//! [`FukushimaWilliamsAngles`] evaluates the four bias-precession angles at
//! an epoch; [`fw2m`] composes them, with nutation added, into the
//! bias-precession-nutation matrix.

pub mod iau2006;

pub use iau2006::{fw2m, mean_obliquity, FukushimaWilliamsAngles};
