//! Greenwich sidereal times.
//!
//! | Quantity | Definition |
//! |----------|------------|
//! | ERA  | Earth Rotation Angle, a linear function of UT1 |
//! | GAST | `ERA − EO` |
//! | GMST | `ERA + ` IAU 2006 polynomial in TT centuries |
//! | EE   | `GAST − GMST` |
//!
//! All angles are radians. ERA, GAST and GMST lie in [0, 2π); EE is a small
//! signed difference of order 10⁻⁵ rad.

mod era;
mod gast;
mod gmst;

pub use era::era00;
pub use gast::{equation_of_equinoxes, gast};
pub use gmst::gmst06;

use crate::julian::JulianDate;
use crate::TimeResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiderealTimes {
    pub era: f64,
    /// Equation of the origins the GAST was taken from.
    pub eo: f64,
    pub gast: f64,
    pub gmst: f64,
    pub ee: f64,
}

impl SiderealTimes {
    /// Sidereal times for a UT1 date, given the equation of the origins and
    /// TT centuries since J2000.0 for the same instant.
    pub fn compute(jd_ut1: &JulianDate, eo: f64, tt_centuries: f64) -> TimeResult<Self> {
        let era = era00(jd_ut1)?;
        let gast = gast(era, eo);
        let gmst = gmst06(era, tt_centuries);

        Ok(Self {
            era,
            eo,
            gast,
            gmst,
            ee: equation_of_equinoxes(gast, gmst),
        })
    }
}
