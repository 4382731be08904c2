//! Celestial Intermediate Origin quantities.
//!
//! - [`CipCoordinates`]: X/Y of the Celestial Intermediate Pole
//! - [`CioLocator`]: the locator `s` placing the origin on the CIP equator
//! - [`EquationOfOrigins`]: the arc from the CIO to the equinox
//! - [`CioSolution`]: all three for one epoch
//!
//! ```
//! use greenwich_core::cio::CioSolution;
//! use greenwich_core::precession::FukushimaWilliamsAngles;
//!
//! let t = 0.1646954140999;
//! let npb = FukushimaWilliamsAngles::at(t).npb_matrix(0.0, 0.0);
//! let solution = CioSolution::calculate(&npb, t);
//! assert!(solution.equation_of_origins < 0.0);
//! ```

pub mod coordinates;
pub mod locator;
pub mod origins;

pub use coordinates::CipCoordinates;
pub use locator::CioLocator;
pub use origins::EquationOfOrigins;

use crate::matrix::RotationMatrix3;

/// CIP coordinates, CIO locator and equation of the origins at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CioSolution {
    pub cip: CipCoordinates,
    /// CIO locator, radians.
    pub s: f64,
    /// Equation of the origins, radians.
    pub equation_of_origins: f64,
}

impl CioSolution {
    /// Computes all CIO quantities from an NPB matrix and TT centuries since
    /// J2000.0.
    pub fn calculate(npb_matrix: &RotationMatrix3, tt_centuries: f64) -> Self {
        let cip = CipCoordinates::from_npb_matrix(npb_matrix);
        let s = CioLocator::iau2006a(tt_centuries).calculate(cip.x, cip.y);
        let equation_of_origins = EquationOfOrigins::from_npb_and_locator(npb_matrix, s);

        Self {
            cip,
            s,
            equation_of_origins,
        }
    }
}
