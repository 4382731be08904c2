//! CIP (Celestial Intermediate Pole) coordinates.
//!
//! X and Y are the GCRS direction cosines of the CIP, read from the bottom
//! row of the bias-precession-nutation matrix. Present-day values are of
//! order 10⁻³ rad, dominated by precession since J2000.0.

use crate::matrix::RotationMatrix3;

/// Position of the Celestial Intermediate Pole in the GCRS, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CipCoordinates {
    pub x: f64,
    pub y: f64,
}

impl CipCoordinates {
    /// Takes X and Y from elements (2,0) and (2,1) of the NPB matrix.
    pub fn from_npb_matrix(npb_matrix: &RotationMatrix3) -> Self {
        let matrix = npb_matrix.elements();
        Self {
            x: matrix[2][0],
            y: matrix[2][1],
        }
    }
}
