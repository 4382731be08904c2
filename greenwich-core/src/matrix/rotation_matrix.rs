//! 3x3 rotation matrices for the bias-precession-nutation chain.
//!
//! A rotation matrix is a 3x3 orthogonal matrix with determinant +1. The
//! sidereal time pipeline needs exactly one of them: the
//! bias-precession-nutation (NPB) matrix built from the four
//! Fukushima-Williams angles. Its third row holds the CIP direction, and its
//! first two rows locate the equinox for the equation of the origins.
//!
//! # Rotation Conventions
//!
//! Rotations follow the frame-rotation ("passive") convention: a positive
//! rotation about Z by 90 degrees takes the vector `[1, 0, 0]` to
//! `[0, -1, 0]`.
//!
//! Each elementary rotation is applied on the left of the existing matrix
//! (`R_axis(angle) * self`), so the first rotation applied is the one that
//! acts first on a vector. The elementary steps are crate-internal; the only
//! public way to compose them is
//! [`fw2m`](crate::precession::iau2006::fw2m), whose order is fixed.
//!
//! # Storage Layout
//!
//! Elements are stored row-major as `[[f64; 3]; 3]`;
//! `matrix.elements()[i][j]` is row `i`, column `j`.
//!
//! ```
//! use greenwich_core::RotationMatrix3;
//!
//! let m = RotationMatrix3::identity();
//! let inverse = m.transpose();
//! assert_eq!(m.max_difference(&inverse), 0.0);
//! ```

use std::fmt;

/// A 3x3 rotation matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from row-major elements without validating it.
    ///
    /// Use [`is_rotation_matrix`](Self::is_rotation_matrix) to check if needed.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Returns `Rx(phi) * self`.
    ///
    /// ```text
    /// Rx(phi) = | 1      0        0     |
    ///           | 0   +cos(phi) +sin(phi) |
    ///           | 0   -sin(phi) +cos(phi) |
    /// ```
    ///
    /// Only rows 1 and 2 change.
    pub(crate) fn rotated_x(&self, phi: f64) -> Self {
        let (s, c) = phi.sin_cos();
        let m = &self.elements;

        Self::from_array([
            m[0],
            [
                c * m[1][0] + s * m[2][0],
                c * m[1][1] + s * m[2][1],
                c * m[1][2] + s * m[2][2],
            ],
            [
                -s * m[1][0] + c * m[2][0],
                -s * m[1][1] + c * m[2][1],
                -s * m[1][2] + c * m[2][2],
            ],
        ])
    }

    /// Returns `Rz(psi) * self`.
    ///
    /// ```text
    /// Rz(psi) = | +cos(psi) +sin(psi) 0 |
    ///           | -sin(psi) +cos(psi) 0 |
    ///           |     0         0     1 |
    /// ```
    ///
    /// Only rows 0 and 1 change.
    pub(crate) fn rotated_z(&self, psi: f64) -> Self {
        let (s, c) = psi.sin_cos();
        let m = &self.elements;

        Self::from_array([
            [
                c * m[0][0] + s * m[1][0],
                c * m[0][1] + s * m[1][1],
                c * m[0][2] + s * m[1][2],
            ],
            [
                -s * m[0][0] + c * m[1][0],
                -s * m[0][1] + c * m[1][1],
                -s * m[0][2] + c * m[1][2],
            ],
            m[2],
        ])
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Checks `det = +1` and `M * Mᵀ = I`, each within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }

        let product = self.multiply(&self.transpose());
        product.max_difference(&Self::identity()) <= tolerance
    }

    /// Largest absolute element-wise difference.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.elements.iter().enumerate() {
            let open = if i == 0 { "[[" } else { " [" };
            let close = if i == 2 { "]]" } else { "]" };
            write!(
                f,
                "{}{:>22.15e} {:>22.15e} {:>22.15e}{}",
                open, row[0], row[1], row[2], close
            )?;
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
