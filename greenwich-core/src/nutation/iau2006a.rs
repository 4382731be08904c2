//! IAU 2006A nutation: the IAU 2000A series adjusted for IAU 2006 precession.
//!
//! ```text
//! Δψ_2006A = Δψ_2000A × (1 + 0.4697×10⁻⁶ + fJ2)
//! Δε_2006A = Δε_2000A × (1 + fJ2)
//!
//! where fJ2 = -2.7774×10⁻⁶ × t
//! ```
//!
//! The constant factor accounts for the change in the Earth's dynamical
//! ellipticity between the two precession models, and fJ2 for the secular
//! decrease of J2.
//!
//! Reference: IERS Conventions (2010), Chapter 5, Section 5.6.3

use super::iau2000a::NutationIAU2000A;
use super::tables::NutationTables;
use super::types::NutationResult;

/// IAU 2006A nutation calculator.
///
/// Owns its coefficient tables; share one instance across evaluations.
///
/// ```
/// use greenwich_core::nutation::{NutationIAU2006A, NutationTables};
///
/// let nutation = NutationIAU2006A::new(NutationTables::bundled().unwrap());
/// let result = nutation.compute(0.1646954140999);
/// println!("Δψ = {} rad, Δε = {} rad", result.delta_psi, result.delta_eps);
/// ```
#[derive(Debug, Clone)]
pub struct NutationIAU2006A {
    iau2000a: NutationIAU2000A,
}

impl NutationIAU2006A {
    pub fn new(tables: NutationTables) -> Self {
        Self {
            iau2000a: NutationIAU2000A::new(tables),
        }
    }

    pub fn tables(&self) -> &NutationTables {
        self.iau2000a.tables()
    }

    /// Computes Δψ and Δε at `t` TT Julian centuries from J2000.0.
    pub fn compute(&self, t: f64) -> NutationResult {
        let fj2 = -2.7774e-6 * t;

        let res = self.iau2000a.compute(t);
        let dp = res.delta_psi;
        let de = res.delta_eps;

        NutationResult {
            delta_psi: dp + dp * (0.4697e-6 + fj2),
            delta_eps: de + de * fj2,
        }
    }
}
