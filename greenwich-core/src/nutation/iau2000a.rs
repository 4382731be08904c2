//! IAU 2000A nutation series.
//!
//! Evaluates the MHB2000 luni-solar and planetary series against a loaded
//! [`NutationTables`]. Each term is a sine/cosine of an integer combination
//! of fundamental arguments:
//!
//! ```text
//! Δψ = Σ (A + A′t)·sin(arg) + A″·cos(arg)      luni-solar
//! Δε = Σ (B + B′t)·cos(arg) + B″·sin(arg)
//!
//! Δψ = Σ S·sin(arg) + C·cos(arg)               planetary
//! Δε = Σ S′·sin(arg) + C′·cos(arg)
//! ```
//!
//! Rows are summed last to first, smallest amplitudes first. Amplitudes are
//! in 0.1 µas and the sums are converted to radians at the end.
//!
//! ## Reference
//!
//! - IERS Conventions (2003), Chapter 5
//! - Mathews, Herring & Buffett (2002), J. Geophys. Res. 107, B4

use super::fundamental_args::{IERS2003FundamentalArgs, MHB2000FundamentalArgs};
use super::tables::NutationTables;
use super::types::NutationResult;
use crate::constants::{TENTH_MICROARCSEC_TO_RAD, TWOPI};
use crate::math::modulo;

/// IAU 2000A nutation over a set of coefficient tables.
///
/// ```
/// use greenwich_core::nutation::{NutationIAU2000A, NutationTables};
///
/// let nut = NutationIAU2000A::new(NutationTables::bundled().unwrap());
/// let result = nut.compute(0.0);
/// assert!(result.delta_psi.abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct NutationIAU2000A {
    tables: NutationTables,
}

impl NutationIAU2000A {
    pub fn new(tables: NutationTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &NutationTables {
        &self.tables
    }

    /// Nutation in longitude and obliquity at `t` TT Julian centuries from
    /// J2000.0.
    pub fn compute(&self, t: f64) -> NutationResult {
        let lunisolar_args = [
            t.moon_mean_anomaly(),
            t.sun_mean_anomaly_mhb(),
            t.mean_argument_of_latitude(),
            t.mean_elongation_mhb(),
            t.moon_ascending_node_longitude(),
        ];
        let (delta_psi_ls, delta_eps_ls) = self.compute_lunisolar(&lunisolar_args, t);
        let (delta_psi_planetary, delta_eps_planetary) = self.compute_planetary(t);

        NutationResult {
            delta_psi: delta_psi_ls + delta_psi_planetary,
            delta_eps: delta_eps_ls + delta_eps_planetary,
        }
    }

    /// Luni-solar contribution in radians.
    ///
    /// `args` are \[l, l′, F, D, Ω\] in radians.
    pub fn compute_lunisolar(&self, args: &[f64; 5], t: f64) -> (f64, f64) {
        let mut dpsi = 0.0;
        let mut deps = 0.0;

        for term in self.tables.lunisolar().iter().rev() {
            let m = &term.multipliers;
            let arg = modulo(
                f64::from(m[0]) * args[0]
                    + f64::from(m[1]) * args[1]
                    + f64::from(m[2]) * args[2]
                    + f64::from(m[3]) * args[3]
                    + f64::from(m[4]) * args[4],
                TWOPI,
            );

            let (sarg, carg) = arg.sin_cos();

            dpsi += (term.psi_sin + term.psi_sin_t * t) * sarg + term.psi_cos * carg;
            deps += (term.eps_cos + term.eps_cos_t * t) * carg + term.eps_sin * sarg;
        }

        (dpsi * TENTH_MICROARCSEC_TO_RAD, deps * TENTH_MICROARCSEC_TO_RAD)
    }

    /// Planetary contribution in radians.
    pub fn compute_planetary(&self, t: f64) -> (f64, f64) {
        let al = t.moon_mean_anomaly_linear();
        let af = t.mean_argument_of_latitude_linear();
        let ad = t.mean_elongation_linear();
        let aom = t.moon_ascending_node_longitude_linear();
        let apa = t.general_precession();

        let alme = t.mercury_lng();
        let alve = t.venus_lng();
        let alea = t.earth_lng();
        let alma = t.mars_lng();
        let alju = t.jupiter_lng();
        let alsa = t.saturn_lng();
        let alur = t.uranus_lng();
        let alne = t.neptune_lng_mhb();

        let mut dpsi = 0.0;
        let mut deps = 0.0;

        for term in self.tables.planetary().iter().rev() {
            // m[1] (l′) does not enter the planetary argument.
            let m = &term.multipliers;
            let arg = modulo(
                f64::from(m[0]) * al
                    + f64::from(m[2]) * af
                    + f64::from(m[3]) * ad
                    + f64::from(m[4]) * aom
                    + f64::from(m[5]) * alme
                    + f64::from(m[6]) * alve
                    + f64::from(m[7]) * alea
                    + f64::from(m[8]) * alma
                    + f64::from(m[9]) * alju
                    + f64::from(m[10]) * alsa
                    + f64::from(m[11]) * alur
                    + f64::from(m[12]) * alne
                    + f64::from(m[13]) * apa,
                TWOPI,
            );

            let (sarg, carg) = arg.sin_cos();

            dpsi += term.psi_sin * sarg + term.psi_cos * carg;
            deps += term.eps_sin * sarg + term.eps_cos * carg;
        }

        (dpsi * TENTH_MICROARCSEC_TO_RAD, deps * TENTH_MICROARCSEC_TO_RAD)
    }
}
