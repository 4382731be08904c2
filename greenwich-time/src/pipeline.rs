//! The TT → GAST/GMST/EE pipeline.
//!
//! For one TT instant:
//!
//! 1. Julian Date (TT) and Julian centuries since J2000.0
//! 2. ΔT for the calendar month, then UT1 and JD(UT1)
//! 3. Fukushima-Williams precession angles and mean obliquity
//! 4. IAU 2006A nutation Δψ, Δε
//! 5. NPB matrix from the angles with nutation added
//! 6. CIP X/Y, CIO locator s, equation of the origins
//! 7. ERA from JD(UT1), then GAST, GMST and EE
//!
//! Only steps 2 and 7 can fail for a valid instant; everything else is total
//! over finite input.

use crate::config::GreenwichConfig;
use crate::delta_t::DeltaTModel;
use crate::instant::{TtInstant, Ut1Instant};
use crate::julian::JulianDate;
use crate::sidereal::SiderealTimes;
use crate::TimeResult;
use greenwich_core::{
    CioSolution, FukushimaWilliamsAngles, NutationIAU2006A, NutationResult, NutationTables,
    RotationMatrix3,
};
use log::debug;

/// Every intermediate quantity of one evaluation. Angles in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct GreenwichReport {
    pub tt: TtInstant,
    pub ut1: Ut1Instant,
    pub jd_tt: JulianDate,
    pub jd_ut1: JulianDate,
    /// TT Julian centuries since J2000.0.
    pub jc: f64,
    /// TT − UT1, seconds.
    pub delta_t: f64,
    pub precession: FukushimaWilliamsAngles,
    pub nutation: NutationResult,
    pub npb: RotationMatrix3,
    pub cio: CioSolution,
    pub sidereal: SiderealTimes,
}

/// Nutation tables plus ΔT model; immutable after construction, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct GreenwichTime {
    nutation: NutationIAU2006A,
    delta_t: DeltaTModel,
}

impl GreenwichTime {
    pub fn new(tables: NutationTables, delta_t: DeltaTModel) -> Self {
        Self {
            nutation: NutationIAU2006A::new(tables),
            delta_t,
        }
    }

    pub fn with_bundled_tables() -> TimeResult<Self> {
        Ok(Self::new(NutationTables::bundled()?, DeltaTModel::default()))
    }

    pub fn from_config(config: &GreenwichConfig) -> TimeResult<Self> {
        let tables = config.load_tables()?;
        let delta_t = config.delta_t_model()?;
        Ok(Self::new(tables, delta_t))
    }

    pub fn delta_t_model(&self) -> &DeltaTModel {
        &self.delta_t
    }

    pub fn nutation_model(&self) -> &NutationIAU2006A {
        &self.nutation
    }

    pub fn compute(&self, tt: &TtInstant) -> TimeResult<GreenwichReport> {
        let jd_tt = tt.julian_date();
        let jc = jd_tt.centuries_since_j2000();
        debug!("TT {}: {}, JC = {}", tt, jd_tt, jc);

        let delta_t = self.delta_t.delta_t(tt.year_month())?;
        let ut1 = tt.to_ut1(delta_t)?;
        let jd_ut1 = jd_tt.add_seconds(-delta_t);
        debug!("ΔT = {} s, UT1 {}: {}", delta_t, ut1, jd_ut1);

        let precession = FukushimaWilliamsAngles::at(jc);
        debug!(
            "γ̄ = {}, φ̄ = {}, ψ̄ = {}, εA = {}",
            precession.gamb, precession.phib, precession.psib, precession.epsa
        );

        let nutation = self.nutation.compute(jc);
        debug!("Δψ = {}, Δε = {}", nutation.delta_psi, nutation.delta_eps);

        let npb = precession.npb_matrix(nutation.delta_psi, nutation.delta_eps);

        let cio = CioSolution::calculate(&npb, jc);
        debug!(
            "X = {}, Y = {}, s = {}, EO = {}",
            cio.cip.x, cio.cip.y, cio.s, cio.equation_of_origins
        );

        let sidereal = SiderealTimes::compute(&jd_ut1, cio.equation_of_origins, jc)?;
        debug!(
            "ERA = {}, GAST = {}, GMST = {}, EE = {}",
            sidereal.era, sidereal.gast, sidereal.gmst, sidereal.ee
        );

        Ok(GreenwichReport {
            tt: *tt,
            ut1,
            jd_tt,
            jd_ut1,
            jc,
            delta_t,
            precession,
            nutation,
            npb,
            cio,
            sidereal,
        })
    }
}
