//! Nutation: the short-period oscillation of Earth's rotation axis.
//!
//! Nutation is superimposed on precession and arises from lunar, solar and
//! planetary torques on the equatorial bulge. The principal term has the
//! 18.6-year period of the lunar node and an amplitude of about 17″ in
//! longitude and 9″ in obliquity.
//!
//! | Type | Role |
//! |------|------|
//! | [`NutationTables`] | Luni-solar and planetary coefficient rows, loaded once |
//! | [`NutationIAU2000A`] | Series evaluation over the tables |
//! | [`NutationIAU2006A`] | 2000A plus the P03 adjustment for IAU 2006 precession |
//!
//! All `compute(t)` methods take TT Julian centuries from J2000.0 and
//! return a [`NutationResult`] in radians.
//!
//! ```
//! use greenwich_core::nutation::{NutationIAU2006A, NutationTables};
//!
//! let nutation = NutationIAU2006A::new(NutationTables::bundled()?);
//! let result = nutation.compute(0.0);
//! // At J2000.0: Δψ ≈ -14″, Δε ≈ -6″
//! assert!(result.delta_psi < 0.0 && result.delta_eps < 0.0);
//! # Ok::<(), greenwich_core::AstroError>(())
//! ```

pub mod fundamental_args;
pub mod iau2000a;
pub mod iau2006a;
pub mod tables;
pub mod types;

pub use fundamental_args::{IERS2003FundamentalArgs, MHB2000FundamentalArgs};
pub use iau2000a::NutationIAU2000A;
pub use iau2006a::NutationIAU2006A;
pub use tables::{LunisolarTerm, NutationTables, PlanetaryTerm};
pub use types::NutationResult;
