//! Numerical core of the Greenwich sidereal time pipeline.
//!
//! `greenwich-core` evaluates the IAU 2006/2000A precession-nutation model
//! at one epoch, given TT Julian centuries from J2000.0. It knows nothing
//! about calendars, ΔT or UT1; those live in `greenwich-time`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`nutation`] | Fundamental arguments, coefficient tables, IAU 2000A/2006A series |
//! | [`precession`] | Fukushima-Williams angles and the `fw2m` composition |
//! | [`matrix`] | 3×3 rotation matrix |
//! | [`cio`] | CIP coordinates, CIO locator, equation of the origins |
//! | [`angle`] | Normalization to [0, 2π) and h/m/s display |
//! | [`constants`] | Epochs and unit conversions |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Pipeline
//!
//! ```
//! use greenwich_core::cio::CioSolution;
//! use greenwich_core::nutation::{NutationIAU2006A, NutationTables};
//! use greenwich_core::precession::FukushimaWilliamsAngles;
//!
//! let t = 0.1646954140999;
//! let nutation = NutationIAU2006A::new(NutationTables::bundled()?).compute(t);
//! let npb = FukushimaWilliamsAngles::at(t).npb_matrix(nutation.delta_psi, nutation.delta_eps);
//! let cio = CioSolution::calculate(&npb, t);
//! assert!(npb.is_rotation_matrix(1e-12));
//! assert!(cio.s.abs() < 1e-6);
//! # Ok::<(), greenwich_core::AstroError>(())
//! ```
//!
//! Apart from loading the nutation tables, every stage is a total function
//! of finite inputs.

pub mod angle;
pub mod cio;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod nutation;
pub mod precession;
pub mod utils;

pub use angle::{deg_to_hms, wrap_0_2pi};
pub use cio::{CioLocator, CioSolution, CipCoordinates, EquationOfOrigins};
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use matrix::RotationMatrix3;
pub use nutation::{NutationIAU2006A, NutationResult, NutationTables};
pub use precession::{fw2m, FukushimaWilliamsAngles};

pub mod test_helpers;
