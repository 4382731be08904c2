//! Greenwich sidereal time from a Terrestrial Time instant.
//!
//! Builds on `greenwich-core` with everything that involves civil time:
//! calendar instants, Julian Dates, the historical ΔT model, the Earth
//! Rotation Angle and the sidereal times derived from it.
//!
//! ```
//! use greenwich_time::{GreenwichTime, TtInstant};
//!
//! let pipeline = GreenwichTime::with_bundled_tables()?;
//! let tt: TtInstant = "20160621".parse()?;
//! let report = pipeline.compute(&tt)?;
//! assert!((report.sidereal.gast - 4.700807541501367).abs() < 1e-9);
//! # Ok::<(), greenwich_time::TimeError>(())
//! ```

pub mod config;
pub mod delta_t;
pub mod display;
pub mod instant;
pub mod julian;
pub mod parsing;
pub mod pipeline;
pub mod sidereal;

pub use config::GreenwichConfig;
pub use delta_t::{DeltaTModel, YearMonth};
pub use instant::{TtInstant, Ut1Instant};
pub use julian::JulianDate;
pub use pipeline::{GreenwichReport, GreenwichTime};
pub use sidereal::SiderealTimes;

use greenwich_core::AstroError;
use std::path::PathBuf;
use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Error, Debug)]
pub enum TimeError {
    /// Input text is not a date in an accepted format.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Well-formed input naming a date or time that does not exist.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] AstroError),
}

impl TimeError {
    /// Errors the user can fix by changing the requested instant.
    pub fn is_input_error(&self) -> bool {
        match self {
            TimeError::ParseError(_) | TimeError::InvalidDate(_) => true,
            TimeError::Core(err) => err.is_input_error(),
            _ => false,
        }
    }
}
