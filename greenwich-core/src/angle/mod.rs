//! Angle normalization and sexagesimal display.

pub mod format;
pub mod normalize;

pub use format::{deg_to_hms, HmsParts};
pub use normalize::wrap_0_2pi;
