use greenwich_core::angle::wrap_0_2pi;

/// Greenwich Apparent Sidereal Time, `ERA − EO` wrapped into [0, 2π).
pub fn gast(era: f64, equation_of_origins: f64) -> f64 {
    wrap_0_2pi(era - equation_of_origins)
}

/// `GAST − GMST`, left unwrapped.
///
/// Both inputs lie in [0, 2π); if one of them has just wrapped past zero the
/// difference is off by a full turn.
pub fn equation_of_equinoxes(gast: f64, gmst: f64) -> f64 {
    gast - gmst
}
