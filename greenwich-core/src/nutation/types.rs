/// Nutation in longitude and obliquity, in radians.
///
/// - `delta_psi` (Δψ): along the ecliptic, positive eastward
/// - `delta_eps` (Δε): perpendicular to it, positive when obliquity grows
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutationResult {
    pub delta_psi: f64,
    pub delta_eps: f64,
}
