//! Sexagesimal display of sidereal angles.
//!
//! Sidereal times are reported both in degrees and as hours-minutes-seconds
//! (15° per hour). The equation of the equinoxes is a small signed
//! quantity, so unlike right ascension formatting the value is not wrapped
//! into [0, 24h): hours and minutes are truncated toward zero and a negative
//! remainder shows up as a leading `-` with positive seconds.
//!
//! ```
//! use greenwich_core::angle::deg_to_hms;
//!
//! assert_eq!(deg_to_hms(15.0), " 1 h 00 m 00.000 s");
//! assert_eq!(deg_to_hms(-0.0010405738551053445), "- 0 h 00 m 00.250 s");
//! ```

/// Hours, minutes and seconds of a signed angle given in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HmsParts {
    pub negative: bool,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: f64,
}

impl HmsParts {
    pub fn from_degrees(deg: f64) -> Self {
        let hours = libm::trunc(deg / 15.0);
        let total_minutes = (deg - hours * 15.0) * 4.0;
        let minutes = libm::trunc(total_minutes);
        let seconds = (total_minutes - minutes) * 60.0;
        Self {
            negative: seconds < 0.0,
            hours: hours as i64,
            minutes: minutes as i64,
            seconds: seconds.abs(),
        }
    }
}

/// Formats degrees as `"{sign}{h:2} h {m:02} m {s:06.3} s"`.
pub fn deg_to_hms(deg: f64) -> String {
    let parts = HmsParts::from_degrees(deg);
    let sign = if parts.negative { "-" } else { "" };
    format!(
        "{}{:2} h {:02} m {:06.3} s",
        sign, parts.hours, parts.minutes, parts.seconds
    )
}
