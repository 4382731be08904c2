use chrono::{Datelike, NaiveDateTime, Timelike};
use greenwich_core::constants::{J2000_JD, NANOSECONDS_PER_SECOND_F64, SECONDS_PER_DAY_F64};
use greenwich_core::utils::jd_to_centuries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-part Julian Date.
///
/// Calendar conversions put the day number at 0h in `jd1` and the fraction
/// of the day in `jd2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Shifts the fractional part by `seconds / 86400`.
    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self::new(self.jd1, self.jd2 + seconds / SECONDS_PER_DAY_F64)
    }

    /// Julian centuries from J2000.0: `((jd1 - J2000) + jd2) / 36525`.
    pub fn centuries_since_j2000(&self) -> f64 {
        jd_to_centuries(self.jd1, self.jd2)
    }

    /// Proleptic Gregorian calendar date and time of day to a Julian Date.
    ///
    /// January and February count as months 13 and 14 of the previous
    /// year; then
    ///
    /// ```text
    /// jd1 = ⌊365.25·y⌋ + ⌊y/400⌋ − ⌊y/100⌋ + ⌊30.59·(m − 2)⌋ + day + 1721088.5
    /// jd2 = (second/3600 + minute/60 + hour) / 24
    /// ```
    ///
    /// with floored division, so years before 1 BCE follow the same rule.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        let (y, m) = if month < 3 {
            (i64::from(year) - 1, i64::from(month) + 12)
        } else {
            (i64::from(year), i64::from(month))
        };

        let days = libm::floor(365.25 * y as f64) as i64 + y.div_euclid(400) - y.div_euclid(100)
            + libm::floor(30.59 * (m - 2) as f64) as i64
            + i64::from(day);
        let jd1 = days as f64 + 1721088.5;

        let jd2 = (second / 3600.0 + f64::from(minute) / 60.0 + f64::from(hour)) / 24.0;

        Self::new(jd1, jd2)
    }

    /// Julian Date of a calendar timestamp, sub-seconds included.
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        let second = f64::from(datetime.second())
            + f64::from(datetime.nanosecond()) / NANOSECONDS_PER_SECOND_F64;
        Self::from_calendar(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            second,
        )
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}
