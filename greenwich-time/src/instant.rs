//! Calendar instants on the TT and UT1 scales.
//!
//! Both wrap a `chrono::NaiveDateTime` read on their own scale; the types
//! keep the two from being mixed up. Resolution is one nanosecond, which
//! is also the granularity of the TT → UT1 shift.

use crate::delta_t::YearMonth;
use crate::julian::JulianDate;
use crate::parsing::parse_digits;
use crate::{TimeError, TimeResult};
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use greenwich_core::constants::NANOSECONDS_PER_SECOND_F64;
use std::fmt;
use std::str::FromStr;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Largest |ΔT| accepted for a scale shift; far beyond any model value.
const MAX_SHIFT_SECONDS: f64 = 1.0e9;

fn shift(datetime: NaiveDateTime, seconds: f64) -> TimeResult<NaiveDateTime> {
    if !seconds.is_finite() || seconds.abs() > MAX_SHIFT_SECONDS {
        return Err(TimeError::InvalidDate(format!(
            "time-scale offset of {} s is out of range",
            seconds
        )));
    }
    let nanos = (seconds * NANOSECONDS_PER_SECOND_F64).round() as i64;
    datetime
        .checked_add_signed(Duration::nanoseconds(nanos))
        .ok_or_else(|| {
            TimeError::InvalidDate(format!(
                "{} shifted by {} s leaves the supported calendar range",
                datetime.format(DISPLAY_FORMAT),
                seconds
            ))
        })
}

/// An instant of Terrestrial Time.
///
/// ```
/// use greenwich_time::TtInstant;
///
/// let tt: TtInstant = "20000101120000".parse().unwrap();
/// assert_eq!(tt.julian_date().centuries_since_j2000(), 0.0);
/// assert_eq!(tt.to_string(), "2000-01-01 12:00:00.000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TtInstant(NaiveDateTime);

impl TtInstant {
    /// Builds an instant from calendar fields, rejecting dates and times
    /// that do not exist (February 30, hour 24, second 60).
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> TimeResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_micro_opt(hour, minute, second, microsecond))
            .filter(|_| microsecond < 1_000_000)
            .map(Self)
            .ok_or_else(|| {
                TimeError::InvalidDate(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
                    year, month, day, hour, minute, second, microsecond
                ))
            })
    }

    /// The local wall-clock time, read as TT.
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Calendar year and month, the key of the ΔT model.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::new(self.0.year(), self.0.month())
    }

    pub fn julian_date(&self) -> JulianDate {
        JulianDate::from_datetime(&self.0)
    }

    /// UT1 = TT − ΔT, rounded to the nanosecond.
    pub fn to_ut1(&self, delta_t: f64) -> TimeResult<Ut1Instant> {
        shift(self.0, -delta_t).map(Ut1Instant)
    }
}

impl FromStr for TtInstant {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        let p = parse_digits(s)?;
        Self::from_calendar(
            p.year,
            p.month,
            p.day,
            p.hour,
            p.minute,
            p.second,
            p.microsecond,
        )
    }
}

impl fmt::Display for TtInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

/// An instant of UT1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ut1Instant(NaiveDateTime);

impl Ut1Instant {
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    pub fn julian_date(&self) -> JulianDate {
        JulianDate::from_datetime(&self.0)
    }

    /// TT = UT1 + ΔT, rounded to the nanosecond.
    pub fn to_tt(&self, delta_t: f64) -> TimeResult<TtInstant> {
        shift(self.0, delta_t).map(TtInstant)
    }
}

impl fmt::Display for Ut1Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

/// Shifts a TT instant to UT1 by `delta_t` seconds.
pub fn tt_to_ut1(tt: &TtInstant, delta_t: f64) -> TimeResult<Ut1Instant> {
    tt.to_ut1(delta_t)
}

/// Shifts a UT1 instant back to TT by `delta_t` seconds.
pub fn ut1_to_tt(ut1: &Ut1Instant, delta_t: f64) -> TimeResult<TtInstant> {
    ut1.to_tt(delta_t)
}
