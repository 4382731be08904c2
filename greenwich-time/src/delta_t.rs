//! ΔT = TT − UT1, in seconds, from the calendar year and month.
//!
//! The model is the Espenak-Meeus set of polynomials, with the observed
//! leap-second record laid over it from 1972 on:
//!
//! | From | To | Expression |
//! |------|----|------------|
//! | | −500 | `−20 + 32u²`, `u = (y − 1820)/100` |
//! | −500 | 500 | degree 6 in `y/100` |
//! | 500 | 1600 | degree 6 in `(y − 1000)/100` |
//! | 1600 | 1961 | seven short polynomials in `y − epoch` |
//! | 1961 | 1986 | cubic in `y − 1975` |
//! | 1972-01 | horizon | `32.184 + ΔAT` (leap-second table) |
//! | 1986 | 2005 | degree 5 in `y − 2000` |
//! | 2005 | 2050 | `62.92 + 0.32217t + 0.005589t²` |
//! | 2050 | 2151 | `−20 + 32u² − 0.5628(2150 − y)` |
//! | 2151 | | `−20 + 32u²` |
//!
//! `y = year + (month − 0.5)/12`. Segment bounds are half-open and compared
//! on (year, month), so the leap-second era switches at month boundaries.
//!
//! The leap-second horizon is the first month for which the table is no
//! longer trusted. Past it the 2005–2050 polynomial takes over, which is
//! about two seconds off for the 2020s.
//!
//! ```
//! use greenwich_time::{DeltaTModel, YearMonth};
//!
//! let model = DeltaTModel::default();
//! let dt = model.delta_t(YearMonth::new(2016, 6))?;
//! assert!((dt - 68.184).abs() < 1e-12);
//! # Ok::<(), greenwich_time::TimeError>(())
//! ```

use crate::{TimeError, TimeResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// TT − TAI, seconds.
pub const TT_MINUS_TAI: f64 = 32.184;

/// First month covered by the leap-second table.
pub const LEAP_SECOND_ERA_START: YearMonth = YearMonth::new(1972, 1);

/// First month after the last table entry known to be followed by no
/// further leap second.
pub const DEFAULT_LEAP_SECOND_HORIZON: YearMonth = YearMonth::new(2019, 1);

/// End of the 2005–2050 polynomial; past the horizon and before this month
/// ΔT is extrapolated.
const PROVISIONAL_END: YearMonth = YearMonth::new(2050, 1);

/// A calendar month, the key of the ΔT model.
///
/// Ordered chronologically. Parses from and prints as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Year with the month centred, `year + (month − 0.5)/12`.
    pub fn fractional_year(&self) -> f64 {
        self.year as f64 + (self.month as f64 - 0.5) / 12.0
    }

    fn check_month(&self) -> TimeResult<()> {
        if (1..=12).contains(&self.month) {
            Ok(())
        } else {
            Err(TimeError::InvalidDate(format!(
                "month {} of year {} is outside 1..=12",
                self.month, self.year
            )))
        }
    }
}

impl FromStr for YearMonth {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        let s = s.trim();
        let bad = || TimeError::ParseError(format!("'{}': expected YYYY-MM", s));

        let (year, month) = s.rsplit_once('-').ok_or_else(bad)?;
        let year: i32 = year.parse().map_err(|_| bad())?;
        let month: u32 = month.parse().map_err(|_| bad())?;

        let ym = Self::new(year, month);
        ym.check_month()?;
        Ok(ym)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = TimeError;

    fn try_from(s: String) -> TimeResult<Self> {
        s.parse()
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}", -(self.year as i64), self.month)
        } else {
            write!(f, "{:04}-{:02}", self.year, self.month)
        }
    }
}

/// One piece of the ΔT curve, valid from `start` until the next segment.
struct Segment {
    start: YearMonth,
    evaluate: fn(f64) -> f64,
}

const fn segment(year: i32, evaluate: fn(f64) -> f64) -> Segment {
    Segment {
        start: YearMonth::new(year, 1),
        evaluate,
    }
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

fn before_500(y: f64) -> f64 {
    let u = y / 100.0;
    10583.6
        + u * (-1014.41
            + u * (33.78311
                + u * (-5.952053 + u * (-0.1798452 + u * (0.022174192 + u * 0.0090316521)))))
}

fn before_1600(y: f64) -> f64 {
    let u = (y - 1000.0) / 100.0;
    1574.2
        + u * (-556.01
            + u * (71.23472
                + u * (0.319781 + u * (-0.8503463 + u * (-0.005050998 + u * 0.0083572073)))))
}

fn before_1700(y: f64) -> f64 {
    let t = y - 1600.0;
    120.0 + t * (-0.9808 + t * (-0.01532 + t / 7129.0))
}

fn before_1800(y: f64) -> f64 {
    let t = y - 1700.0;
    8.83 + t * (0.1603 + t * (-0.0059285 + t * (0.00013336 - t / 1174000.0)))
}

fn before_1860(y: f64) -> f64 {
    let t = y - 1800.0;
    13.72
        + t * (-0.332447
            + t * (0.0068612
                + t * (0.0041116
                    + t * (-0.00037436
                        + t * (0.0000121272 + t * (-0.0000001699 + t * 0.000000000875))))))
}

fn before_1900(y: f64) -> f64 {
    let t = y - 1860.0;
    7.62 + t * (0.5737 + t * (-0.251754 + t * (0.01680668 + t * (-0.0004473624 + t / 233174.0))))
}

fn before_1920(y: f64) -> f64 {
    let t = y - 1900.0;
    -2.79 + t * (1.494119 + t * (-0.0598939 + t * (0.0061966 + t * -0.000197)))
}

fn before_1941(y: f64) -> f64 {
    let t = y - 1920.0;
    21.20 + t * (0.84493 + t * (-0.076100 + t * 0.0020936))
}

fn before_1961(y: f64) -> f64 {
    let t = y - 1950.0;
    29.07 + t * (0.407 + t * (-1.0 / 233.0 + t / 2547.0))
}

fn before_1986(y: f64) -> f64 {
    let t = y - 1975.0;
    45.45 + t * (1.067 + t * (-1.0 / 260.0 - t / 718.0))
}

fn before_2005(y: f64) -> f64 {
    let t = y - 2000.0;
    63.86
        + t * (0.3345
            + t * (-0.060374 + t * (0.0017275 + t * (0.000651814 + t * 0.00002373599))))
}

fn before_2050(y: f64) -> f64 {
    let t = y - 2000.0;
    62.92 + t * (0.32217 + t * 0.005589)
}

fn before_2151(y: f64) -> f64 {
    long_term(y) - 0.5628 * (2150.0 - y)
}

const SEGMENTS: [Segment; 15] = [
    segment(i32::MIN, long_term),
    segment(-500, before_500),
    segment(500, before_1600),
    segment(1600, before_1700),
    segment(1700, before_1800),
    segment(1800, before_1860),
    segment(1860, before_1900),
    segment(1900, before_1920),
    segment(1920, before_1941),
    segment(1941, before_1961),
    segment(1961, before_1986),
    segment(1986, before_2005),
    segment(2005, before_2050),
    segment(2050, before_2151),
    segment(2151, long_term),
];

/// TAI − UTC in whole seconds, from the month each value took effect.
const LEAP_SECONDS: [(YearMonth, f64); 28] = [
    (YearMonth::new(1972, 1), 10.0),
    (YearMonth::new(1972, 7), 11.0),
    (YearMonth::new(1973, 1), 12.0),
    (YearMonth::new(1974, 1), 13.0),
    (YearMonth::new(1975, 1), 14.0),
    (YearMonth::new(1976, 1), 15.0),
    (YearMonth::new(1977, 1), 16.0),
    (YearMonth::new(1978, 1), 17.0),
    (YearMonth::new(1979, 1), 18.0),
    (YearMonth::new(1980, 1), 19.0),
    (YearMonth::new(1981, 7), 20.0),
    (YearMonth::new(1982, 7), 21.0),
    (YearMonth::new(1983, 7), 22.0),
    (YearMonth::new(1985, 7), 23.0),
    (YearMonth::new(1988, 1), 24.0),
    (YearMonth::new(1990, 1), 25.0),
    (YearMonth::new(1991, 1), 26.0),
    (YearMonth::new(1992, 7), 27.0),
    (YearMonth::new(1993, 7), 28.0),
    (YearMonth::new(1994, 7), 29.0),
    (YearMonth::new(1996, 1), 30.0),
    (YearMonth::new(1997, 7), 31.0),
    (YearMonth::new(1999, 1), 32.0),
    (YearMonth::new(2006, 1), 33.0),
    (YearMonth::new(2009, 1), 34.0),
    (YearMonth::new(2012, 7), 35.0),
    (YearMonth::new(2015, 7), 36.0),
    (YearMonth::new(2017, 1), 37.0),
];

/// TAI − UTC in effect during `ym`, if the table reaches back that far.
pub fn tai_minus_utc(ym: YearMonth) -> Option<f64> {
    LEAP_SECONDS
        .iter()
        .rev()
        .find(|(start, _)| *start <= ym)
        .map(|&(_, dat)| dat)
}

/// Piecewise ΔT with a configurable leap-second horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaTModel {
    leap_second_horizon: YearMonth,
}

impl Default for DeltaTModel {
    fn default() -> Self {
        Self {
            leap_second_horizon: DEFAULT_LEAP_SECOND_HORIZON,
        }
    }
}

impl DeltaTModel {
    /// Model that trusts the leap-second table for months before
    /// `leap_second_horizon`.
    ///
    /// The horizon must lie in `[1972-01, 2050-01]`.
    pub fn new(leap_second_horizon: YearMonth) -> TimeResult<Self> {
        validate_horizon(leap_second_horizon)?;
        Ok(Self {
            leap_second_horizon,
        })
    }

    pub fn leap_second_horizon(&self) -> YearMonth {
        self.leap_second_horizon
    }

    /// ΔT in seconds for the given month.
    pub fn delta_t(&self, ym: YearMonth) -> TimeResult<f64> {
        ym.check_month()?;

        if ym >= LEAP_SECOND_ERA_START && ym < self.leap_second_horizon {
            let dat = tai_minus_utc(ym).ok_or_else(|| {
                TimeError::ConfigurationError(format!("no leap-second entry covers {}", ym))
            })?;
            return Ok(TT_MINUS_TAI + dat);
        }

        if ym >= self.leap_second_horizon && ym < PROVISIONAL_END {
            warn!(
                "ΔT for {} is extrapolated: leap-second horizon is {}",
                ym, self.leap_second_horizon
            );
        }

        let segment = SEGMENTS
            .iter()
            .rev()
            .find(|segment| segment.start <= ym)
            .ok_or_else(|| {
                TimeError::ConfigurationError(format!("no ΔT segment covers {}", ym))
            })?;

        Ok((segment.evaluate)(ym.fractional_year()))
    }
}

pub(crate) fn validate_horizon(horizon: YearMonth) -> TimeResult<()> {
    if !(1..=12).contains(&horizon.month)
        || horizon < LEAP_SECOND_ERA_START
        || horizon > PROVISIONAL_END
    {
        return Err(TimeError::ConfigurationError(format!(
            "leap-second horizon {} must lie between {} and {}",
            horizon, LEAP_SECOND_ERA_START, PROVISIONAL_END
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn dt(year: i32, month: u32) -> f64 {
        DeltaTModel::default()
            .delta_t(YearMonth::new(year, month))
            .unwrap()
    }

    fn jump(year: i32) -> f64 {
        dt(year, 1) - dt(year - 1, 12)
    }

    #[test]
    fn test_leap_second_era() {
        assert_eq!(dt(2016, 6), 68.184);
        assert_eq!(dt(1990, 6), 57.184);
        assert_eq!(dt(1972, 1), 42.184);
        assert_eq!(dt(2017, 1), 69.184);
        assert_eq!(dt(2018, 12), 69.184);
    }

    #[test]
    fn test_month_granularity_at_leap_seconds() {
        assert_eq!(dt(2015, 6), 67.184);
        assert_eq!(dt(2015, 7), 68.184);
        assert_eq!(dt(2012, 6), 66.184);
        assert_eq!(dt(2012, 7), 67.184);
    }

    #[test]
    fn test_polynomial_spot_values() {
        assert_abs_diff_eq!(dt(1000, 1), 1573.968, epsilon = 1e-3);
        assert_abs_diff_eq!(dt(2100, 1), 202.838, epsilon = 1e-3);
        assert_abs_diff_eq!(dt(1900, 1), -2.7278, epsilon = 1e-3);
    }

    #[test]
    fn test_segment_jumps_stay_small() {
        let documented = [
            (-500, -1.396),
            (500, -0.906),
            (1600, -0.310),
            (1700, -0.149),
            (1800, -0.068),
            (1860, 0.089),
            (1900, 0.035),
            (1920, 0.057),
            (1941, 0.042),
            (1961, 0.063),
            (1972, -0.024),
            (2019, 1.897),
            (2050, 0.120),
        ];
        for (year, expected) in documented {
            assert_abs_diff_eq!(jump(year), expected, epsilon = 5e-3);
        }
        assert_abs_diff_eq!(dt(2151, 1) - dt(2150, 12), -0.363, epsilon = 5e-3);
    }

    #[test]
    fn test_smooth_joins_inside_polynomials() {
        let model = DeltaTModel::new(LEAP_SECOND_ERA_START).unwrap();
        for year in [1986, 2005] {
            let step = model.delta_t(YearMonth::new(year, 1)).unwrap()
                - model.delta_t(YearMonth::new(year - 1, 12)).unwrap();
            assert!(step.abs() < 0.1, "{}: {}", year, step);
        }
    }

    #[test]
    fn test_horizon_controls_table_use() {
        let early = DeltaTModel::new(YearMonth::new(2017, 1)).unwrap();
        let ym = YearMonth::new(2017, 6);
        assert_eq!(dt(2017, 6), 69.184);
        assert_abs_diff_eq!(
            early.delta_t(ym).unwrap(),
            before_2050(ym.fractional_year()),
            epsilon = 1e-12
        );

        let late = DeltaTModel::new(YearMonth::new(2025, 1)).unwrap();
        assert_eq!(late.delta_t(YearMonth::new(2024, 12)).unwrap(), 69.184);
    }

    #[test]
    fn test_bad_horizon_is_configuration_error() {
        for horizon in [
            YearMonth::new(1971, 12),
            YearMonth::new(2050, 2),
            YearMonth::new(2019, 13),
        ] {
            let err = DeltaTModel::new(horizon).unwrap_err();
            assert!(matches!(err, TimeError::ConfigurationError(_)));
            assert!(!err.is_input_error());
        }
    }

    #[test]
    fn test_bad_month_is_input_error() {
        let err = DeltaTModel::default()
            .delta_t(YearMonth::new(2016, 0))
            .unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_extreme_years() {
        assert!(dt(i32::MIN, 1).is_finite());
        assert!(dt(-10000, 6) > 0.0);
        assert!(dt(10000, 6) > 0.0);
    }

    #[test]
    fn test_year_month_text() {
        let ym: YearMonth = "2019-01".parse().unwrap();
        assert_eq!(ym, DEFAULT_LEAP_SECOND_HORIZON);
        assert_eq!(ym.to_string(), "2019-01");

        let bc: YearMonth = "-0500-03".parse().unwrap();
        assert_eq!(bc, YearMonth::new(-500, 3));
        assert_eq!(bc.to_string(), "-0500-03");

        assert!("2019".parse::<YearMonth>().is_err());
        assert!("2019-00".parse::<YearMonth>().is_err());
        assert!("yyyy-01".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_year_month_ordering() {
        assert!(YearMonth::new(1999, 12) < YearMonth::new(2000, 1));
        assert!(YearMonth::new(2000, 1) < YearMonth::new(2000, 2));
        assert!(YearMonth::new(-1, 12) < YearMonth::new(0, 1));
    }

    #[test]
    fn test_tai_minus_utc() {
        assert_eq!(tai_minus_utc(YearMonth::new(1971, 12)), None);
        assert_eq!(tai_minus_utc(YearMonth::new(1999, 1)), Some(32.0));
        assert_eq!(tai_minus_utc(YearMonth::new(2030, 1)), Some(37.0));
    }
}
