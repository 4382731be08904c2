//! Fixed-width digit timestamps.
//!
//! Three granularities are accepted:
//!
//! | Length | Layout |
//! |--------|--------|
//! | 8  | `YYYYMMDD` |
//! | 14 | `YYYYMMDDhhmmss` |
//! | 20 | `YYYYMMDDhhmmssuuuuuu` |
//!
//! Shorter forms are right-padded with zeros to 20 digits, so `20160621`
//! means midnight. Only the layout is checked here; whether the fields name
//! a real date is decided when the instant is built.

use crate::{TimeError, TimeResult};

const FULL_WIDTH: usize = 20;

/// Calendar fields read from a digit timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
}

#[inline]
fn digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, &b| acc * 10 + u32::from(b - b'0'))
}

pub fn parse_digits(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();

    if !matches!(s.len(), 8 | 14 | 20) {
        return Err(TimeError::ParseError(format!(
            "'{}': expected 8, 14 or 20 digits, got {} characters",
            s,
            s.len()
        )));
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!(
            "'{}': only digits are allowed",
            s
        )));
    }

    let mut padded = [b'0'; FULL_WIDTH];
    padded[..s.len()].copy_from_slice(s.as_bytes());

    Ok(ParsedDateTime {
        year: digits(&padded[0..4]) as i32,
        month: digits(&padded[4..6]),
        day: digits(&padded[6..8]),
        hour: digits(&padded[8..10]),
        minute: digits(&padded[10..12]),
        second: digits(&padded[12..14]),
        microsecond: digits(&padded[14..20]),
    })
}
