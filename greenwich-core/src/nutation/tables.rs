//! Coefficient tables for the IAU 2000A nutation series.
//!
//! The series amplitudes are data, not code: they are read from two
//! whitespace-delimited text files, one luni-solar and one planetary. Each
//! file starts with a header line, followed by one term per row:
//!
//! ```text
//!     L   L'    F    D   Om          PS       PST        PC          EC       ECT        ES
//!     0    0    0    0    1 -17206.4161  -17.4666    3.3386   9205.2331    0.9086    1.5377
//! ```
//!
//! | Table | Integer columns | Amplitude columns |
//! |-------|-----------------|-------------------|
//! | luni-solar | l, l′, F, D, Ω | Δψ sin, Δψ sin·t, Δψ cos, Δε cos, Δε cos·t, Δε sin |
//! | planetary | l, l′, F, D, Ω, Me, Ve, E, Ma, Ju, Sa, U, Ne, pA | Δψ sin, Δψ cos, Δε sin, Δε cos |
//!
//! Amplitudes are milliarcseconds written with four decimals. They are read
//! as fixed-point numbers: the decimal point is dropped, giving integers in
//! units of 0.1 µas, so no rounding happens while loading. Fewer than four
//! decimals are padded; more than four are rejected.
//!
//! # Bundled data
//!
//! [`NutationTables::bundled`] parses copies compiled into the crate: the
//! 77 largest luni-solar terms of the MHB2000 series with all six amplitude
//! columns, and a single constant planetary row carrying the fixed offset
//! that stands in for the planetary series at that truncation (the IAU
//! 2000B term set). Against the full series this leaves about 0.35 mas in
//! Δψ. Point [`NutationTables::from_paths`] at the complete IERS tables
//! (678 luni-solar, 687 planetary rows) for full IAU 2000A precision; the
//! file format is the same.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{AstroError, AstroResult};

const BUNDLED_LUNISOLAR: &str = include_str!("../../data/nut_ls.txt");
const BUNDLED_PLANETARY: &str = include_str!("../../data/nut_pl.txt");

/// Decimal places implied by the amplitude columns.
const AMPLITUDE_DECIMALS: usize = 4;

/// One row of the luni-solar series. Amplitudes are in 0.1 µas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunisolarTerm {
    /// Multipliers of (l, l′, F, D, Ω).
    pub multipliers: [i32; 5],
    pub psi_sin: f64,
    pub psi_sin_t: f64,
    pub psi_cos: f64,
    pub eps_cos: f64,
    pub eps_cos_t: f64,
    pub eps_sin: f64,
}

/// One row of the planetary series. Amplitudes are in 0.1 µas.
///
/// The second multiplier (l′) is kept so rows round-trip the file layout,
/// but the planetary argument never uses it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryTerm {
    /// Multipliers of (l, l′, F, D, Ω, Me, Ve, E, Ma, Ju, Sa, U, Ne, pA).
    pub multipliers: [i32; 14],
    pub psi_sin: f64,
    pub psi_cos: f64,
    pub eps_sin: f64,
    pub eps_cos: f64,
}

/// Both nutation coefficient tables, immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct NutationTables {
    lunisolar: Vec<LunisolarTerm>,
    planetary: Vec<PlanetaryTerm>,
}

impl NutationTables {
    pub fn new(lunisolar: Vec<LunisolarTerm>, planetary: Vec<PlanetaryTerm>) -> Self {
        Self {
            lunisolar,
            planetary,
        }
    }

    /// Parses the tables compiled into the crate.
    pub fn bundled() -> AstroResult<Self> {
        let tables = Self::from_readers(
            BUNDLED_LUNISOLAR.as_bytes(),
            BUNDLED_PLANETARY.as_bytes(),
        )?;
        log::debug!(
            "loaded bundled nutation tables: {} luni-solar, {} planetary terms",
            tables.lunisolar.len(),
            tables.planetary.len()
        );
        Ok(tables)
    }

    /// Loads both tables from text files.
    ///
    /// Either file missing or malformed is an error; nothing is partially
    /// loaded.
    pub fn from_paths(lunisolar: &Path, planetary: &Path) -> AstroResult<Self> {
        let ls = open_table(lunisolar, "luni-solar")?;
        let pl = open_table(planetary, "planetary")?;
        let tables = Self::from_readers(ls, pl)?;
        log::info!(
            "loaded nutation tables: {} luni-solar terms from {}, {} planetary terms from {}",
            tables.lunisolar.len(),
            lunisolar.display(),
            tables.planetary.len(),
            planetary.display()
        );
        Ok(tables)
    }

    pub fn from_readers<L: BufRead, P: BufRead>(lunisolar: L, planetary: P) -> AstroResult<Self> {
        let lunisolar = parse_rows::<_, 5, 6>(lunisolar, "luni-solar")?
            .into_iter()
            .map(|(m, a)| LunisolarTerm {
                multipliers: m,
                psi_sin: a[0],
                psi_sin_t: a[1],
                psi_cos: a[2],
                eps_cos: a[3],
                eps_cos_t: a[4],
                eps_sin: a[5],
            })
            .collect();

        let planetary = parse_rows::<_, 14, 4>(planetary, "planetary")?
            .into_iter()
            .map(|(m, a)| PlanetaryTerm {
                multipliers: m,
                psi_sin: a[0],
                psi_cos: a[1],
                eps_sin: a[2],
                eps_cos: a[3],
            })
            .collect();

        Ok(Self::new(lunisolar, planetary))
    }

    pub fn lunisolar(&self) -> &[LunisolarTerm] {
        &self.lunisolar
    }

    pub fn planetary(&self) -> &[PlanetaryTerm] {
        &self.planetary
    }
}

fn open_table(path: &Path, file_type: &str) -> AstroResult<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|e| {
        AstroError::data_error(file_type, "open", &format!("{}: {}", path.display(), e))
    })
}

/// Reads a header line, then rows of `N` integers followed by `A`
/// fixed-point amplitudes. Blank lines are ignored.
fn parse_rows<R: BufRead, const N: usize, const A: usize>(
    reader: R,
    file_type: &str,
) -> AstroResult<Vec<([i32; N], [f64; A])>> {
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line_no = index + 1;
        let line = line.map_err(|e| {
            AstroError::data_error(file_type, "read", &format!("line {}: {}", line_no, e))
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != N + A {
            return Err(AstroError::data_error(
                file_type,
                "parse",
                &format!(
                    "line {}: expected {} columns, found {}",
                    line_no,
                    N + A,
                    fields.len()
                ),
            ));
        }

        let mut multipliers = [0i32; N];
        for (slot, field) in multipliers.iter_mut().zip(&fields[..N]) {
            *slot = field.parse().map_err(|_| {
                AstroError::data_error(
                    file_type,
                    "parse",
                    &format!("line {}: invalid multiplier '{}'", line_no, field),
                )
            })?;
        }

        let mut amplitudes = [0.0f64; A];
        for (slot, field) in amplitudes.iter_mut().zip(&fields[N..]) {
            let units = parse_fixed_point(field).ok_or_else(|| {
                AstroError::data_error(
                    file_type,
                    "parse",
                    &format!("line {}: invalid amplitude '{}'", line_no, field),
                )
            })?;
            *slot = units as f64;
        }

        rows.push((multipliers, amplitudes));
    }

    if rows.is_empty() {
        return Err(AstroError::data_error(file_type, "parse", "table has no rows"));
    }

    Ok(rows)
}

/// Parses a decimal with at most four fractional digits into an integer
/// count of 10⁻⁴ units, e.g. `"-17206.4161"` → `-172064161`.
fn parse_fixed_point(field: &str) -> Option<i64> {
    let (negative, digits) = match field.as_bytes().first()? {
        b'-' => (true, &field[1..]),
        b'+' => (false, &field[1..]),
        _ => (false, field),
    };

    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if frac.len() > AMPLITUDE_DECIMALS {
        return None;
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut value: i64 = 0;
    for b in whole.bytes().chain(frac.bytes()) {
        value = value.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
    }
    for _ in frac.len()..AMPLITUDE_DECIMALS {
        value = value.checked_mul(10)?;
    }

    Some(if negative { -value } else { value })
}
