//! Runtime configuration.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. [`GreenwichConfig::default`]: bundled tables, horizon 2019-01
//! 2. a JSON file ([`GreenwichConfig::from_file`])
//! 3. environment variables ([`GreenwichConfig::apply_env`])
//! 4. command-line flags, applied by the binary
//!
//! | Variable | Field |
//! |----------|-------|
//! | `GREENWICH_NUT_LS` | `luni_solar_table` |
//! | `GREENWICH_NUT_PL` | `planetary_table` |
//! | `GREENWICH_LEAP_HORIZON` | `leap_second_horizon` (`YYYY-MM`) |
//!
//! ```json
//! {
//!   "luni_solar_table": "/usr/share/iers/nut_ls.txt",
//!   "planetary_table": "/usr/share/iers/nut_pl.txt",
//!   "leap_second_horizon": "2019-01"
//! }
//! ```

use crate::delta_t::{validate_horizon, DeltaTModel, YearMonth, DEFAULT_LEAP_SECOND_HORIZON};
use crate::{TimeError, TimeResult};
use greenwich_core::NutationTables;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_LUNI_SOLAR_TABLE: &str = "GREENWICH_NUT_LS";
pub const ENV_PLANETARY_TABLE: &str = "GREENWICH_NUT_PL";
pub const ENV_LEAP_SECOND_HORIZON: &str = "GREENWICH_LEAP_HORIZON";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreenwichConfig {
    /// Luni-solar nutation table; `None` uses the bundled copy.
    pub luni_solar_table: Option<PathBuf>,
    /// Planetary nutation table; `None` uses the bundled copy.
    pub planetary_table: Option<PathBuf>,
    /// First month for which ΔT is no longer taken from the leap-second
    /// table.
    pub leap_second_horizon: YearMonth,
}

impl Default for GreenwichConfig {
    fn default() -> Self {
        Self {
            luni_solar_table: None,
            planetary_table: None,
            leap_second_horizon: DEFAULT_LEAP_SECOND_HORIZON,
        }
    }
}

impl GreenwichConfig {
    /// Reads a JSON configuration file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> TimeResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| TimeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            TimeError::ConfigurationError(format!("{}: {}", path.display(), e))
        })?;
        log::debug!("read configuration from {}", path.display());
        Ok(config)
    }

    /// Overrides fields from the process environment.
    pub fn apply_env(&mut self) -> TimeResult<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overrides fields from `lookup`, which maps a variable name to its
    /// value. Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> TimeResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(ENV_LUNI_SOLAR_TABLE) {
            self.luni_solar_table = Some(PathBuf::from(path));
        }
        if let Some(path) = get(ENV_PLANETARY_TABLE) {
            self.planetary_table = Some(PathBuf::from(path));
        }
        if let Some(horizon) = get(ENV_LEAP_SECOND_HORIZON) {
            self.leap_second_horizon = horizon.parse().map_err(|e| {
                TimeError::ConfigurationError(format!("{}: {}", ENV_LEAP_SECOND_HORIZON, e))
            })?;
        }
        Ok(())
    }

    /// Checks the settings are consistent: both table paths or neither, and
    /// a leap-second horizon within the table's reach.
    pub fn validate(&self) -> TimeResult<()> {
        if self.luni_solar_table.is_some() != self.planetary_table.is_some() {
            return Err(TimeError::ConfigurationError(
                "luni-solar and planetary tables must be given together".to_string(),
            ));
        }
        validate_horizon(self.leap_second_horizon)
    }

    /// Loads the nutation tables this configuration names.
    pub fn load_tables(&self) -> TimeResult<NutationTables> {
        self.validate()?;
        let tables = match (&self.luni_solar_table, &self.planetary_table) {
            (Some(ls), Some(pl)) => NutationTables::from_paths(ls, pl)?,
            _ => NutationTables::bundled()?,
        };
        Ok(tables)
    }

    pub fn delta_t_model(&self) -> TimeResult<DeltaTModel> {
        DeltaTModel::new(self.leap_second_horizon)
    }
}
