//! greenwich: apparent and mean sidereal time at Greenwich for a TT instant.
//!
//! ```text
//! greenwich                       # now, system clock read as TT
//! greenwich 20160621              # YYYYMMDD
//! greenwich 20160621123456        # YYYYMMDDhhmmss
//! greenwich 20160621123456000250  # YYYYMMDDhhmmssuuuuuu
//! ```
//!
//! Input that is not a digit timestamp exits with status 1 and no output.
//! A timestamp naming no real date prints `Invalid date!`, also status 1.

use anyhow::Context;
use clap::Parser;
use greenwich_time::{GreenwichConfig, GreenwichTime, TimeError, TtInstant, YearMonth};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "greenwich")]
#[command(about = "Greenwich sidereal time (IAU 2006/2000A) for a TT instant")]
#[command(version)]
struct Cli {
    /// TT instant as YYYYMMDD, YYYYMMDDhhmmss or YYYYMMDDhhmmssuuuuuu
    /// (default: now)
    datetime: Option<String>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Luni-solar nutation coefficient table
    #[arg(long, requires = "planetary")]
    luni_solar: Option<PathBuf>,

    /// Planetary nutation coefficient table
    #[arg(long, requires = "luni_solar")]
    planetary: Option<PathBuf>,

    /// First month (YYYY-MM) for which ΔT is extrapolated instead of taken
    /// from the leap-second table
    #[arg(long)]
    leap_horizon: Option<YearMonth>,

    /// Log every pipeline stage
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<GreenwichConfig> {
    let mut config = match &cli.config {
        Some(path) => GreenwichConfig::from_file(path)
            .with_context(|| format!("reading configuration {}", path.display()))?,
        None => GreenwichConfig::default(),
    };
    config
        .apply_env()
        .context("reading configuration from the environment")?;

    if let Some(path) = &cli.luni_solar {
        config.luni_solar_table = Some(path.clone());
    }
    if let Some(path) = &cli.planetary {
        config.planetary_table = Some(path.clone());
    }
    if let Some(horizon) = cli.leap_horizon {
        config.leap_second_horizon = horizon;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Text printed for rejected input. Text that is not a digit timestamp
/// exits without output; a timestamp naming no real date is reported.
fn rejection_message(err: &TimeError) -> Option<&'static str> {
    match err {
        TimeError::ParseError(_) => None,
        _ => Some("Invalid date!"),
    }
}

fn reject(err: &TimeError) -> ExitCode {
    log::debug!("{}", err);
    if let Some(message) = rejection_message(err) {
        println!("{}", message);
    }
    ExitCode::FAILURE
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let tt = match cli.datetime.as_deref() {
        Some(text) => match text.parse::<TtInstant>() {
            Ok(tt) => tt,
            Err(err) => return Ok(reject(&err)),
        },
        None => TtInstant::now(),
    };

    let config = load_config(&cli)?;
    let pipeline = GreenwichTime::from_config(&config).context("loading nutation tables")?;

    match pipeline.compute(&tt) {
        Ok(report) => {
            println!("{}", report);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_input_error() => Ok(reject(&err)),
        Err(err) => Err(err).with_context(|| format!("computing sidereal time for {}", tt)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_is_silent() {
        for input in ["2016-06-21", "2016062", "201606211234", "now"] {
            let err = input.parse::<TtInstant>().unwrap_err();
            assert_eq!(rejection_message(&err), None, "{}", input);
        }
    }

    #[test]
    fn test_nonexistent_date_is_reported() {
        for input in ["20160230", "20161301", "20160621240000"] {
            let err = input.parse::<TtInstant>().unwrap_err();
            assert_eq!(rejection_message(&err), Some("Invalid date!"), "{}", input);
        }
    }
}
