//! Plain-text rendering of a [`GreenwichReport`].
//!
//! One `label = value` line per quantity, labels right-aligned to seven
//! columns. Sidereal times are followed by their value in degrees and in
//! hours, minutes and seconds.

use crate::pipeline::GreenwichReport;
use greenwich_core::constants::RAD_TO_DEG;
use greenwich_core::deg_to_hms;
use std::fmt;

const LABEL_WIDTH: usize = 7;

fn line(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "{:>width$} = {}", label, value, width = LABEL_WIDTH)
}

/// Radians, then degrees and h/m/s on continuation lines.
fn sidereal_lines(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    radians: f64,
    last: bool,
) -> fmt::Result {
    let degrees = radians * RAD_TO_DEG;
    line(f, label, format_args!("{} rad", radians))?;
    line(f, "", format_args!("{} °", degrees))?;
    if last {
        write!(f, "{:>width$} = {}", "", deg_to_hms(degrees), width = LABEL_WIDTH)
    } else {
        line(f, "", deg_to_hms(degrees))
    }
}

impl fmt::Display for GreenwichReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        line(f, "TT", self.tt)?;
        line(f, "UT1", self.ut1)?;
        line(f, "JD(TT)", self.jd_tt.to_f64())?;
        line(f, "JD(UT1)", self.jd_ut1.to_f64())?;
        line(f, "JC", self.jc)?;
        line(f, "DT", self.delta_t)?;
        line(f, "GAMMA_", self.precession.gamb)?;
        line(f, "PHI_", self.precession.phib)?;
        line(f, "PSI_", self.precession.psib)?;
        line(f, "EPS_A", self.precession.epsa)?;
        line(f, "D_PSI", self.nutation.delta_psi)?;
        line(f, "D_EPS", self.nutation.delta_eps)?;
        line(f, "r_mtx", "")?;
        writeln!(f, "{}", self.npb)?;
        line(f, "x", self.cio.cip.x)?;
        line(f, "y", self.cio.cip.y)?;
        line(f, "s", self.cio.s)?;
        line(f, "ERA", format_args!("{} rad", self.sidereal.era))?;
        line(f, "EO", format_args!("{} rad", self.sidereal.eo))?;
        sidereal_lines(f, "GAST", self.sidereal.gast, false)?;
        sidereal_lines(f, "GMST", self.sidereal.gmst, false)?;
        sidereal_lines(f, "EE", self.sidereal.ee, true)
    }
}

#[cfg(test)]
mod tests {
    use crate::pipeline::GreenwichTime;
    use crate::TtInstant;

    fn render(input: &str) -> String {
        let tt: TtInstant = input.parse().unwrap();
        GreenwichTime::with_bundled_tables()
            .unwrap()
            .compute(&tt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_layout() {
        let text = render("20160621");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "     TT = 2016-06-21 00:00:00.000000");
        assert_eq!(lines[1], "    UT1 = 2016-06-20 23:58:51.816000");
        assert_eq!(lines[2], " JD(TT) = 2457560.5");
        assert_eq!(lines[5], "     DT = 68.184");
        assert_eq!(lines[12], "  r_mtx = ");
        assert!(lines[13].starts_with("[["));
        assert!(lines[15].ends_with("]]"));
        assert!(lines[19].starts_with("    ERA = 4.6971428234"));
        assert_eq!(lines.len(), 30);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_sidereal_blocks() {
        let text = render("20160621");
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[20].starts_with("     EO = -0.00366471"));
        assert!(lines[21].starts_with("   GAST = 4.7008075415"));
        assert!(lines[21].ends_with(" rad"));
        assert!(lines[22].starts_with("        = 269.33"));
        assert!(lines[22].ends_with(" °"));
        assert_eq!(lines[23], "        = 17 h 57 m 20.744 s");
        assert!(lines[24].starts_with("   GMST = "));
        assert!(lines[27].starts_with("     EE = -0.0000181"));
        assert!(lines[29].starts_with("        = - 0 h 00 m 00.2"));
    }
}
