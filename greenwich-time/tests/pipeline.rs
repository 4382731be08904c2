use approx::assert_abs_diff_eq;
use greenwich_core::constants::{ARCSEC_TO_RAD, TWOPI};
use greenwich_core::{wrap_0_2pi, NutationTables};
use greenwich_time::sidereal::era00;
use greenwich_time::{
    DeltaTModel, GreenwichConfig, GreenwichTime, JulianDate, TimeError, TtInstant, YearMonth,
};
use std::path::PathBuf;

const TOLERANCE: f64 = 1e-9;

fn pipeline() -> GreenwichTime {
    GreenwichTime::with_bundled_tables().expect("bundled tables")
}

fn bundled_table_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../greenwich-core/data")
        .join(name)
}

#[test]
fn test_reference_epoch_2016() {
    let tt: TtInstant = "20160621".parse().unwrap();
    let report = pipeline().compute(&tt).unwrap();

    assert_eq!(report.jd_tt.to_f64(), 2457560.5);
    assert_abs_diff_eq!(report.jd_ut1.to_f64(), 2457560.499210833, epsilon = 1e-8);
    assert_abs_diff_eq!(report.jc, 0.16469541409993155, epsilon = 1e-15);
    assert_eq!(report.delta_t, 68.184);

    assert_abs_diff_eq!(report.precession.gamb, 8.237157086553656e-06, epsilon = TOLERANCE);
    assert_abs_diff_eq!(report.precession.phib, 0.40905526339492243, epsilon = TOLERANCE);
    assert_abs_diff_eq!(report.precession.psib, 0.004023058053929451, epsilon = TOLERANCE);
    assert_abs_diff_eq!(report.precession.epsa, 0.40905520305699283, epsilon = TOLERANCE);

    assert_abs_diff_eq!(report.sidereal.era, 4.697142823447599, epsilon = TOLERANCE);
    assert_abs_diff_eq!(report.sidereal.eo, -0.0036647180537675754, epsilon = TOLERANCE);
    assert_abs_diff_eq!(report.sidereal.gast, 4.700807541501367, epsilon = TOLERANCE);
    assert_abs_diff_eq!(report.sidereal.gmst, 4.700825726489213, epsilon = TOLERANCE);
    assert_abs_diff_eq!(report.sidereal.ee, -1.818498784622591e-05, epsilon = TOLERANCE);
}

#[test]
fn test_j2000_epoch() {
    let tt: TtInstant = "20000101120000".parse().unwrap();
    let report = pipeline().compute(&tt).unwrap();

    assert_eq!(report.jd_tt, JulianDate::new(2451544.5, 0.5));
    assert_eq!(report.jc, 0.0);
    assert_abs_diff_eq!(report.nutation.delta_psi, -6.754264426468746e-05, epsilon = 1e-15);
    assert_abs_diff_eq!(report.nutation.delta_eps, -2.7970923310985653e-05, epsilon = 1e-15);

    let era = era00(&JulianDate::j2000()).unwrap();
    assert_eq!(era, wrap_0_2pi(TWOPI * 0.7790572732640));
}

#[test]
fn test_sidereal_invariants_across_eras() {
    let pipeline = pipeline();
    for input in [
        "00010101",
        "10000101",
        "16000101",
        "18600615",
        "19720101",
        "19991231235959",
        "20160621123456000250",
        "20190101",
        "20491231",
        "21510101",
        "40000101",
    ] {
        let tt: TtInstant = input.parse().unwrap();
        let r = pipeline.compute(&tt).unwrap();
        let s = r.sidereal;

        for (name, value) in [("ERA", s.era), ("GAST", s.gast), ("GMST", s.gmst)] {
            assert!((0.0..TWOPI).contains(&value), "{} {} = {}", input, name, value);
        }
        assert_eq!(s.ee, s.gast - s.gmst, "{}", input);
        assert!(r.npb.is_rotation_matrix(1e-12), "{}", input);
        assert_abs_diff_eq!(r.npb.determinant(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_equation_of_equinoxes_stays_small() {
    let pipeline = pipeline();
    for year in (1900..=2100).step_by(7) {
        let tt = TtInstant::from_calendar(year, 3, 15, 6, 0, 0, 0).unwrap();
        let ee = pipeline.compute(&tt).unwrap().sidereal.ee;
        let ee = if ee > TWOPI / 2.0 {
            ee - TWOPI
        } else if ee < -TWOPI / 2.0 {
            ee + TWOPI
        } else {
            ee
        };
        assert!(ee.abs() < 1.5 * ARCSEC_TO_RAD * 15.0, "{}: EE = {}", year, ee);
    }
}

#[test]
fn test_nutation_bounds() {
    let nutation = pipeline();
    let model = nutation.nutation_model();
    for i in -300..=300 {
        let t = i as f64 / 10.0;
        let n = model.compute(t);
        assert!(n.delta_psi.abs() < 20.0 * ARCSEC_TO_RAD, "t={} Δψ={}", t, n.delta_psi);
        assert!(n.delta_eps.abs() < 10.0 * ARCSEC_TO_RAD, "t={} Δε={}", t, n.delta_eps);
    }
}

#[test]
fn test_delta_t_boundaries() {
    let model = DeltaTModel::default();
    let dt = |y: i32, m: u32| model.delta_t(YearMonth::new(y, m)).unwrap();

    for year in [-500, 500, 1600, 1700, 1800, 1860, 1900, 1920, 1941, 1961, 1972, 2050] {
        let jump = dt(year, 1) - dt(year - 1, 12);
        assert!(jump.abs() < 1.5, "{}: {}", year, jump);
    }
    assert!((dt(2019, 1) - dt(2018, 12)).abs() < 2.0);
    assert!((dt(2151, 1) - dt(2150, 12)).abs() < 0.5);
}

#[test]
fn test_ut1_round_trip() {
    let pipeline = pipeline();
    for input in ["17500101", "20160621", "20160621235959999999", "22000101"] {
        let tt: TtInstant = input.parse().unwrap();
        let report = pipeline.compute(&tt).unwrap();
        let back = report.ut1.to_tt(report.delta_t).unwrap();
        let diff_ns = (back.datetime() - tt.datetime()).num_nanoseconds().unwrap();
        assert!(diff_ns.abs() < 1_000_000, "{}: {} ns", input, diff_ns);
    }
}

#[test]
fn test_tables_from_paths_match_bundled() {
    let config = GreenwichConfig {
        luni_solar_table: Some(bundled_table_path("nut_ls.txt")),
        planetary_table: Some(bundled_table_path("nut_pl.txt")),
        ..GreenwichConfig::default()
    };
    let from_files = GreenwichTime::from_config(&config).unwrap();
    assert_eq!(
        from_files.nutation_model().tables(),
        &NutationTables::bundled().unwrap()
    );

    let tt: TtInstant = "20160621".parse().unwrap();
    assert_eq!(
        from_files.compute(&tt).unwrap(),
        pipeline().compute(&tt).unwrap()
    );
}

#[test]
fn test_missing_tables_fail_at_start_up() {
    let config = GreenwichConfig {
        luni_solar_table: Some(PathBuf::from("/nonexistent/nut_ls.txt")),
        planetary_table: Some(PathBuf::from("/nonexistent/nut_pl.txt")),
        ..GreenwichConfig::default()
    };
    let err = GreenwichTime::from_config(&config).unwrap_err();
    assert!(matches!(err, TimeError::Core(_)));
    assert!(!err.is_input_error());
}

#[test]
fn test_invalid_input_is_rejected_before_computing() {
    for input in ["2016062", "20160230", "2016-06-21", "20161321000000"] {
        let err = input.parse::<TtInstant>().unwrap_err();
        assert!(err.is_input_error(), "{}", input);
    }
}

#[test]
fn test_parallel_evaluation_matches_sequential() {
    let pipeline = pipeline();
    let instants: Vec<TtInstant> = (1..=12)
        .map(|month| TtInstant::from_calendar(2016, month, 1, 0, 0, 0, 0).unwrap())
        .collect();
    let sequential: Vec<_> = instants
        .iter()
        .map(|tt| pipeline.compute(tt).unwrap())
        .collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = instants
            .iter()
            .map(|tt| scope.spawn(|| pipeline.compute(tt).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
