//! End-to-end tracking flow: parse a catalog record, resolve the time
//! scales, propagate, and walk the state vector down to a ground
//! observer's horizon frame.

use approx::assert_relative_eq;
use skytrack::framelib::{transform, Frame, Observer};
use skytrack::sgp4lib::propagate;
use skytrack::timelib::{TimeCorrelation, TimeScale};
use skytrack::tlelib::TleRecord;

const CAL_L1: &str = "1 00900U 64063C   23161.95522785  .00000702  00000+0  73232-3 0  9992";
const CAL_L2: &str = "2 00900  90.1903  47.7368 0028440  26.7560 344.5702 13.74340666919893";

#[test]
fn tle_to_topocentric_pipeline() {
    let _ = env_logger::builder().is_test(true).try_init();
    let rec = TleRecord::parse("CALSPHERE 1", CAL_L1, CAL_L2).unwrap();
    assert!(rec.checksum_valid);

    let correlation = TimeCorrelation::default();
    let instant = correlation.instant_from(TimeScale::Utc, rec.epoch_jd_utc + 1000.0 / 1440.0);

    let teme = propagate(&rec, &instant).unwrap();
    assert_eq!(teme.frame, Frame::Teme);
    assert!(teme.position.norm() > 6.6e6 && teme.position.norm() < 7.5e6);

    // Earth-fixed: same geocentric distance, different axes.
    let efi = transform(&teme, Frame::Efi, None, None).unwrap();
    assert_relative_eq!(
        efi.position.norm(),
        teme.position.norm(),
        max_relative = 1e-9
    );

    // Topocentric range from a mid-latitude site stays within
    // geometric limits: above perigee height, below the far side.
    let observer = Observer {
        lat_deg: 48.2,
        lon_deg: 16.37,
        alt_m: 190.0,
    };
    let enu = transform(&teme, Frame::Enu, Some(&observer), None).unwrap();
    let range = enu.position.norm();
    assert!(range > 5.0e5 && range < 1.5e7, "range {range} m");

    // The round trip back to TEME closes.
    let back = transform(&enu, Frame::Teme, Some(&observer), None).unwrap();
    assert_relative_eq!(
        (back.position - teme.position).norm() / teme.position.norm(),
        0.0,
        epsilon = 1e-6
    );
}

#[test]
fn omm_and_tle_paths_agree() {
    let rec = TleRecord::parse("CALSPHERE 1", CAL_L1, CAL_L2).unwrap();
    let from_omm = TleRecord::from_omm(&rec.to_omm()).unwrap();

    let correlation = TimeCorrelation::default();
    let instant = correlation.instant_from(TimeScale::Utc, rec.epoch_jd_utc + 0.25);

    let a = propagate(&rec, &instant).unwrap();
    let b = propagate(&from_omm, &instant).unwrap();
    assert!((a.position - b.position).norm() < 1.0, "paths diverge");
}
