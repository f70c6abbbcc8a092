//! Time-scale correlation engine
//!
//! Resolves a single physical moment across the four time scales the
//! rest of the crate consumes: UT1 (Earth-rotation universal time), UTC
//! (civil time with leap seconds), TAI (atomic time), and TT (terrestrial
//! dynamical time). The relationships are table-driven: UT1-TAI and polar
//! motion are smooth and interpolated linearly, while UT1-UTC is
//! discontinuous at leap seconds and therefore read from the left-hand
//! table row only.
//!
//! All times are Julian dates. Out-of-domain lookups clamp to the nearest
//! table boundary; the tables bundled in [`tables`] are coarse defaults
//! and callers may inject finer ones.

mod tables;

use chrono::{DateTime, Utc};
use log::debug;

use crate::constants::{DAY_S, J2000, CENTURY_D, TT_MINUS_TAI_S};

pub use tables::DEFAULT_TABLES;

/// Unix epoch (1970-01-01T00:00:00Z) as a Julian date
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// The four supported time scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeScale {
    /// Universal time tied to Earth rotation
    Ut1,
    /// Coordinated universal (civil) time
    Utc,
    /// International atomic time
    Tai,
    /// Terrestrial (dynamical) time
    Tt,
}

/// One physical moment expressed in every supported time scale, plus the
/// polar motion angles in effect at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    /// Julian date, UT1
    pub ut1: f64,
    /// Julian date, UTC
    pub utc: f64,
    /// Julian date, TAI
    pub tai: f64,
    /// Julian date, TT
    pub tt: f64,
    /// Polar motion x component, arcseconds
    pub pm_x: f64,
    /// Polar motion y component, arcseconds
    pub pm_y: f64,
}

impl Instant {
    /// Julian centuries of TT elapsed since J2000.0
    pub fn tt_centuries(&self) -> f64 {
        (self.tt - J2000) / CENTURY_D
    }
}

/// Correlation data injected into [`TimeCorrelation`]. Each table is
/// sorted ascending by its Julian-date column.
#[derive(Debug, Clone)]
pub struct CorrelationTables {
    /// Rows of (JD, UT1 - TAI seconds)
    pub ut1_tai: Vec<[f64; 2]>,
    /// Rows of (JD, UT1 - UTC seconds); piecewise-constant between rows
    pub ut1_utc: Vec<[f64; 2]>,
    /// Rows of (JD, polar motion x arcsec, polar motion y arcsec)
    pub polar: Vec<[f64; 3]>,
}

/// Table-driven converter between the four time scales.
#[derive(Debug, Clone)]
pub struct TimeCorrelation {
    tables: CorrelationTables,
}

impl Default for TimeCorrelation {
    fn default() -> Self {
        Self::new(DEFAULT_TABLES.clone())
    }
}

impl TimeCorrelation {
    /// Builds a converter from the given tables.
    pub fn new(tables: CorrelationTables) -> Self {
        debug!(
            "time correlation tables: {} UT1-TAI rows, {} UT1-UTC rows, {} polar rows",
            tables.ut1_tai.len(),
            tables.ut1_utc.len(),
            tables.polar.len()
        );
        Self { tables }
    }

    /// UT1 - TAI in seconds at the given Julian date, linearly
    /// interpolated and clamped to the table domain.
    pub fn ut1_minus_tai(&self, jd: f64) -> f64 {
        interp_linear_2(&self.tables.ut1_tai, jd)
    }

    /// UT1 - UTC in seconds at the given Julian date. The offset jumps
    /// at leap seconds, so the value of the last row at or before `jd`
    /// is returned without interpolation.
    pub fn ut1_minus_utc(&self, jd: f64) -> f64 {
        let t = &self.tables.ut1_utc;
        let idx = t.partition_point(|row| row[0] <= jd);
        if idx == 0 {
            t[0][1]
        } else {
            t[idx - 1][1]
        }
    }

    /// Polar motion (x, y) in arcseconds at the given Julian date,
    /// linearly interpolated and clamped to the table domain.
    pub fn polar_motion(&self, jd: f64) -> (f64, f64) {
        let t = &self.tables.polar;
        let idx = t.partition_point(|row| row[0] <= jd);
        if idx == 0 {
            return (t[0][1], t[0][2]);
        }
        if idx == t.len() {
            let last = t[t.len() - 1];
            return (last[1], last[2]);
        }
        let (lo, hi) = (t[idx - 1], t[idx]);
        let f = (jd - lo[0]) / (hi[0] - lo[0]);
        (lo[1] + f * (hi[1] - lo[1]), lo[2] + f * (hi[2] - lo[2]))
    }

    /// Resolves a Julian date in one scale into an [`Instant`] carrying
    /// all four scales and the polar motion angles.
    pub fn instant_from(&self, scale: TimeScale, jd: f64) -> Instant {
        let ut1 = match scale {
            TimeScale::Ut1 => jd,
            TimeScale::Utc => self.utc_to_ut1(jd),
            TimeScale::Tai => self.tai_to_ut1(jd),
            TimeScale::Tt => self.tai_to_ut1(jd - TT_MINUS_TAI_S / DAY_S),
        };
        let tai = match scale {
            TimeScale::Tai => jd,
            TimeScale::Tt => jd - TT_MINUS_TAI_S / DAY_S,
            _ => ut1 - self.ut1_minus_tai(ut1) / DAY_S,
        };
        let utc = match scale {
            TimeScale::Utc => jd,
            _ => ut1 - self.ut1_minus_utc(ut1) / DAY_S,
        };
        let tt = tai + TT_MINUS_TAI_S / DAY_S;
        let (pm_x, pm_y) = self.polar_motion(utc);
        Instant {
            ut1,
            utc,
            tai,
            tt,
            pm_x,
            pm_y,
        }
    }

    fn tai_to_ut1(&self, tai: f64) -> f64 {
        // The table argument is nominally UT1; one refinement step is
        // plenty given the offsets stay under a minute.
        let trial = tai + self.ut1_minus_tai(tai) / DAY_S;
        tai + self.ut1_minus_tai(trial) / DAY_S
    }

    fn ut1_to_utc(&self, ut1: f64) -> f64 {
        ut1 - self.ut1_minus_utc(ut1) / DAY_S
    }

    fn utc_to_ut1(&self, utc: f64) -> f64 {
        let trial = utc + self.ut1_minus_utc(utc) / DAY_S;
        if (self.ut1_to_utc(trial) - utc).abs() * DAY_S <= 1e-3 {
            return trial;
        }
        // Within a second of a leap boundary the forward lookup may have
        // used the wrong side of the step. Re-query the offset one second
        // to either side and keep the candidate whose round trip closes.
        for probe in [utc - 1.0 / DAY_S, utc + 1.0 / DAY_S] {
            let candidate = utc + self.ut1_minus_utc(probe) / DAY_S;
            if (self.ut1_to_utc(candidate) - utc).abs() * DAY_S <= 1e-3 {
                return candidate;
            }
        }
        trial
    }
}

/// Julian date (UTC) of a chrono UTC datetime.
pub fn jd_from_datetime(dt: &DateTime<Utc>) -> f64 {
    dt.timestamp_micros() as f64 / (DAY_S * 1e6) + UNIX_EPOCH_JD
}

/// Chrono UTC datetime of a Julian date (UTC), to microsecond
/// resolution. Returns `None` outside chrono's representable range.
pub fn datetime_from_jd(jd: f64) -> Option<DateTime<Utc>> {
    let micros = ((jd - UNIX_EPOCH_JD) * DAY_S * 1e6).round() as i64;
    DateTime::<Utc>::from_timestamp_micros(micros)
}

fn interp_linear_2(t: &[[f64; 2]], jd: f64) -> f64 {
    let idx = t.partition_point(|row| row[0] <= jd);
    if idx == 0 {
        return t[0][1];
    }
    if idx == t.len() {
        return t[t.len() - 1][1];
    }
    let (lo, hi) = (t[idx - 1], t[idx]);
    lo[1] + (jd - lo[0]) / (hi[0] - lo[0]) * (hi[1] - lo[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    #[test]
    fn test_tt_tai_offset() {
        let corr = TimeCorrelation::default();
        let instant = corr.instant_from(TimeScale::Tai, 2_460_000.5);
        // Differencing day-scale Julian dates leaves a few 1e-5 s of
        // float rounding, so compare at the representation's resolution.
        assert_relative_eq!(
            (instant.tt - instant.tai) * DAY_S,
            32.184,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_ut1_tai_interpolation() {
        let corr = TimeCorrelation::default();
        // Between the 2022 and 2024 sample rows.
        let jd = 2_460_000.5;
        let f = (jd - 2_459_580.5) / (2_460_310.5 - 2_459_580.5);
        let expected = -37.11 + f * (-37.00 - -37.11);
        assert_relative_eq!(corr.ut1_minus_tai(jd), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_ut1_utc_no_interpolation() {
        let corr = TimeCorrelation::default();
        // Mid-span values equal the left-hand row exactly.
        assert_relative_eq!(corr.ut1_minus_utc(2_459_900.0), -0.11, epsilon = 1e-12);
        assert_relative_eq!(corr.ut1_minus_utc(2_459_580.5), -0.11, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_domain_clamps() {
        let corr = TimeCorrelation::default();
        assert_relative_eq!(corr.ut1_minus_tai(2_430_000.0), -10.05, epsilon = 1e-12);
        assert_relative_eq!(corr.ut1_minus_tai(2_470_000.0), -37.00, epsilon = 1e-12);
        assert_relative_eq!(corr.ut1_minus_utc(2_430_000.0), -0.05, epsilon = 1e-12);
        let (x, y) = corr.polar_motion(2_400_000.0);
        assert_relative_eq!(x, 0.043, epsilon = 1e-12);
        assert_relative_eq!(y, 0.378, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_ordering() {
        // TT leads TAI leads UTC in the modern era.
        let corr = TimeCorrelation::default();
        let instant = corr.instant_from(TimeScale::Utc, 2_460_000.5);
        assert!(instant.tt > instant.tai);
        assert!(instant.tai > instant.utc);
    }

    #[test]
    fn test_civil_round_trip_within_1ms() {
        let corr = TimeCorrelation::default();
        for jd in [2_451_544.6, 2_455_000.25, 2_460_000.5] {
            let instant = corr.instant_from(TimeScale::Utc, jd);
            assert_relative_eq!(instant.utc, jd, epsilon = 1e-12);
            let back = corr.instant_from(TimeScale::Ut1, instant.ut1);
            assert!((back.utc - jd).abs() * DAY_S <= 1e-3);
        }
    }

    #[test]
    fn test_instant_agrees_across_entry_scales() {
        let corr = TimeCorrelation::default();
        let a = corr.instant_from(TimeScale::Utc, 2_460_000.5);
        let b = corr.instant_from(TimeScale::Tt, a.tt);
        assert!((a.ut1 - b.ut1).abs() * DAY_S <= 1e-3);
        assert!((a.tai - b.tai).abs() * DAY_S <= 1e-3);
    }

    #[test]
    fn test_tt_centuries_at_j2000() {
        let instant = Instant {
            ut1: J2000,
            utc: J2000,
            tai: J2000,
            tt: J2000,
            pm_x: 0.0,
            pm_y: 0.0,
        };
        assert_relative_eq!(instant.tt_centuries(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_calendar_conversion() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_relative_eq!(jd_from_datetime(&dt), J2000, epsilon = 1e-9);
        let back = datetime_from_jd(J2000).unwrap();
        assert_eq!(back, dt);
    }
}
