//! IAU 1980 nutation theory
//!
//! Periodic wobble of Earth's rotation axis about its precessing mean
//! position, expressed as corrections in longitude (dpsi) and obliquity
//! (deps) to be applied between the mean-of-date and true-of-date
//! equator. The series is the standard 63-term form of the 1980 theory,
//! truncated at the 0.0003 arcsecond level, evaluated as a pure function
//! of the instant's TT value.

use crate::constants::ASEC2DEG;
use crate::mathlib::{cosd, sind, wrap360};
use crate::timelib::Instant;

/// Nutation angles and the mean obliquity they correct, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutationData {
    /// Mean obliquity of the ecliptic
    pub eps: f64,
    /// Nutation in obliquity
    pub deps: f64,
    /// Nutation in longitude
    pub dpsi: f64,
}

/// Periodic terms of the 1980 series. Columns: multipliers of the five
/// Delaunay arguments (D, M, M', F, Omega), then longitude amplitude and
/// its T rate, then obliquity amplitude and its T rate. Amplitudes are
/// in units of 0.0001 arcseconds.
#[rustfmt::skip]
const TERMS: [[f64; 9]; 63] = [
    [ 0.0,  0.0,  0.0,  0.0,  1.0, -171996.0, -174.2,  92025.0,  8.9],
    [-2.0,  0.0,  0.0,  2.0,  2.0,  -13187.0,   -1.6,   5736.0, -3.1],
    [ 0.0,  0.0,  0.0,  2.0,  2.0,   -2274.0,   -0.2,    977.0, -0.5],
    [ 0.0,  0.0,  0.0,  0.0,  2.0,    2062.0,    0.2,   -895.0,  0.5],
    [ 0.0,  1.0,  0.0,  0.0,  0.0,    1426.0,   -3.4,     54.0, -0.1],
    [ 0.0,  0.0,  1.0,  0.0,  0.0,     712.0,    0.1,     -7.0,  0.0],
    [-2.0,  1.0,  0.0,  2.0,  2.0,    -517.0,    1.2,    224.0, -0.6],
    [ 0.0,  0.0,  0.0,  2.0,  1.0,    -386.0,   -0.4,    200.0,  0.0],
    [ 0.0,  0.0,  1.0,  2.0,  2.0,    -301.0,    0.0,    129.0, -0.1],
    [-2.0, -1.0,  0.0,  2.0,  2.0,     217.0,   -0.5,    -95.0,  0.3],
    [-2.0,  0.0,  1.0,  0.0,  0.0,    -158.0,    0.0,      0.0,  0.0],
    [-2.0,  0.0,  0.0,  2.0,  1.0,     129.0,    0.1,    -70.0,  0.0],
    [ 0.0,  0.0, -1.0,  2.0,  2.0,     123.0,    0.0,    -53.0,  0.0],
    [ 2.0,  0.0,  0.0,  0.0,  0.0,      63.0,    0.0,      0.0,  0.0],
    [ 0.0,  0.0,  1.0,  0.0,  1.0,      63.0,    0.1,    -33.0,  0.0],
    [ 2.0,  0.0, -1.0,  2.0,  2.0,     -59.0,    0.0,     26.0,  0.0],
    [ 0.0,  0.0, -1.0,  0.0,  1.0,     -58.0,   -0.1,     32.0,  0.0],
    [ 0.0,  0.0,  1.0,  2.0,  1.0,     -51.0,    0.0,     27.0,  0.0],
    [-2.0,  0.0,  2.0,  0.0,  0.0,      48.0,    0.0,      0.0,  0.0],
    [ 0.0,  0.0, -2.0,  2.0,  1.0,      46.0,    0.0,    -24.0,  0.0],
    [ 2.0,  0.0,  0.0,  2.0,  2.0,     -38.0,    0.0,     16.0,  0.0],
    [ 0.0,  0.0,  2.0,  2.0,  2.0,     -31.0,    0.0,     13.0,  0.0],
    [ 0.0,  0.0,  2.0,  0.0,  0.0,      29.0,    0.0,      0.0,  0.0],
    [-2.0,  0.0,  1.0,  2.0,  2.0,      29.0,    0.0,    -12.0,  0.0],
    [ 0.0,  0.0,  0.0,  2.0,  0.0,      26.0,    0.0,      0.0,  0.0],
    [-2.0,  0.0,  0.0,  2.0,  0.0,     -22.0,    0.0,      0.0,  0.0],
    [ 0.0,  0.0, -1.0,  2.0,  1.0,      21.0,    0.0,    -10.0,  0.0],
    [ 0.0,  2.0,  0.0,  0.0,  0.0,      17.0,   -0.1,      0.0,  0.0],
    [ 2.0,  0.0, -1.0,  0.0,  1.0,      16.0,    0.0,     -8.0,  0.0],
    [-2.0,  2.0,  0.0,  2.0,  2.0,     -16.0,    0.1,      7.0,  0.0],
    [ 0.0,  1.0,  0.0,  0.0,  1.0,     -15.0,    0.0,      9.0,  0.0],
    [-2.0,  0.0,  1.0,  0.0,  1.0,     -13.0,    0.0,      7.0,  0.0],
    [ 0.0, -1.0,  0.0,  0.0,  1.0,     -12.0,    0.0,      6.0,  0.0],
    [ 0.0,  0.0,  2.0, -2.0,  0.0,      11.0,    0.0,      0.0,  0.0],
    [ 2.0,  0.0, -1.0,  2.0,  1.0,     -10.0,    0.0,      5.0,  0.0],
    [ 2.0,  0.0,  1.0,  2.0,  2.0,      -8.0,    0.0,      3.0,  0.0],
    [ 0.0,  1.0,  0.0,  2.0,  2.0,       7.0,    0.0,     -3.0,  0.0],
    [-2.0,  1.0,  1.0,  0.0,  0.0,      -7.0,    0.0,      0.0,  0.0],
    [ 0.0, -1.0,  0.0,  2.0,  2.0,      -7.0,    0.0,      3.0,  0.0],
    [ 2.0,  0.0,  0.0,  2.0,  1.0,      -7.0,    0.0,      3.0,  0.0],
    [ 2.0,  0.0,  1.0,  0.0,  0.0,       6.0,    0.0,      0.0,  0.0],
    [-2.0,  0.0,  2.0,  2.0,  2.0,       6.0,    0.0,     -3.0,  0.0],
    [-2.0,  0.0,  1.0,  2.0,  1.0,       6.0,    0.0,     -3.0,  0.0],
    [ 2.0,  0.0, -2.0,  0.0,  1.0,      -6.0,    0.0,      3.0,  0.0],
    [ 2.0,  0.0,  0.0,  0.0,  1.0,      -6.0,    0.0,      3.0,  0.0],
    [ 0.0, -1.0,  1.0,  0.0,  0.0,       5.0,    0.0,      0.0,  0.0],
    [-2.0, -1.0,  0.0,  2.0,  1.0,      -5.0,    0.0,      3.0,  0.0],
    [-2.0,  0.0,  0.0,  0.0,  1.0,      -5.0,    0.0,      3.0,  0.0],
    [ 0.0,  0.0,  2.0,  2.0,  1.0,      -5.0,    0.0,      3.0,  0.0],
    [-2.0,  0.0,  2.0,  0.0,  1.0,       4.0,    0.0,      0.0,  0.0],
    [-2.0,  1.0,  0.0,  2.0,  1.0,       4.0,    0.0,      0.0,  0.0],
    [ 0.0,  0.0,  1.0, -2.0,  0.0,       4.0,    0.0,      0.0,  0.0],
    [-1.0,  0.0,  1.0,  0.0,  0.0,      -4.0,    0.0,      0.0,  0.0],
    [-2.0,  1.0,  0.0,  0.0,  0.0,      -4.0,    0.0,      0.0,  0.0],
    [ 1.0,  0.0,  0.0,  0.0,  0.0,      -4.0,    0.0,      0.0,  0.0],
    [ 0.0,  0.0,  1.0,  2.0,  0.0,       3.0,    0.0,      0.0,  0.0],
    [ 0.0,  0.0, -2.0,  2.0,  2.0,      -3.0,    0.0,      0.0,  0.0],
    [-1.0, -1.0,  1.0,  0.0,  0.0,      -3.0,    0.0,      0.0,  0.0],
    [ 0.0,  1.0,  1.0,  0.0,  0.0,      -3.0,    0.0,      0.0,  0.0],
    [ 0.0, -1.0,  1.0,  2.0,  2.0,      -3.0,    0.0,      0.0,  0.0],
    [ 2.0, -1.0, -1.0,  2.0,  2.0,      -3.0,    0.0,      0.0,  0.0],
    [ 0.0,  0.0,  3.0,  2.0,  2.0,      -3.0,    0.0,      0.0,  0.0],
    [ 2.0, -1.0,  0.0,  2.0,  2.0,      -3.0,    0.0,      0.0,  0.0],
];

/// Evaluates the 1980 nutation series at the given instant. TT drives
/// the series. All returned angles are in degrees.
pub fn nutation(instant: &Instant) -> NutationData {
    let t = instant.tt_centuries();
    let t2 = t * t;
    let t3 = t2 * t;

    // Delaunay fundamental arguments, degrees.
    let d = wrap360(297.85036 + 445_267.111480 * t - 0.0019142 * t2 + t3 / 189_474.0);
    let m = wrap360(357.52772 + 35_999.050340 * t - 0.0001603 * t2 - t3 / 300_000.0);
    let mp = wrap360(134.96298 + 477_198.867398 * t + 0.0086972 * t2 + t3 / 56_250.0);
    let f = wrap360(93.27191 + 483_202.017538 * t - 0.0036825 * t2 + t3 / 327_270.0);
    let om = wrap360(125.04452 - 1_934.136261 * t + 0.0020708 * t2 + t3 / 450_000.0);

    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in &TERMS {
        let arg = row[0] * d + row[1] * m + row[2] * mp + row[3] * f + row[4] * om;
        dpsi += (row[5] + row[6] * t) * sind(arg);
        deps += (row[7] + row[8] * t) * cosd(arg);
    }

    NutationData {
        eps: mean_obliquity_deg(t),
        deps: deps * 1e-4 * ASEC2DEG,
        dpsi: dpsi * 1e-4 * ASEC2DEG,
    }
}

/// 1980 polynomial for the mean obliquity of the ecliptic, degrees, at
/// `t` Julian centuries of TT from J2000.0.
pub(crate) fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    (84_381.448 - 46.8150 * t - 0.00059 * t2 + 0.001813 * t2 * t) * ASEC2DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::constants::J2000;

    fn instant_at_tt(tt: f64) -> Instant {
        Instant {
            ut1: tt,
            utc: tt,
            tai: tt,
            tt,
            pm_x: 0.0,
            pm_y: 0.0,
        }
    }

    #[test]
    fn test_meeus_worked_example() {
        // 1987 April 10, 0h TT (Meeus, Astronomical Algorithms, ex. 22.a).
        let data = nutation(&instant_at_tt(2_446_895.5));
        assert_relative_eq!(data.dpsi * 3600.0, -3.788, epsilon = 0.05);
        assert_relative_eq!(data.deps * 3600.0, 9.443, epsilon = 0.05);
        assert_relative_eq!(data.eps, 23.440_946_4, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_obliquity_at_j2000() {
        let data = nutation(&instant_at_tt(J2000));
        assert_relative_eq!(data.eps, 84_381.448 / 3600.0, epsilon = 1e-12);
    }

    #[test]
    fn test_amplitudes_bounded() {
        // The dominant 18.6-year term caps nutation near 17.3" / 9.2".
        for k in 0..40 {
            let data = nutation(&instant_at_tt(J2000 + k as f64 * 200.0));
            assert!(data.dpsi.abs() * 3600.0 < 20.0);
            assert!(data.deps.abs() * 3600.0 < 11.0);
        }
    }
}
