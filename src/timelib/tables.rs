//! Bundled default time-correlation data.
//!
//! Coarse excerpts of the IERS Earth-orientation series, sufficient for
//! sub-second time-scale correlation and arcsecond-level polar motion
//! from 1972 onward. Callers needing finer resolution inject their own
//! tables through [`super::CorrelationTables`].

use once_cell::sync::Lazy;

use super::CorrelationTables;

/// UT1 - TAI in seconds, sampled at the start of even years.
/// Columns: Julian date (UTC), offset seconds.
#[rustfmt::skip]
pub(super) const UT1_MINUS_TAI: &[[f64; 2]] = &[
    [2441317.5, -10.05],
    [2442048.5, -12.31],
    [2442778.5, -14.28],
    [2443509.5, -16.35],
    [2444239.5, -18.36],
    [2444970.5, -19.99],
    [2445700.5, -21.61],
    [2446431.5, -22.69],
    [2447161.5, -23.64],
    [2447892.5, -24.68],
    [2448622.5, -26.13],
    [2449353.5, -27.80],
    [2450083.5, -29.45],
    [2450814.5, -30.79],
    [2451544.5, -31.65],
    [2452275.5, -32.12],
    [2453005.5, -32.39],
    [2453736.5, -32.67],
    [2454466.5, -33.28],
    [2455197.5, -33.89],
    [2455927.5, -34.42],
    [2456658.5, -35.10],
    [2457388.5, -35.92],
    [2458119.5, -36.79],
    [2458849.5, -37.18],
    [2459580.5, -37.11],
    [2460310.5, -37.00],
];

/// UT1 - UTC in seconds. Rows are added at every leap second in addition
/// to the biennial samples; the value holds piecewise (the offset is
/// discontinuous, so no interpolation applies).
/// Columns: Julian date (UTC), offset seconds.
#[rustfmt::skip]
pub(super) const UT1_MINUS_UTC: &[[f64; 2]] = &[
    [2441317.5, -0.05],
    [2441499.5,  0.39],
    [2441683.5,  0.82],
    [2442048.5,  0.69],
    [2442413.5,  0.70],
    [2442778.5,  0.72],
    [2443144.5,  0.68],
    [2443509.5,  0.65],
    [2443874.5,  0.64],
    [2444239.5,  0.64],
    [2444786.5,  0.42],
    [2444970.5,  0.01],
    [2445151.5,  0.61],
    [2445516.5,  0.80],
    [2445700.5,  0.39],
    [2446247.5,  0.58],
    [2446431.5,  0.31],
    [2447161.5,  0.36],
    [2447892.5,  0.32],
    [2448257.5,  0.59],
    [2448622.5, -0.13],
    [2448804.5,  0.45],
    [2449169.5,  0.62],
    [2449353.5,  0.20],
    [2449534.5,  0.79],
    [2450083.5,  0.55],
    [2450630.5,  0.55],
    [2450814.5,  0.21],
    [2451179.5,  0.78],
    [2451544.5,  0.35],
    [2452275.5, -0.12],
    [2453005.5, -0.39],
    [2453736.5,  0.33],
    [2454466.5, -0.28],
    [2454832.5,  0.41],
    [2455197.5,  0.11],
    [2455927.5, -0.42],
    [2456109.5,  0.41],
    [2456658.5, -0.10],
    [2457204.5,  0.29],
    [2457388.5,  0.08],
    [2457754.5,  0.64],
    [2458119.5,  0.21],
    [2458849.5, -0.18],
    [2459580.5, -0.11],
    [2460310.5,  0.00],
];

/// Polar motion, sampled at the start of even years from 2000.
/// Columns: Julian date (UTC), x arcsec, y arcsec.
#[rustfmt::skip]
pub(super) const POLAR_MOTION: &[[f64; 3]] = &[
    [2451544.5,  0.043, 0.378],
    [2452275.5, -0.176, 0.294],
    [2453005.5, -0.141, 0.196],
    [2453736.5,  0.054, 0.383],
    [2454466.5, -0.177, 0.312],
    [2455197.5,  0.109, 0.266],
    [2455927.5,  0.107, 0.301],
    [2456658.5,  0.037, 0.324],
    [2457388.5, -0.005, 0.247],
    [2458119.5,  0.117, 0.264],
    [2458849.5,  0.076, 0.349],
    [2459580.5,  0.076, 0.276],
    [2460310.5,  0.120, 0.270],
];

/// Default correlation tables, built once at first use.
pub static DEFAULT_TABLES: Lazy<CorrelationTables> = Lazy::new(|| CorrelationTables {
    ut1_tai: UT1_MINUS_TAI.to_vec(),
    ut1_utc: UT1_MINUS_UTC.to_vec(),
    polar: POLAR_MOTION.to_vec(),
});
