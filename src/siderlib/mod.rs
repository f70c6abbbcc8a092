//! Greenwich sidereal time
//!
//! GMST follows the IAU 1982 formulation, the one paired with the TEME
//! frame that SGP4 outputs in. GAST adds the equation of the equinoxes
//! from the 1980 nutation angles. Both are degrees in [0, 360).

use crate::constants::{CENTURY_D, J2000};
use crate::mathlib::{cosd, wrap360};
use crate::nutationlib::NutationData;
use crate::timelib::Instant;

/// Greenwich mean sidereal time in degrees, from the instant's UT1.
pub fn gmst(instant: &Instant) -> f64 {
    let du = instant.ut1 - J2000;
    let t = du / CENTURY_D;
    wrap360(
        280.460_618_37 + 360.985_647_366_29 * du + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Greenwich apparent sidereal time in degrees. The equation of the
/// equinoxes uses the true obliquity from the supplied nutation angles.
pub fn gast(instant: &Instant, nutation: &NutationData) -> f64 {
    wrap360(gmst(instant) + nutation.dpsi * cosd(nutation.eps + nutation.deps))
}
