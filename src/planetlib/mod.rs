//! Heliocentric planetary ephemeris
//!
//! Evaluates a truncated VSOP87D series for the eight major planets:
//! heliocentric ecliptic longitude, latitude, and radius, each as up to
//! six polynomial orders in time of periodic terms `a cos(b + c t)` with
//! `t` in Julian millennia of TT since J2000.0. The series deliver the
//! mean ecliptic and equinox of date; the result is reduced to J2000
//! ecliptic axes through the IAU 1976 precession before being returned
//! in meters and meters per second.

mod vsop87d;

use nalgebra::{Matrix3, Vector3};

use crate::constants::{AU_M, DAY_S, EPS_J2000_DEG, J2000, MILLENNIUM_D};
use crate::framelib::precession_matrix;
use crate::mathlib::rot1;
use crate::nutationlib::mean_obliquity_deg;
use crate::timelib::Instant;

/// The eight major planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All planets, ordered by distance from the Sun.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Planet-to-Sun mass ratio.
    fn mass_ratio(self) -> f64 {
        match self {
            Planet::Mercury => 1.0 / 6_023_600.0,
            Planet::Venus => 1.0 / 408_523.71,
            // Earth-Moon barycenter mass
            Planet::Earth => 1.0 / 328_900.56,
            Planet::Mars => 1.0 / 3_098_708.0,
            Planet::Jupiter => 1.0 / 1_047.3486,
            Planet::Saturn => 1.0 / 3_497.898,
            Planet::Uranus => 1.0 / 22_902.98,
            Planet::Neptune => 1.0 / 19_412.24,
        }
    }
}

/// Sums one spherical variable and its time derivative:
/// `sum_k t^k * sum_i a cos(b + c t)`, with the published 1e-8 scale
/// applied. Returns (value, d value / d millennium).
fn eval_series(orders: &[&'static [[f64; 3]]; 6], t: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut rate = 0.0;
    let mut tk = 1.0;
    let mut dtk = 0.0;
    for (k, terms) in orders.iter().enumerate() {
        let mut s = 0.0;
        let mut ds = 0.0;
        for row in *terms {
            let [a, b, c] = *row;
            let phase = b + c * t;
            s += a * phase.cos();
            ds -= a * c * phase.sin();
        }
        value += tk * s;
        rate += dtk * s + tk * ds;
        dtk = (k + 1) as f64 * tk;
        tk *= t;
    }
    (value * 1e-8, rate * 1e-8)
}

/// Rotation from the mean ecliptic of date to J2000 ecliptic axes: up
/// through the equator of date, precession back to the J2000 equator,
/// then down to the J2000 ecliptic.
fn ecliptic_of_date_to_j2000(instant: &Instant) -> Matrix3<f64> {
    let eps_date = mean_obliquity_deg(instant.tt_centuries());
    rot1(EPS_J2000_DEG) * precession_matrix(instant).transpose() * rot1(-eps_date)
}

/// Heliocentric J2000 ecliptic position (m) and velocity (m/s) of a
/// planet. The reduction rotation is applied to both vectors; its own
/// time rate stays below the series truncation and is not modeled.
pub fn heliocentric_position_velocity(
    planet: Planet,
    instant: &Instant,
) -> (Vector3<f64>, Vector3<f64>) {
    let series = vsop87d::TABLES[planet as usize];
    let t = (instant.tt - J2000) / MILLENNIUM_D;
    let (l, dl) = eval_series(&series.l, t);
    let (b, db) = eval_series(&series.b, t);
    let (r, dr) = eval_series(&series.r, t);

    let (sin_l, cos_l) = l.sin_cos();
    let (sin_b, cos_b) = b.sin_cos();
    let pos = Vector3::new(r * cos_b * cos_l, r * cos_b * sin_l, r * sin_b);
    let vel = Vector3::new(
        dr * cos_b * cos_l - r * db * sin_b * cos_l - r * dl * cos_b * sin_l,
        dr * cos_b * sin_l - r * db * sin_b * sin_l + r * dl * cos_b * cos_l,
        dr * sin_b + r * db * cos_b,
    );

    let reduce = ecliptic_of_date_to_j2000(instant);
    // AU per millennium to meters per second.
    let vel_scale = AU_M / (MILLENNIUM_D * DAY_S);
    (reduce * pos * AU_M, reduce * vel * vel_scale)
}

/// Position (m) and velocity (m/s) of the Sun in geocentric ecliptic
/// axes, for illumination work.
pub fn sun_geocentric(instant: &Instant) -> (Vector3<f64>, Vector3<f64>) {
    let (r, v) = heliocentric_position_velocity(Planet::Earth, instant);
    (-r, -v)
}

/// Offset (m, m/s) of the solar-system barycenter from the Sun's center,
/// mass-weighting the eight planets against the total system mass. Moons
/// and minor bodies are excluded, a documented approximation good to a
/// few parts in 1e6 AU.
pub fn barycentric_offset(instant: &Instant) -> (Vector3<f64>, Vector3<f64>) {
    let mut pos = Vector3::zeros();
    let mut vel = Vector3::zeros();
    let mut total_mass = 1.0;
    for planet in Planet::ALL {
        let ratio = planet.mass_ratio();
        let (r, v) = heliocentric_position_velocity(planet, instant);
        pos += ratio * r;
        vel += ratio * v;
        total_mass += ratio;
    }
    (pos / total_mass, vel / total_mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

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
    fn test_earth_position_at_j2000() {
        // Full-series heliocentric ecliptic position of Earth at J2000.0
        // is (-0.1771415, +0.9672697, ~0) AU.
        let (r, _) = heliocentric_position_velocity(Planet::Earth, &instant_at_tt(J2000));
        assert_relative_eq!(r.x / AU_M, -0.17714, epsilon = 1e-4);
        assert_relative_eq!(r.y / AU_M, 0.96727, epsilon = 1e-4);
        assert!(r.z.abs() / AU_M < 1e-4);
    }

    #[test]
    fn test_sun_distance_october_1992() {
        // 1992 October 13.0 TT: solar distance 0.99760775 AU.
        let (r, _) = sun_geocentric(&instant_at_tt(2_448_908.5));
        assert_relative_eq!(r.norm() / AU_M, 0.99760775, epsilon = 1e-5);
    }

    #[test]
    fn test_earth_distance_annual_range() {
        // Perihelion 0.9833 AU, aphelion 1.0167 AU.
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for day in 0..366 {
            let (r, _) = heliocentric_position_velocity(
                Planet::Earth,
                &instant_at_tt(J2000 + day as f64),
            );
            let d = r.norm() / AU_M;
            min = min.min(d);
            max = max.max(d);
        }
        assert_relative_eq!(min, 0.9833, epsilon = 5e-4);
        assert_relative_eq!(max, 1.0167, epsilon = 5e-4);
    }

    #[test]
    fn test_mercury_distance_over_one_orbit() {
        // Perihelion 0.3075 AU, aphelion 0.4667 AU, 88-day period.
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for step in 0..880 {
            let (r, _) = heliocentric_position_velocity(
                Planet::Mercury,
                &instant_at_tt(J2000 + step as f64 * 0.1),
            );
            let d = r.norm() / AU_M;
            min = min.min(d);
            max = max.max(d);
        }
        assert_relative_eq!(min, 0.3075, epsilon = 1e-3);
        assert_relative_eq!(max, 0.4667, epsilon = 1e-3);
    }

    #[test]
    fn test_earth_orbital_speed() {
        let (_, v) = heliocentric_position_velocity(Planet::Earth, &instant_at_tt(J2000));
        let speed = v.norm();
        assert!(speed > 29.2e3 && speed < 30.4e3, "speed {speed} m/s");
    }

    #[test]
    fn test_sun_geocentric_is_reflected_earth() {
        let instant = instant_at_tt(J2000 + 100.0);
        let (re, ve) = heliocentric_position_velocity(Planet::Earth, &instant);
        let (rs, vs) = sun_geocentric(&instant);
        assert_relative_eq!(rs.x, -re.x, epsilon = 1e-3);
        assert_relative_eq!(vs.z, -ve.z, epsilon = 1e-9);
    }

    #[test]
    fn test_barycentric_offset_scale() {
        // Jupiter alone pulls the barycenter about 0.005 AU off the Sun;
        // the full sum stays inside ~0.01 AU.
        let (r, _) = barycentric_offset(&instant_at_tt(J2000));
        let d = r.norm() / AU_M;
        assert!(d > 1e-3 && d < 1e-2, "offset {d} AU");
    }

    #[test]
    fn test_outer_planet_nearly_circular() {
        // Neptune's low eccentricity keeps its distance near 30.07 AU.
        let (r, _) =
            heliocentric_position_velocity(Planet::Neptune, &instant_at_tt(J2000 + 3650.0));
        assert_relative_eq!(r.norm() / AU_M, 30.07, epsilon = 0.4);
    }
}
