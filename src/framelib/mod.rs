//! Reference-frame transform pipeline
//!
//! Nine frames connected by pure one-hop transforms:
//!
//! ```text
//! HelEcl - GeoEcl - J2000 - MoD - ToD - Pef - Efi - Enu
//!                                        |
//!                                       Teme
//! ```
//!
//! Every hop is invertible and every transform returns a fresh
//! [`Osv`]; nothing is mutated in place. The composite [`transform`]
//! walks the chain, computing nutation once per call when a hop needs
//! it and none was supplied. TEME, the frame SGP4 natively outputs in,
//! joins the chain at the pseudo-Earth-fixed frame through GMST, while
//! true-of-date reaches it through GAST.

use nalgebra::{Matrix3, Vector3};

use crate::constants::{
    ASEC2DEG, EARTH_ANGVEL_RAD_S, EPS_J2000_DEG, WGS84_INVERSE_FLATTENING, WGS84_RADIUS_M,
};
use crate::mathlib::{cosd, rot1, rot2, rot3, sind};
use crate::nutationlib::{nutation, NutationData};
use crate::planetlib::{heliocentric_position_velocity, Planet};
use crate::siderlib::{gast, gmst};
use crate::timelib::Instant;
use crate::{Result, SkytrackError};

/// Reference frames supported by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Heliocentric ecliptic
    HelEcl,
    /// Geocentric ecliptic
    GeoEcl,
    /// Geocentric equatorial, mean equator and equinox of J2000.0
    J2000,
    /// Mean equator and equinox of date
    Mod,
    /// True equator and equinox of date
    Tod,
    /// True equator, mean equinox (SGP4 output frame)
    Teme,
    /// Pseudo-Earth-fixed (rotating, no polar motion)
    Pef,
    /// Earth-fixed ITRS-style (rotating, polar motion applied)
    Efi,
    /// Topocentric east-north-up
    Enu,
}

/// Orbit state vector: position and velocity tagged with the frame they
/// are expressed in and the instant they are valid at. Immutable; every
/// transform returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Osv {
    pub frame: Frame,
    /// Position in meters
    pub position: Vector3<f64>,
    /// Velocity in meters per second
    pub velocity: Vector3<f64>,
    pub instant: Instant,
}

/// Ground observer in WGS84 geodetic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub alt_m: f64,
}

impl Observer {
    /// Observer position in the Earth-fixed frame, meters.
    pub fn efi_position(&self) -> Vector3<f64> {
        let f = 1.0 / WGS84_INVERSE_FLATTENING;
        let e2 = f * (2.0 - f);
        let sin_lat = sind(self.lat_deg);
        let cos_lat = cosd(self.lat_deg);
        let n = WGS84_RADIUS_M / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        Vector3::new(
            (n + self.alt_m) * cos_lat * cosd(self.lon_deg),
            (n + self.alt_m) * cos_lat * sind(self.lon_deg),
            (n * (1.0 - e2) + self.alt_m) * sin_lat,
        )
    }

    /// Rotation from Earth-fixed axes to local east-north-up axes.
    fn enu_matrix(&self) -> Matrix3<f64> {
        let (sin_lat, cos_lat) = (sind(self.lat_deg), cosd(self.lat_deg));
        let (sin_lon, cos_lon) = (sind(self.lon_deg), cosd(self.lon_deg));
        #[rustfmt::skip]
        let m = Matrix3::new(
                    -sin_lon,            cos_lon,     0.0,
          -sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat,
           cos_lat * cos_lon,  cos_lat * sin_lon, sin_lat,
        );
        m
    }
}

fn expect_frame(osv: &Osv, frame: Frame) -> Result<()> {
    if osv.frame == frame {
        Ok(())
    } else {
        Err(SkytrackError::Frame(format!(
            "expected {:?} input, got {:?}",
            frame, osv.frame
        )))
    }
}

fn rotated(osv: &Osv, m: Matrix3<f64>, frame: Frame) -> Osv {
    Osv {
        frame,
        position: m * osv.position,
        velocity: m * osv.velocity,
        instant: osv.instant,
    }
}

/// IAU 1976 precession rotation, J2000 to mean-of-date.
pub(crate) fn precession_matrix(instant: &Instant) -> Matrix3<f64> {
    let t = instant.tt_centuries();
    let zeta = (2306.2181 * t + 0.30188 * t * t + 0.017998 * t * t * t) * ASEC2DEG;
    let z = (2306.2181 * t + 1.09468 * t * t + 0.018203 * t * t * t) * ASEC2DEG;
    let theta = (2004.3109 * t - 0.42665 * t * t - 0.041833 * t * t * t) * ASEC2DEG;
    rot3(-z) * rot2(theta) * rot3(-zeta)
}

/// Nutation rotation, mean-of-date to true-of-date.
fn nutation_matrix(data: &NutationData) -> Matrix3<f64> {
    rot1(-(data.eps + data.deps)) * rot3(-data.dpsi) * rot1(data.eps)
}

/// Polar motion rotation, pseudo-Earth-fixed to Earth-fixed.
fn polar_motion_matrix(instant: &Instant) -> Matrix3<f64> {
    rot1(-instant.pm_y * ASEC2DEG) * rot2(-instant.pm_x * ASEC2DEG)
}

/// Translates from heliocentric to geocentric ecliptic axes.
pub fn hel_ecl_to_geo_ecl(osv: &Osv) -> Result<Osv> {
    expect_frame(osv, Frame::HelEcl)?;
    let (re, ve) = heliocentric_position_velocity(Planet::Earth, &osv.instant);
    Ok(Osv {
        frame: Frame::GeoEcl,
        position: osv.position - re,
        velocity: osv.velocity - ve,
        instant: osv.instant,
    })
}

/// Translates from geocentric back to heliocentric ecliptic axes.
pub fn geo_ecl_to_hel_ecl(osv: &Osv) -> Result<Osv> {
    expect_frame(osv, Frame::GeoEcl)?;
    let (re, ve) = heliocentric_position_velocity(Planet::Earth, &osv.instant);
    Ok(Osv {
        frame: Frame::HelEcl,
        position: osv.position + re,
        velocity: osv.velocity + ve,
        instant: osv.instant,
    })
}

/// Rotates ecliptic axes to the J2000 mean equator. Purely geometric;
/// only the fixed J2000 obliquity enters.
pub fn geo_ecl_to_j2000(osv: &Osv) -> Result<Osv> {
    expect_frame(osv, Frame::GeoEcl)?;
    Ok(rotated(osv, rot1(-EPS_J2000_DEG), Frame::J2000))
}

pub fn j2000_to_geo_ecl(osv: &Osv) -> Result<Osv> {
    expect_frame(osv, Frame::J2000)?;
    Ok(rotated(osv, rot1(EPS_J2000_DEG), Frame::GeoEcl))
}

/// Applies IAU 1976 precession, J2000 to mean-of-date.
pub fn j2000_to_mod(osv: &Osv) -> Result<Osv> {
    expect_frame(osv, Frame::J2000)?;
    Ok(rotated(osv, precession_matrix(&osv.instant), Frame::Mod))
}

pub fn mod_to_j2000(osv: &Osv) -> Result<Osv> {
    expect_frame(osv, Frame::Mod)?;
    Ok(rotated(
        osv,
        precession_matrix(&osv.instant).transpose(),
        Frame::J2000,
    ))
}

/// Applies nutation, mean-of-date to true-of-date.
pub fn mod_to_tod(osv: &Osv, data: &NutationData) -> Result<Osv> {
    expect_frame(osv, Frame::Mod)?;
    Ok(rotated(osv, nutation_matrix(data), Frame::Tod))
}

pub fn tod_to_mod(osv: &Osv, data: &NutationData) -> Result<Osv> {
    expect_frame(osv, Frame::Tod)?;
    Ok(rotated(osv, nutation_matrix(data).transpose(), Frame::Mod))
}

/// Rotates true-of-date into the rotating pseudo-Earth-fixed frame
/// through GAST. The velocity loses the Earth-rotation term.
pub fn tod_to_pef(osv: &Osv, data: &NutationData) -> Result<Osv> {
    expect_frame(osv, Frame::Tod)?;
    spin_down(osv, gast(&osv.instant, data), Frame::Pef)
}

pub fn pef_to_tod(osv: &Osv, data: &NutationData) -> Result<Osv> {
    expect_frame(osv, Frame::Pef)?;
    spin_up(osv, gast(&osv.instant, data), Frame::Tod)
}

/// Rotates TEME into the pseudo-Earth-fixed frame through GMST. TEME
/// shares the true equator with ToD but keeps the mean equinox, which is
/// exactly the GAST/GMST difference.
pub fn teme_to_pef(osv: &Osv) -> Result<Osv> {
    expect_frame(osv, Frame::Teme)?;
    spin_down(osv, gmst(&osv.instant), Frame::Pef)
}

pub fn pef_to_teme(osv: &Osv) -> Result<Osv> {
    expect_frame(osv, Frame::Pef)?;
    spin_up(osv, gmst(&osv.instant), Frame::Teme)
}

/// Inertial-to-rotating leg shared by the GAST and GMST hops.
fn spin_down(osv: &Osv, angle_deg: f64, frame: Frame) -> Result<Osv> {
    let m = rot3(angle_deg);
    let position = m * osv.position;
    let omega = Vector3::new(0.0, 0.0, EARTH_ANGVEL_RAD_S);
    let velocity = m * osv.velocity - omega.cross(&position);
    Ok(Osv {
        frame,
        position,
        velocity,
        instant: osv.instant,
    })
}

fn spin_up(osv: &Osv, angle_deg: f64, frame: Frame) -> Result<Osv> {
    let m = rot3(-angle_deg);
    let omega = Vector3::new(0.0, 0.0, EARTH_ANGVEL_RAD_S);
    Ok(Osv {
        frame,
        position: m * osv.position,
        velocity: m * (osv.velocity + omega.cross(&osv.position)),
        instant: osv.instant,
    })
}

/// Applies polar motion, pseudo-Earth-fixed to Earth-fixed. The polar
/// motion rate is far below measurement noise, so velocity only rotates.
pub fn pef_to_efi(osv: &Osv) -> Result<Osv> {
    expect_frame(osv, Frame::Pef)?;
    Ok(rotated(osv, polar_motion_matrix(&osv.instant), Frame::Efi))
}

pub fn efi_to_pef(osv: &Osv) -> Result<Osv> {
    expect_frame(osv, Frame::Efi)?;
    Ok(rotated(
        osv,
        polar_motion_matrix(&osv.instant).transpose(),
        Frame::Pef,
    ))
}

/// Earth-fixed to topocentric east-north-up about the given observer.
pub fn efi_to_enu(osv: &Osv, observer: &Observer) -> Result<Osv> {
    expect_frame(osv, Frame::Efi)?;
    let m = observer.enu_matrix();
    Ok(Osv {
        frame: Frame::Enu,
        position: m * (osv.position - observer.efi_position()),
        velocity: m * osv.velocity,
        instant: osv.instant,
    })
}

pub fn enu_to_efi(osv: &Osv, observer: &Observer) -> Result<Osv> {
    expect_frame(osv, Frame::Enu)?;
    let m = observer.enu_matrix().transpose();
    Ok(Osv {
        frame: Frame::Efi,
        position: m * osv.position + observer.efi_position(),
        velocity: m * osv.velocity,
        instant: osv.instant,
    })
}

/// Rotates a perifocal state (x toward perigee, z along angular
/// momentum) into the inertial frame of the elements (node, inclination,
/// argument of perigee in degrees).
pub fn perifocal_to_inertial(
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    node_deg: f64,
    incl_deg: f64,
    argp_deg: f64,
) -> (Vector3<f64>, Vector3<f64>) {
    let m = rot3(-node_deg) * rot1(-incl_deg) * rot3(-argp_deg);
    (m * position, m * velocity)
}

/// Inverse of [`perifocal_to_inertial`].
pub fn inertial_to_perifocal(
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    node_deg: f64,
    incl_deg: f64,
    argp_deg: f64,
) -> (Vector3<f64>, Vector3<f64>) {
    let m = (rot3(-node_deg) * rot1(-incl_deg) * rot3(-argp_deg)).transpose();
    (m * position, m * velocity)
}

/// Position of a frame along the main chain; TEME sits off-chain and is
/// routed through Pef.
fn chain_index(frame: Frame) -> usize {
    match frame {
        Frame::HelEcl => 0,
        Frame::GeoEcl => 1,
        Frame::J2000 => 2,
        Frame::Mod => 3,
        Frame::Tod => 4,
        Frame::Pef | Frame::Teme => 5,
        Frame::Efi => 6,
        Frame::Enu => 7,
    }
}

/// Transforms a state vector to the target frame, chaining one-hop
/// transforms. Nutation is evaluated once per call if any hop needs it
/// and none was supplied; an observer is required only when the route
/// touches ENU.
pub fn transform(
    osv: &Osv,
    target: Frame,
    observer: Option<&Observer>,
    nutation_data: Option<&NutationData>,
) -> Result<Osv> {
    if osv.frame == target {
        return Ok(*osv);
    }

    let from = chain_index(osv.frame);
    let to = chain_index(target);
    let needs_nutation = {
        let (lo, hi) = (from.min(to), from.max(to));
        // MoD-ToD and ToD-Pef hops.
        lo < 5 && hi > 3
    };
    // Placeholder for routes that never touch a nutation hop.
    let fallback = NutationData {
        eps: EPS_J2000_DEG,
        deps: 0.0,
        dpsi: 0.0,
    };
    let computed;
    let data = match nutation_data {
        Some(d) => d,
        None if needs_nutation => {
            computed = nutation(&osv.instant);
            &computed
        }
        None => &fallback,
    };

    // Enter the main chain.
    let mut current = if osv.frame == Frame::Teme {
        teme_to_pef(osv)?
    } else {
        *osv
    };

    while chain_index(current.frame) != to {
        let idx = chain_index(current.frame);
        current = if idx < to {
            match current.frame {
                Frame::HelEcl => hel_ecl_to_geo_ecl(&current)?,
                Frame::GeoEcl => geo_ecl_to_j2000(&current)?,
                Frame::J2000 => j2000_to_mod(&current)?,
                Frame::Mod => mod_to_tod(&current, data)?,
                Frame::Tod => tod_to_pef(&current, data)?,
                Frame::Pef => pef_to_efi(&current)?,
                Frame::Efi => {
                    let obs = observer.ok_or_else(|| {
                        SkytrackError::Frame("ENU target requires an observer".into())
                    })?;
                    efi_to_enu(&current, obs)?
                }
                Frame::Teme | Frame::Enu => unreachable!(),
            }
        } else {
            match current.frame {
                Frame::GeoEcl => geo_ecl_to_hel_ecl(&current)?,
                Frame::J2000 => j2000_to_geo_ecl(&current)?,
                Frame::Mod => mod_to_j2000(&current)?,
                Frame::Tod => tod_to_mod(&current, data)?,
                Frame::Pef => pef_to_tod(&current, data)?,
                Frame::Efi => efi_to_pef(&current)?,
                Frame::Enu => {
                    let obs = observer.ok_or_else(|| {
                        SkytrackError::Frame("ENU source requires an observer".into())
                    })?;
                    enu_to_efi(&current, obs)?
                }
                Frame::HelEcl | Frame::Teme => unreachable!(),
            }
        };
    }

    // Leave the chain onto the TEME spur if that was the target.
    if target == Frame::Teme {
        current = pef_to_teme(&current)?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::constants::J2000;

    fn instant_at(jd: f64) -> Instant {
        Instant {
            ut1: jd,
            utc: jd,
            tai: jd + 37.0 / 86_400.0,
            tt: jd + 69.184 / 86_400.0,
            pm_x: 0.15,
            pm_y: 0.30,
        }
    }

    fn sample_osv(frame: Frame) -> Osv {
        Osv {
            frame,
            position: Vector3::new(4.2e6, -3.1e6, 5.5e6),
            velocity: Vector3::new(3.0e3, 5.5e3, -1.2e3),
            instant: instant_at(2_460_000.5),
        }
    }

    fn assert_vectors_close(a: &Vector3<f64>, b: &Vector3<f64>, tol: f64) {
        assert!((a - b).norm() <= tol * b.norm().max(1.0), "{a:?} vs {b:?}");
    }

    #[test]
    fn test_ecliptic_pole_maps_to_tilted_axis() {
        let osv = Osv {
            frame: Frame::GeoEcl,
            position: Vector3::new(0.0, 0.0, 1.0),
            velocity: Vector3::zeros(),
            instant: instant_at(J2000),
        };
        let eq = geo_ecl_to_j2000(&osv).unwrap();
        assert_relative_eq!(eq.position.y, -sind(EPS_J2000_DEG), epsilon = 1e-12);
        assert_relative_eq!(eq.position.z, cosd(EPS_J2000_DEG), epsilon = 1e-12);
    }

    #[test]
    fn test_precession_vanishes_at_j2000() {
        let osv = Osv {
            instant: Instant {
                tt: J2000,
                ..instant_at(J2000)
            },
            ..sample_osv(Frame::J2000)
        };
        let m = j2000_to_mod(&osv).unwrap();
        assert_vectors_close(&m.position, &osv.position, 1e-12);
    }

    #[test]
    fn test_each_hop_inverts() {
        let instant = instant_at(2_460_000.5);
        let data = nutation(&instant);
        let obs = Observer {
            lat_deg: 48.2,
            lon_deg: 16.37,
            alt_m: 190.0,
        };

        let cases: Vec<(Osv, Osv)> = vec![
            {
                let o = sample_osv(Frame::HelEcl);
                (o, geo_ecl_to_hel_ecl(&hel_ecl_to_geo_ecl(&o).unwrap()).unwrap())
            },
            {
                let o = sample_osv(Frame::GeoEcl);
                (o, j2000_to_geo_ecl(&geo_ecl_to_j2000(&o).unwrap()).unwrap())
            },
            {
                let o = sample_osv(Frame::J2000);
                (o, mod_to_j2000(&j2000_to_mod(&o).unwrap()).unwrap())
            },
            {
                let o = sample_osv(Frame::Mod);
                (o, tod_to_mod(&mod_to_tod(&o, &data).unwrap(), &data).unwrap())
            },
            {
                let o = sample_osv(Frame::Tod);
                (o, pef_to_tod(&tod_to_pef(&o, &data).unwrap(), &data).unwrap())
            },
            {
                let o = sample_osv(Frame::Teme);
                (o, pef_to_teme(&teme_to_pef(&o).unwrap()).unwrap())
            },
            {
                let o = sample_osv(Frame::Pef);
                (o, efi_to_pef(&pef_to_efi(&o).unwrap()).unwrap())
            },
            {
                let o = sample_osv(Frame::Efi);
                (o, enu_to_efi(&efi_to_enu(&o, &obs).unwrap(), &obs).unwrap())
            },
        ];
        for (original, back) in cases {
            assert_eq!(original.frame, back.frame);
            assert_vectors_close(&back.position, &original.position, 1e-6);
            assert_vectors_close(&back.velocity, &original.velocity, 1e-6);
        }
    }

    #[test]
    fn test_ground_point_is_stationary_in_pef() {
        // A point riding the Earth's surface has zero PEF velocity, so
        // its ToD velocity is omega cross r.
        let osv = sample_osv(Frame::Pef);
        let fixed = Osv {
            velocity: Vector3::zeros(),
            ..osv
        };
        let data = nutation(&osv.instant);
        let tod = pef_to_tod(&fixed, &data).unwrap();
        let expected = Vector3::new(0.0, 0.0, EARTH_ANGVEL_RAD_S).cross(&osv.position);
        assert_relative_eq!(tod.velocity.norm(), expected.norm(), max_relative = 1e-9);
    }

    #[test]
    fn test_enu_zenith() {
        let obs = Observer {
            lat_deg: 0.0,
            lon_deg: 0.0,
            alt_m: 0.0,
        };
        // 400 km straight above the observer on the equator.
        let above = Osv {
            frame: Frame::Efi,
            position: obs.efi_position() * (1.0 + 400e3 / obs.efi_position().norm()),
            velocity: Vector3::zeros(),
            instant: instant_at(2_460_000.5),
        };
        let enu = efi_to_enu(&above, &obs).unwrap();
        assert!(enu.position.x.abs() < 1.0);
        assert!(enu.position.y.abs() < 1.0);
        assert_relative_eq!(enu.position.z, 400e3, epsilon = 1.0);
    }

    #[test]
    fn test_perifocal_identity_for_zero_angles() {
        let r = Vector3::new(7.0e6, 1.0e5, 0.0);
        let v = Vector3::new(-1.0e2, 7.5e3, 0.0);
        let (ri, vi) = perifocal_to_inertial(r, v, 0.0, 0.0, 0.0);
        assert_vectors_close(&ri, &r, 1e-12);
        assert_vectors_close(&vi, &v, 1e-12);
        let (rb, vb) = inertial_to_perifocal(ri, vi, 0.0, 0.0, 0.0);
        assert_vectors_close(&rb, &r, 1e-12);
        assert_vectors_close(&vb, &v, 1e-12);
    }

    #[test]
    fn test_composite_matches_manual_chain() {
        let osv = sample_osv(Frame::Teme);
        let data = nutation(&osv.instant);
        let manual = pef_to_efi(&teme_to_pef(&osv).unwrap()).unwrap();
        let composite = transform(&osv, Frame::Efi, None, Some(&data)).unwrap();
        assert_eq!(composite.frame, Frame::Efi);
        assert_vectors_close(&composite.position, &manual.position, 1e-12);
        assert_vectors_close(&composite.velocity, &manual.velocity, 1e-12);
    }

    #[test]
    fn test_composite_round_trip_across_whole_chain() {
        let osv = sample_osv(Frame::Teme);
        let there = transform(&osv, Frame::HelEcl, None, None).unwrap();
        let back = transform(&there, Frame::Teme, None, None).unwrap();
        assert_vectors_close(&back.position, &osv.position, 1e-6);
        assert_vectors_close(&back.velocity, &osv.velocity, 1e-6);
    }

    #[test]
    fn test_enu_without_observer_is_an_error() {
        let osv = sample_osv(Frame::Efi);
        let err = transform(&osv, Frame::Enu, None, None).unwrap_err();
        assert!(matches!(err, SkytrackError::Frame(_)));
    }

    #[test]
    fn test_hop_rejects_wrong_input_frame() {
        let osv = sample_osv(Frame::J2000);
        assert!(matches!(
            teme_to_pef(&osv),
            Err(SkytrackError::Frame(_))
        ));
    }
}
