//! SGP4 near-Earth orbit propagator
//!
//! The classical SGP4 perturbation theory on the WGS72 gravity model:
//! secular J2/J4 rates, atmospheric drag through the BSTAR term with the
//! altitude-banded density parameter, and first-order J2 short-period
//! corrections. Output is position and velocity in the TEME frame.
//!
//! Orbits with periods of 225 minutes or more belong to the deep-space
//! extension (SDP4), which this theory does not cover; such records are
//! rejected at initialization rather than propagated into wrong answers.

use std::f64::consts::TAU;

use log::{debug, warn};
use nalgebra::Vector3;

use crate::framelib::{Frame, Osv};
use crate::timelib::Instant;
use crate::tlelib::TleRecord;
use crate::{Result, SkytrackError};

// WGS72 gravity model.
const EARTH_RADIUS_KM: f64 = 6_378.135;
const J2: f64 = 0.001_082_616;
const J3: f64 = -0.000_002_538_81;
const J4: f64 = -0.000_001_655_97;
const J3_OVER_J2: f64 = J3 / J2;

/// sqrt(mu) in Earth-radii^1.5 per minute
const XKE: f64 = 0.074_366_916_133_173_42;
const X2O3: f64 = 2.0 / 3.0;

/// Working state derived once per element record.
#[derive(Debug, Clone)]
pub struct Sgp4 {
    // mean elements at epoch, radians and rad/min
    ecco: f64,
    inclo: f64,
    nodeo: f64,
    argpo: f64,
    mo: f64,
    no_unkozai: f64,
    bstar: f64,

    // derived geometry
    con41: f64,
    x1mth2: f64,
    x7thm1: f64,

    // secular rates
    mdot: f64,
    argpdot: f64,
    nodedot: f64,
    nodecf: f64,

    // drag coefficients
    isimp: bool,
    eta: f64,
    cc1: f64,
    cc4: f64,
    cc5: f64,
    d2: f64,
    d3: f64,
    d4: f64,
    t2cof: f64,
    t3cof: f64,
    t4cof: f64,
    t5cof: f64,
    omgcof: f64,
    xmcof: f64,
    delmo: f64,
    sinmao: f64,

    // long-period coefficients
    xlcof: f64,
    aycof: f64,
}

impl Sgp4 {
    /// Derives the propagation state from a catalog record. The record's
    /// Kozai mean motion is converted to the Brouwer value with the
    /// standard two-step fixed point before anything else is computed.
    pub fn from_elements(rec: &TleRecord) -> Result<Self> {
        let no_kozai = rec.mean_motion * TAU / 1440.0;
        if no_kozai <= 0.0 {
            return Err(SkytrackError::Propagation(format!(
                "non-positive mean motion on object {}",
                rec.catalog_number
            )));
        }
        let ecco = rec.eccentricity;
        if !(0.0..1.0).contains(&ecco) {
            return Err(SkytrackError::Propagation(format!(
                "eccentricity {ecco} outside [0, 1) on object {}",
                rec.catalog_number
            )));
        }
        let inclo = rec.inclination_deg.to_radians();
        let nodeo = rec.raan_deg.to_radians();
        let argpo = rec.arg_perigee_deg.to_radians();
        let mo = rec.mean_anomaly_deg.to_radians();
        let bstar = rec.bstar;

        let eccsq = ecco * ecco;
        let omeosq = 1.0 - eccsq;
        let rteosq = omeosq.sqrt();
        let cosio = inclo.cos();
        let sinio = inclo.sin();
        let cosio2 = cosio * cosio;

        // Un-Kozai the mean motion.
        let ak = (XKE / no_kozai).powf(X2O3);
        let d1 = 0.75 * J2 * (3.0 * cosio2 - 1.0) / (rteosq * omeosq);
        let mut del = d1 / (ak * ak);
        let adel = ak * (1.0 - del * del - del * (1.0 / 3.0 + 134.0 * del * del / 81.0));
        del = d1 / (adel * adel);
        let no_unkozai = no_kozai / (1.0 + del);

        let period_min = TAU / no_unkozai;
        if period_min >= 225.0 {
            return Err(SkytrackError::Propagation(format!(
                "object {} has a {period_min:.1} min period, outside the near-Earth theory",
                rec.catalog_number
            )));
        }

        let ao = (XKE / no_unkozai).powf(X2O3);
        let po = ao * omeosq;
        let posq = po * po;
        let pinvsq = 1.0 / posq;
        let con42 = 1.0 - 5.0 * cosio2;
        let con41 = -con42 - 2.0 * cosio2;
        let x1mth2 = 1.0 - cosio2;
        let x7thm1 = 7.0 * cosio2 - 1.0;
        let rp = ao * (1.0 - ecco);

        // Density parameter bands by perigee altitude.
        let perigee_km = (rp - 1.0) * EARTH_RADIUS_KM;
        let isimp = rp < 220.0 / EARTH_RADIUS_KM + 1.0;
        let mut sfour = 78.0 / EARTH_RADIUS_KM + 1.0;
        let mut qzms24 = ((120.0 - 78.0) / EARTH_RADIUS_KM).powi(4);
        if perigee_km < 156.0 {
            let s_alt = if perigee_km < 98.0 {
                20.0
            } else {
                perigee_km - 78.0
            };
            qzms24 = ((120.0 - s_alt) / EARTH_RADIUS_KM).powi(4);
            sfour = s_alt / EARTH_RADIUS_KM + 1.0;
        }

        let tsi = 1.0 / (ao - sfour);
        let eta = ao * ecco * tsi;
        let etasq = eta * eta;
        let eeta = ecco * eta;
        let psisq = (1.0 - etasq).abs();
        let coef = qzms24 * tsi.powi(4);
        let coef1 = coef / psisq.powf(3.5);
        let cc2 = coef1
            * no_unkozai
            * (ao * (1.0 + 1.5 * etasq + eeta * (4.0 + etasq))
                + 0.375 * J2 * tsi / psisq
                    * con41
                    * (8.0 + 3.0 * etasq * (8.0 + etasq)));
        let cc1 = bstar * cc2;
        let cc3 = if ecco > 1e-4 {
            -2.0 * coef * tsi * J3_OVER_J2 * no_unkozai * sinio / ecco
        } else {
            0.0
        };
        let cc4 = 2.0
            * no_unkozai
            * coef1
            * ao
            * omeosq
            * (eta * (2.0 + 0.5 * etasq) + ecco * (0.5 + 2.0 * etasq)
                - J2 * tsi / (ao * psisq)
                    * (-3.0 * con41 * (1.0 - 2.0 * eeta + etasq * (1.5 - 0.5 * eeta))
                        + 0.75
                            * x1mth2
                            * (2.0 * etasq - eeta * (1.0 + etasq))
                            * (2.0 * argpo).cos()));
        let cc5 = 2.0
            * coef1
            * ao
            * omeosq
            * (1.0 + 2.75 * (etasq + eeta) + eeta * etasq);

        let cosio4 = cosio2 * cosio2;
        let temp1 = 1.5 * J2 * pinvsq * no_unkozai;
        let temp2 = 0.5 * temp1 * J2 * pinvsq;
        let temp3 = -0.46875 * J4 * pinvsq * pinvsq * no_unkozai;
        let mdot = no_unkozai
            + 0.5 * temp1 * rteosq * con41
            + 0.0625 * temp2 * rteosq * (13.0 - 78.0 * cosio2 + 137.0 * cosio4);
        let argpdot = -0.5 * temp1 * con42
            + 0.0625 * temp2 * (7.0 - 114.0 * cosio2 + 395.0 * cosio4)
            + temp3 * (3.0 - 36.0 * cosio2 + 49.0 * cosio4);
        let xhdot1 = -temp1 * cosio;
        let nodedot = xhdot1
            + (0.5 * temp2 * (4.0 - 19.0 * cosio2) + 2.0 * temp3 * (3.0 - 7.0 * cosio2))
                * cosio;
        let omgcof = bstar * cc3 * argpo.cos();
        let xmcof = if ecco > 1e-4 {
            -X2O3 * coef * bstar / eeta
        } else {
            0.0
        };
        let nodecf = 3.5 * omeosq * xhdot1 * cc1;
        let t2cof = 1.5 * cc1;
        // Singular at inclination 180 degrees; guard the divisor.
        let xlcof = if (cosio + 1.0).abs() > 1.5e-12 {
            -0.25 * J3_OVER_J2 * sinio * (3.0 + 5.0 * cosio) / (1.0 + cosio)
        } else {
            -0.25 * J3_OVER_J2 * sinio * (3.0 + 5.0 * cosio) / 1.5e-12
        };
        let aycof = -0.5 * J3_OVER_J2 * sinio;
        let delmo = (1.0 + eta * mo.cos()).powi(3);
        let sinmao = mo.sin();

        let (mut d2, mut d3, mut d4) = (0.0, 0.0, 0.0);
        let (mut t3cof, mut t4cof, mut t5cof) = (0.0, 0.0, 0.0);
        if !isimp {
            let cc1sq = cc1 * cc1;
            d2 = 4.0 * ao * tsi * cc1sq;
            let temp = d2 * tsi * cc1 / 3.0;
            d3 = (17.0 * ao + sfour) * temp;
            d4 = 0.5 * temp * ao * tsi * (221.0 * ao + 31.0 * sfour) * cc1;
            t3cof = d2 + 2.0 * cc1sq;
            t4cof = 0.25 * (3.0 * d3 + cc1 * (12.0 * d2 + 10.0 * cc1sq));
            t5cof = 0.2
                * (3.0 * d4
                    + 12.0 * cc1 * d3
                    + 6.0 * d2 * d2
                    + 15.0 * cc1sq * (2.0 * d2 + cc1sq));
        }

        debug!(
            "sgp4 init: object {} period {:.2} min perigee {:.1} km",
            rec.catalog_number, period_min, perigee_km
        );

        Ok(Self {
            ecco,
            inclo,
            nodeo,
            argpo,
            mo,
            no_unkozai,
            bstar,
            con41,
            x1mth2,
            x7thm1,
            mdot,
            argpdot,
            nodedot,
            nodecf,
            isimp,
            eta,
            cc1,
            cc4,
            cc5,
            d2,
            d3,
            d4,
            t2cof,
            t3cof,
            t4cof,
            t5cof,
            omgcof,
            xmcof,
            delmo,
            sinmao,
            xlcof,
            aycof,
        })
    }

    /// Propagates to `tsince` minutes past the record epoch, returning
    /// TEME position in meters and velocity in meters per second.
    pub fn position_velocity(&self, tsince: f64) -> Result<(Vector3<f64>, Vector3<f64>)> {
        let t = tsince;
        let t2 = t * t;

        // Secular gravity and drag.
        let xmdf = self.mo + self.mdot * t;
        let argpdf = self.argpo + self.argpdot * t;
        let nodedf = self.nodeo + self.nodedot * t;
        let mut argpm = argpdf;
        let mut mm = xmdf;
        let nodem = nodedf + self.nodecf * t2;
        let mut tempa = 1.0 - self.cc1 * t;
        let mut tempe = self.bstar * self.cc4 * t;
        let mut templ = self.t2cof * t2;
        if !self.isimp {
            let delomg = self.omgcof * t;
            let delmtemp = 1.0 + self.eta * xmdf.cos();
            let delm = self.xmcof * (delmtemp.powi(3) - self.delmo);
            let temp = delomg + delm;
            mm = xmdf + temp;
            argpm = argpdf - temp;
            let t3 = t2 * t;
            let t4 = t3 * t;
            tempa -= self.d2 * t2 + self.d3 * t3 + self.d4 * t4;
            tempe += self.bstar * self.cc5 * (mm.sin() - self.sinmao);
            templ += self.t3cof * t3 + t4 * (self.t4cof + t * self.t5cof);
        }

        let am = (XKE / self.no_unkozai).powf(X2O3) * tempa * tempa;
        let nm = XKE / am.powf(1.5);
        let mut em = self.ecco - tempe;
        if !(-0.001..1.0).contains(&em) {
            return Err(SkytrackError::Propagation(format!(
                "eccentricity {em:.6} left [-0.001, 1.0) at t = {tsince} min"
            )));
        }
        // Numerical floor, not an error.
        em = em.max(1e-6);
        mm += self.no_unkozai * templ;
        let xlm = mm + argpm + nodem;
        let nodem = nodem.rem_euclid(TAU);
        let argpm = argpm % TAU;
        let mm = (xlm % TAU - argpm - nodem) % TAU;

        let sinim = self.inclo.sin();
        let cosim = self.inclo.cos();

        // Long-period periodics.
        let axnl = em * argpm.cos();
        let temp = 1.0 / (am * (1.0 - em * em));
        let aynl = em * argpm.sin() + temp * self.aycof;
        let xl = mm + argpm + nodem + temp * self.xlcof * axnl;

        // Kepler's equation in the mean longitude form. The clamped
        // Newton iteration always terminates; 10 steps at 1e-12 is the
        // classical stopping rule.
        let u = (xl - nodem).rem_euclid(TAU);
        let mut eo1 = u;
        let mut tem5: f64 = 9999.9;
        let mut ktr = 1;
        let (mut sineo1, mut coseo1) = (0.0, 0.0);
        while tem5.abs() >= 1e-12 && ktr <= 10 {
            sineo1 = eo1.sin();
            coseo1 = eo1.cos();
            tem5 = 1.0 - coseo1 * axnl - sineo1 * aynl;
            tem5 = (u - aynl * coseo1 + axnl * sineo1 - eo1) / tem5;
            if tem5.abs() >= 0.95 {
                tem5 = 0.95_f64.copysign(tem5);
            }
            eo1 += tem5;
            ktr += 1;
        }

        // Short-period preliminaries.
        let ecose = axnl * coseo1 + aynl * sineo1;
        let esine = axnl * sineo1 - aynl * coseo1;
        let el2 = axnl * axnl + aynl * aynl;
        let pl = am * (1.0 - el2);
        if pl < 0.0 {
            return Err(SkytrackError::Propagation(format!(
                "negative semi-latus rectum at t = {tsince} min"
            )));
        }
        let rl = am * (1.0 - ecose);
        let rdotl = am.sqrt() * esine / rl;
        let rvdotl = pl.sqrt() / rl;
        let betal = (1.0 - el2).sqrt();
        let temp = esine / (1.0 + betal);
        let sinu = am / rl * (sineo1 - aynl - axnl * temp);
        let cosu = am / rl * (coseo1 - axnl + aynl * temp);
        let su = sinu.atan2(cosu);
        let sin2u = (cosu + cosu) * sinu;
        let cos2u = 1.0 - 2.0 * sinu * sinu;

        // First-order J2 short-period corrections.
        let temp = 1.0 / pl;
        let temp1 = 0.5 * J2 * temp;
        let temp2 = temp1 * temp;
        let mrt = rl * (1.0 - 1.5 * temp2 * betal * self.con41)
            + 0.5 * temp1 * self.x1mth2 * cos2u;
        let su = su - 0.25 * temp2 * self.x7thm1 * sin2u;
        let xnode = nodem + 1.5 * temp2 * cosim * sin2u;
        let xinc = self.inclo + 1.5 * temp2 * cosim * sinim * cos2u;
        let mvt = rdotl - nm * temp1 * self.x1mth2 * sin2u / XKE;
        let rvdot = rvdotl + nm * temp1 * (self.x1mth2 * cos2u + 1.5 * self.con41) / XKE;

        // Orientation vectors.
        let (sinsu, cossu) = su.sin_cos();
        let (snod, cnod) = xnode.sin_cos();
        let (sini, cosi) = xinc.sin_cos();
        let xmx = -snod * cosi;
        let xmy = cnod * cosi;
        let u_vec = Vector3::new(
            xmx * sinsu + cnod * cossu,
            xmy * sinsu + snod * cossu,
            sini * sinsu,
        );
        let v_vec = Vector3::new(
            xmx * cossu - cnod * sinsu,
            xmy * cossu - snod * sinsu,
            sini * cossu,
        );

        if mrt < 1.0 {
            warn!("satellite below Earth's surface at t = {tsince} min, likely decayed");
        }

        let vkmpersec = EARTH_RADIUS_KM * XKE / 60.0;
        let position = mrt * u_vec * EARTH_RADIUS_KM * 1e3;
        let velocity = (mvt * u_vec + rvdot * v_vec) * vkmpersec * 1e3;
        Ok((position, velocity))
    }
}

/// An element record paired with its derived propagation state. The
/// state is recomputed wholesale whenever the record is replaced.
#[derive(Debug, Clone)]
pub struct Propagator {
    record: TleRecord,
    model: Sgp4,
}

impl Propagator {
    pub fn new(record: TleRecord) -> Result<Self> {
        let model = Sgp4::from_elements(&record)?;
        Ok(Self { record, model })
    }

    pub fn record(&self) -> &TleRecord {
        &self.record
    }

    /// Replaces the element record and rebuilds the cached state.
    pub fn set_record(&mut self, record: TleRecord) -> Result<()> {
        self.model = Sgp4::from_elements(&record)?;
        self.record = record;
        Ok(())
    }

    /// State vector at the given instant, in TEME.
    pub fn at(&self, instant: &Instant) -> Result<Osv> {
        let tsince = (instant.utc - self.record.epoch_jd_utc) * 1440.0;
        let (position, velocity) = self.model.position_velocity(tsince)?;
        Ok(Osv {
            frame: Frame::Teme,
            position,
            velocity,
            instant: *instant,
        })
    }
}

/// One-shot propagation of a record to an instant, in TEME.
pub fn propagate(record: &TleRecord, instant: &Instant) -> Result<Osv> {
    let model = Sgp4::from_elements(record)?;
    let tsince = (instant.utc - record.epoch_jd_utc) * 1440.0;
    let (position, velocity) = model.position_velocity(tsince)?;
    Ok(Osv {
        frame: Frame::Teme,
        position,
        velocity,
        instant: *instant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mathlib::acosd;
    use approx::assert_relative_eq;

    const CAL_L1: &str =
        "1 00900U 64063C   23161.95522785  .00000702  00000+0  73232-3 0  9992";
    const CAL_L2: &str =
        "2 00900  90.1903  47.7368 0028440  26.7560 344.5702 13.74340666919893";
    const ISS_L1: &str =
        "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_L2: &str =
        "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    fn calsphere() -> TleRecord {
        TleRecord::parse("CALSPHERE 1", CAL_L1, CAL_L2).unwrap()
    }

    fn iss() -> TleRecord {
        TleRecord::parse("ISS (ZARYA)", ISS_L1, ISS_L2).unwrap()
    }

    fn instant_at_utc(utc: f64) -> Instant {
        Instant {
            ut1: utc,
            utc,
            tai: utc + 37.0 / 86_400.0,
            tt: utc + 69.184 / 86_400.0,
            pm_x: 0.0,
            pm_y: 0.0,
        }
    }

    #[test]
    fn test_epoch_reproduces_mean_elements() {
        let model = Sgp4::from_elements(&calsphere()).unwrap();
        let (r, v) = model.position_velocity(0.0).unwrap();

        // 13.743 rev/day puts the semi-major axis near 7360 km.
        assert!(r.norm() > 7.2e6 && r.norm() < 7.5e6, "radius {}", r.norm());

        // Orbit plane orientation from the angular momentum vector.
        let h = r.cross(&v);
        let incl = acosd(h.z / h.norm());
        assert_relative_eq!(incl, 90.1903, epsilon = 0.3);
        let raan = h.x.atan2(-h.y).to_degrees().rem_euclid(360.0);
        assert_relative_eq!(raan, 47.7368, epsilon = 0.5);
    }

    #[test]
    fn test_epoch_speed_near_circular() {
        let model = Sgp4::from_elements(&calsphere()).unwrap();
        let (_, v) = model.position_velocity(0.0).unwrap();
        assert!(v.norm() > 7.2e3 && v.norm() < 7.5e3, "speed {}", v.norm());
    }

    #[test]
    fn test_calsphere_1000_minutes() {
        let model = Sgp4::from_elements(&calsphere()).unwrap();
        let (r, v) = model.position_velocity(1000.0).unwrap();
        assert!(r.iter().all(|c| c.is_finite()));
        assert!(v.iter().all(|c| c.is_finite()));
        assert!(r.norm() > 6.6e6 && r.norm() < 7.5e6, "radius {}", r.norm());
    }

    #[test]
    fn test_iss_orbit_shell() {
        let model = Sgp4::from_elements(&iss()).unwrap();
        for t in [0.0, 45.0, 360.0, 1440.0] {
            let (r, v) = model.position_velocity(t).unwrap();
            assert!(r.norm() > 6.65e6 && r.norm() < 6.80e6, "radius {}", r.norm());
            assert!(v.norm() > 7.6e3 && v.norm() < 7.8e3, "speed {}", v.norm());
        }
    }

    #[test]
    fn test_backward_propagation() {
        let model = Sgp4::from_elements(&iss()).unwrap();
        let (r, _) = model.position_velocity(-720.0).unwrap();
        assert!(r.norm() > 6.6e6 && r.norm() < 6.9e6);
    }

    #[test]
    fn test_deep_space_rejected() {
        let mut rec = calsphere();
        // Two revolutions per day is a 720-minute period.
        rec.mean_motion = 2.0;
        assert!(matches!(
            Sgp4::from_elements(&rec),
            Err(SkytrackError::Propagation(_))
        ));
    }

    #[test]
    fn test_bad_eccentricity_rejected() {
        let mut rec = calsphere();
        rec.eccentricity = 1.2;
        assert!(matches!(
            Sgp4::from_elements(&rec),
            Err(SkytrackError::Propagation(_))
        ));
    }

    #[test]
    fn test_propagate_returns_teme_at_instant() {
        let rec = calsphere();
        let instant = instant_at_utc(rec.epoch_jd_utc);
        let osv = propagate(&rec, &instant).unwrap();
        assert_eq!(osv.frame, Frame::Teme);
        let model = Sgp4::from_elements(&rec).unwrap();
        let (r, _) = model.position_velocity(0.0).unwrap();
        assert_relative_eq!(osv.position.x, r.x, epsilon = 1e-6);
    }

    #[test]
    fn test_propagator_cache_replacement() {
        let mut prop = Propagator::new(calsphere()).unwrap();
        let instant = instant_at_utc(prop.record().epoch_jd_utc);
        let before = prop.at(&instant).unwrap();
        prop.set_record(iss()).unwrap();
        let after = prop.at(&instant).unwrap();
        assert_eq!(prop.record().catalog_number, 25544);
        assert!((before.position - after.position).norm() > 1.0);
    }
}
