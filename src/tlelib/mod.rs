//! Orbital-element record codec
//!
//! Parses and serializes the NORAD two-line element (TLE) fixed-column
//! format and converts to and from the key-value OMM (Orbit Mean-elements
//! Message) JSON form. Serialization reproduces the 69-character layout
//! byte for byte with freshly computed checksums, so
//! `serialize(parse(lines)) == lines` for every valid record: the parsed
//! implied-decimal columns are kept verbatim and re-emitted as long as
//! they still encode the field's value, which preserves the
//! non-canonical `00000-0` zero spelling real catalogs carry.
//!
//! A checksum mismatch is not a parse failure; catalog archives carry
//! plenty of records with stale checksums, so the record is returned
//! with `checksum_valid` cleared and the caller decides.

use chrono::{Datelike, TimeZone, Timelike, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::constants::DAY_S;
use crate::mathlib::wrap360;
use crate::timelib::{datetime_from_jd, jd_from_datetime};
use crate::{Result, SkytrackError};

/// One catalog element record, the union of the TLE fields.
///
/// `ndot` and `nddot` hold the values exactly as printed on the card
/// (the catalog convention divides the derivatives by 2 and 6); the
/// propagator does not consume them, only `bstar` and the mean elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TleRecord {
    /// Object name from the optional title line
    pub name: String,
    /// NORAD catalog number
    pub catalog_number: u32,
    /// Classification marker (U, C, or S)
    pub classification: char,
    /// International designator, e.g. "98067A"
    pub intl_designator: String,
    /// Full epoch year (two-digit years above 56 map to 19xx)
    pub epoch_year: i32,
    /// Epoch day of year with fraction; 1.0 is January 1, 00:00 UTC
    pub epoch_day: f64,
    /// Epoch as a Julian date, UTC
    pub epoch_jd_utc: f64,
    /// First derivative of mean motion as printed, rev/day^2
    pub ndot: f64,
    /// Second derivative of mean motion as printed, rev/day^3
    pub nddot: f64,
    /// Drag term, 1/Earth radii
    pub bstar: f64,
    /// Ephemeris type marker
    pub ephemeris_type: u8,
    /// Element set number
    pub element_set_number: u32,
    /// Inclination, degrees
    pub inclination_deg: f64,
    /// Right ascension of the ascending node, degrees
    pub raan_deg: f64,
    /// Eccentricity
    pub eccentricity: f64,
    /// Argument of perigee, degrees
    pub arg_perigee_deg: f64,
    /// Mean anomaly, degrees
    pub mean_anomaly_deg: f64,
    /// Mean motion, revolutions per day
    pub mean_motion: f64,
    /// Revolution number at epoch
    pub rev_number: u32,
    /// Both line checksums matched at parse time
    pub checksum_valid: bool,
    /// nddot column exactly as printed, for byte-level round trips
    #[serde(skip)]
    nddot_text: Option<String>,
    /// bstar column exactly as printed
    #[serde(skip)]
    bstar_text: Option<String>,
}

impl TleRecord {
    /// Parses a record from its two 69-column lines plus a name.
    pub fn parse(name: &str, line1: &str, line2: &str) -> Result<Self> {
        // The fixed-column slices below index by byte; reject multi-byte
        // text before it can straddle a column boundary.
        if !line1.is_ascii() || !line2.is_ascii() {
            return Err(SkytrackError::Format(
                "element lines must be ASCII".into(),
            ));
        }
        if line1.len() < 69 || line2.len() < 69 {
            return Err(SkytrackError::Format(format!(
                "element lines must be 69 columns, got {} and {}",
                line1.len(),
                line2.len()
            )));
        }
        if !line1.starts_with('1') || !line2.starts_with('2') {
            return Err(SkytrackError::Format(
                "element lines must start with their line numbers".into(),
            ));
        }

        let catalog_number = field::<u32>(line1, 2, 7, "catalog number")?;
        let classification = line1.as_bytes()[7] as char;
        let intl_designator = line1[9..17].trim().to_string();

        let epoch_yy = field::<i32>(line1, 18, 20, "epoch year")?;
        let epoch_year = if epoch_yy > 56 {
            1900 + epoch_yy
        } else {
            2000 + epoch_yy
        };
        let epoch_day = field::<f64>(line1, 20, 32, "epoch day")?;
        let epoch_jd_utc = epoch_to_jd(epoch_year, epoch_day)?;

        let ndot = field::<f64>(line1, 33, 43, "mean motion derivative")?;
        let nddot = parse_implied(&line1[44..52], "mean motion 2nd derivative")?;
        let bstar = parse_implied(&line1[53..61], "drag term")?;
        let ephemeris_type = field::<u8>(line1, 62, 63, "ephemeris type").unwrap_or(0);
        let element_set_number = field::<u32>(line1, 64, 68, "element set number")?;

        let cat2 = field::<u32>(line2, 2, 7, "catalog number")?;
        if cat2 != catalog_number {
            return Err(SkytrackError::Format(format!(
                "catalog number mismatch between lines: {catalog_number} vs {cat2}"
            )));
        }
        // Angles normalize to [0, 360) on output even when the input
        // carries them unnormalized.
        let inclination_deg = wrap360(field::<f64>(line2, 8, 16, "inclination")?);
        let raan_deg = wrap360(field::<f64>(line2, 17, 25, "ascending node")?);
        let eccentricity = field::<f64>(line2, 26, 33, "eccentricity")? * 1e-7;
        let arg_perigee_deg = wrap360(field::<f64>(line2, 34, 42, "argument of perigee")?);
        let mean_anomaly_deg = wrap360(field::<f64>(line2, 43, 51, "mean anomaly")?);
        let mean_motion = field::<f64>(line2, 52, 63, "mean motion")?;
        let rev_number = field::<u32>(line2, 63, 68, "revolution number")?;

        let checksum_valid = checksum_matches(line1) && checksum_matches(line2);
        if !checksum_valid {
            warn!("checksum mismatch on catalog object {catalog_number}");
        }

        Ok(Self {
            name: name.trim().to_string(),
            catalog_number,
            classification,
            intl_designator,
            epoch_year,
            epoch_day,
            epoch_jd_utc,
            ndot,
            nddot,
            bstar,
            ephemeris_type,
            element_set_number,
            inclination_deg,
            raan_deg,
            eccentricity,
            arg_perigee_deg,
            mean_anomaly_deg,
            mean_motion,
            rev_number,
            checksum_valid,
            nddot_text: Some(line1[44..52].to_string()),
            bstar_text: Some(line1[53..61].to_string()),
        })
    }

    /// Parses a full three-line record: title line followed by the two
    /// data lines.
    pub fn parse_3le(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let name = lines.next().unwrap_or_default();
        let line1 = lines.next().ok_or_else(|| {
            SkytrackError::Format("record is missing line 1".into())
        })?;
        let line2 = lines.next().ok_or_else(|| {
            SkytrackError::Format("record is missing line 2".into())
        })?;
        Self::parse(name, line1, line2)
    }

    /// Serializes the full three-line form: title line plus the two
    /// fixed-column data lines.
    pub fn serialize_3le(&self) -> String {
        let (l1, l2) = self.serialize();
        format!("{}\n{}\n{}", self.name, l1, l2)
    }

    /// Serializes the record back into its two fixed-column lines with
    /// freshly computed checksums.
    pub fn serialize(&self) -> (String, String) {
        let body1 = format!(
            "1 {:05}{} {:<8} {:02}{:012.8} {} {} {} {} {:4}",
            self.catalog_number,
            self.classification,
            self.intl_designator,
            self.epoch_year.rem_euclid(100),
            self.epoch_day,
            format_ndot(self.ndot),
            implied_text(&self.nddot_text, self.nddot, "mean motion 2nd derivative"),
            implied_text(&self.bstar_text, self.bstar, "drag term"),
            self.ephemeris_type,
            self.element_set_number,
        );
        let body2 = format!(
            "2 {:05} {:8.4} {:8.4} {:07} {:8.4} {:8.4} {:11.8}{:5}",
            self.catalog_number,
            self.inclination_deg,
            self.raan_deg,
            (self.eccentricity * 1e7).round() as u32,
            self.arg_perigee_deg,
            self.mean_anomaly_deg,
            self.mean_motion,
            self.rev_number,
        );
        (
            format!("{}{}", body1, checksum(&body1)),
            format!("{}{}", body2, checksum(&body2)),
        )
    }

    /// Converts to the OMM key-value JSON form.
    pub fn to_omm(&self) -> Value {
        let epoch_iso = datetime_from_jd(self.epoch_jd_utc)
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string())
            .unwrap_or_default();
        json!({
            "OBJECT_NAME": self.name,
            "OBJECT_ID": object_id_from_designator(&self.intl_designator),
            "NORAD_CAT_ID": self.catalog_number,
            "CLASSIFICATION_TYPE": self.classification.to_string(),
            "EPOCH": epoch_iso,
            "MEAN_MOTION": self.mean_motion,
            "ECCENTRICITY": self.eccentricity,
            "INCLINATION": self.inclination_deg,
            "RA_OF_ASC_NODE": self.raan_deg,
            "ARG_OF_PERICENTER": self.arg_perigee_deg,
            "MEAN_ANOMALY": self.mean_anomaly_deg,
            "EPHEMERIS_TYPE": self.ephemeris_type,
            "ELEMENT_SET_NO": self.element_set_number,
            "REV_AT_EPOCH": self.rev_number,
            "BSTAR": self.bstar,
            "MEAN_MOTION_DOT": self.ndot,
            "MEAN_MOTION_DDOT": self.nddot,
        })
    }

    /// Builds a record from the OMM key-value JSON form. Every required
    /// key must be present; conversion is lossless up to fixed-column
    /// precision.
    pub fn from_omm(omm: &Value) -> Result<Self> {
        let name = str_key(omm, "OBJECT_NAME")?.to_string();
        let object_id = str_key(omm, "OBJECT_ID")?;
        let epoch_iso = str_key(omm, "EPOCH")?;

        let epoch = epoch_iso
            .parse::<chrono::NaiveDateTime>()
            .map(|naive| naive.and_utc())
            .map_err(|e| SkytrackError::Format(format!("EPOCH '{epoch_iso}': {e}")))?;
        let epoch_year = epoch.year();
        let seconds_into_day = epoch.num_seconds_from_midnight() as f64
            + epoch.nanosecond() as f64 * 1e-9;
        let epoch_day = epoch.ordinal() as f64 + seconds_into_day / DAY_S;

        let classification = str_key(omm, "CLASSIFICATION_TYPE")
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or('U');

        Ok(Self {
            name,
            catalog_number: num_key(omm, "NORAD_CAT_ID")? as u32,
            classification,
            intl_designator: designator_from_object_id(object_id)?,
            epoch_year,
            epoch_day,
            epoch_jd_utc: jd_from_datetime(&epoch),
            ndot: num_key(omm, "MEAN_MOTION_DOT")?,
            nddot: num_key(omm, "MEAN_MOTION_DDOT")?,
            bstar: num_key(omm, "BSTAR")?,
            ephemeris_type: num_key(omm, "EPHEMERIS_TYPE").unwrap_or(0.0) as u8,
            element_set_number: num_key(omm, "ELEMENT_SET_NO")? as u32,
            inclination_deg: num_key(omm, "INCLINATION")?,
            raan_deg: num_key(omm, "RA_OF_ASC_NODE")?,
            eccentricity: num_key(omm, "ECCENTRICITY")?,
            arg_perigee_deg: num_key(omm, "ARG_OF_PERICENTER")?,
            mean_anomaly_deg: num_key(omm, "MEAN_ANOMALY")?,
            mean_motion: num_key(omm, "MEAN_MOTION")?,
            rev_number: num_key(omm, "REV_AT_EPOCH")? as u32,
            checksum_valid: true,
            nddot_text: None,
            bstar_text: None,
        })
    }
}

fn field<T: std::str::FromStr>(line: &str, a: usize, b: usize, what: &str) -> Result<T> {
    line[a..b]
        .trim()
        .parse::<T>()
        .map_err(|_| SkytrackError::Format(format!("bad {what}: '{}'", &line[a..b])))
}

/// Modulo-10 checksum over the first 68 columns: digit sum plus one per
/// minus sign.
pub fn checksum(body: &str) -> u32 {
    body.chars()
        .take(68)
        .map(|c| match c {
            '0'..='9' => c as u32 - '0' as u32,
            '-' => 1,
            _ => 0,
        })
        .sum::<u32>()
        % 10
}

fn checksum_matches(line: &str) -> bool {
    line.as_bytes()[68]
        .is_ascii_digit()
        .then(|| (line.as_bytes()[68] - b'0') as u32 == checksum(line))
        .unwrap_or(false)
}

/// Parses an implied-decimal field: sign, five mantissa digits, exponent
/// sign, exponent digit, meaning +/- 0.ddddd * 10^(+/-e).
fn parse_implied(s: &str, what: &str) -> Result<f64> {
    let bytes = s.as_bytes();
    if bytes.len() != 8 {
        return Err(SkytrackError::Format(format!("bad {what}: '{s}'")));
    }
    let sign = if bytes[0] == b'-' { -1.0 } else { 1.0 };
    let digits = s[1..6].trim();
    let mantissa = if digits.is_empty() {
        0.0
    } else {
        digits
            .parse::<f64>()
            .map_err(|_| SkytrackError::Format(format!("bad {what}: '{s}'")))?
    };
    let exp_sign = if bytes[6] == b'-' { -1.0 } else { 1.0 };
    // Very old cards leave the exponent blank; read that as zero.
    let exp = match bytes[7] {
        b' ' => 0.0,
        c => (c as char)
            .to_digit(10)
            .ok_or_else(|| SkytrackError::Format(format!("bad {what} exponent: '{s}'")))?
            as f64,
    };
    Ok(sign * mantissa * 1e-5 * 10f64.powf(exp_sign * exp))
}

/// Re-emits the printed implied-decimal column while it still encodes
/// the field's value, falling back to a fresh formatting once the value
/// has been changed or the record never came from card text.
fn implied_text(raw: &Option<String>, value: f64, what: &str) -> String {
    if let Some(s) = raw {
        if parse_implied(s, what).is_ok_and(|v| v == value) {
            return s.clone();
        }
    }
    format_implied(value)
}

/// Formats an implied-decimal field; zero canonically serializes with a
/// positive exponent.
fn format_implied(v: f64) -> String {
    if v == 0.0 {
        return " 00000+0".to_string();
    }
    let sign = if v < 0.0 { '-' } else { ' ' };
    let mut exp = v.abs().log10().floor() as i32 + 1;
    let mut digits = (v.abs() * 10f64.powi(5 - exp)).round() as u32;
    if digits == 100_000 {
        digits = 10_000;
        exp += 1;
    }
    let exp_sign = if exp < 0 { '-' } else { '+' };
    format!("{}{:05}{}{}", sign, digits, exp_sign, exp.abs())
}

fn format_ndot(v: f64) -> String {
    let sign = if v < 0.0 { '-' } else { ' ' };
    format!("{}.{:08}", sign, (v.abs() * 1e8).round() as u64)
}

fn epoch_to_jd(year: i32, day: f64) -> Result<f64> {
    let jan1 = Utc
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| SkytrackError::Format(format!("bad epoch year {year}")))?;
    Ok(jd_from_datetime(&jan1) + day - 1.0)
}

/// "98067A" to "1998-067A".
fn object_id_from_designator(designator: &str) -> String {
    if designator.len() < 5 {
        return designator.to_string();
    }
    let yy: i32 = designator[0..2].parse().unwrap_or(0);
    let year = if yy > 56 { 1900 + yy } else { 2000 + yy };
    format!("{}-{}", year, &designator[2..])
}

/// "1998-067A" to "98067A".
fn designator_from_object_id(object_id: &str) -> Result<String> {
    let (year, rest) = object_id.split_once('-').ok_or_else(|| {
        SkytrackError::Format(format!("bad OBJECT_ID: '{object_id}'"))
    })?;
    let year: i32 = year
        .parse()
        .map_err(|_| SkytrackError::Format(format!("bad OBJECT_ID year: '{object_id}'")))?;
    Ok(format!("{:02}{}", year.rem_euclid(100), rest))
}

fn str_key<'a>(omm: &'a Value, key: &str) -> Result<&'a str> {
    omm.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| SkytrackError::MissingField(key.to_string()))
}

fn num_key(omm: &Value, key: &str) -> Result<f64> {
    let value = omm
        .get(key)
        .ok_or_else(|| SkytrackError::MissingField(key.to_string()))?;
    // Archives serve numeric fields both as numbers and as strings.
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
        .ok_or_else(|| SkytrackError::Format(format!("non-numeric {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CAL_L1: &str =
        "1 00900U 64063C   23161.95522785  .00000702  00000+0  73232-3 0  9992";
    const CAL_L2: &str =
        "2 00900  90.1903  47.7368 0028440  26.7560 344.5702 13.74340666919893";
    const ISS_L1: &str =
        "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_L2: &str =
        "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn test_parse_calsphere() {
        let rec = TleRecord::parse("CALSPHERE 1", CAL_L1, CAL_L2).unwrap();
        assert_eq!(rec.catalog_number, 900);
        assert_eq!(rec.classification, 'U');
        assert_eq!(rec.intl_designator, "64063C");
        assert_eq!(rec.epoch_year, 2023);
        assert_relative_eq!(rec.epoch_day, 161.95522785, epsilon = 1e-9);
        assert_relative_eq!(rec.ndot, 0.00000702, epsilon = 1e-12);
        assert_relative_eq!(rec.bstar, 0.73232e-3, epsilon = 1e-12);
        assert_relative_eq!(rec.inclination_deg, 90.1903, epsilon = 1e-9);
        assert_relative_eq!(rec.raan_deg, 47.7368, epsilon = 1e-9);
        assert_relative_eq!(rec.eccentricity, 0.0028440, epsilon = 1e-12);
        assert_relative_eq!(rec.mean_motion, 13.74340666, epsilon = 1e-10);
        assert_eq!(rec.rev_number, 91989);
        assert!(rec.checksum_valid);
    }

    #[test]
    fn test_parse_iss() {
        let rec = TleRecord::parse("ISS (ZARYA)", ISS_L1, ISS_L2).unwrap();
        assert_eq!(rec.catalog_number, 25544);
        assert_eq!(rec.epoch_year, 2008);
        assert_relative_eq!(rec.ndot, -0.00002182, epsilon = 1e-12);
        assert_relative_eq!(rec.nddot, 0.0, epsilon = 1e-15);
        assert_relative_eq!(rec.bstar, -0.11606e-4, epsilon = 1e-15);
        assert_relative_eq!(rec.mean_motion, 15.72125391, epsilon = 1e-10);
        assert!(rec.checksum_valid);
    }

    #[test]
    fn test_round_trip_byte_for_byte() {
        let rec = TleRecord::parse("CALSPHERE 1", CAL_L1, CAL_L2).unwrap();
        let (l1, l2) = rec.serialize();
        assert_eq!(l1, CAL_L1);
        assert_eq!(l2, CAL_L2);

        // ISS line 1 spells zero nddot as "00000-0"; the printed column
        // comes back verbatim, checksum digit included.
        let iss = TleRecord::parse("ISS (ZARYA)", ISS_L1, ISS_L2).unwrap();
        let (l1, l2) = iss.serialize();
        assert_eq!(l1, ISS_L1);
        assert_eq!(l2, ISS_L2);
    }

    #[test]
    fn test_mutated_field_reformats_canonically() {
        // Changing a field drops the stale printed column in favor of a
        // fresh canonical formatting, which a reparse reads back exactly.
        let mut rec = TleRecord::parse("ISS (ZARYA)", ISS_L1, ISS_L2).unwrap();
        rec.bstar = 0.0;
        let (l1, _) = rec.serialize();
        assert_eq!(&l1[53..61], " 00000+0");
        let again = TleRecord::parse("ISS (ZARYA)", &l1, ISS_L2).unwrap();
        assert_eq!(again.bstar, 0.0);
        assert_relative_eq!(again.ndot, rec.ndot, epsilon = 1e-12);
    }

    #[test]
    fn test_three_line_round_trip() {
        let text = format!("CALSPHERE 1\n{CAL_L1}\n{CAL_L2}");
        let rec = TleRecord::parse_3le(&text).unwrap();
        assert_eq!(rec.serialize_3le(), text);
    }

    #[test]
    fn test_unnormalized_angles_wrap_on_output() {
        let mut l2 = CAL_L2.to_string();
        // Mean anomaly written as a negative angle.
        l2.replace_range(43..51, "-15.4298");
        let rec = TleRecord::parse("X", CAL_L1, &l2).unwrap();
        assert_relative_eq!(rec.mean_anomaly_deg, 344.5702, epsilon = 1e-9);
    }

    #[test]
    fn test_checksum_mismatch_flags_not_fails() {
        let mut bad = CAL_L1.to_string();
        bad.replace_range(68..69, "7");
        let rec = TleRecord::parse("CALSPHERE 1", &bad, CAL_L2).unwrap();
        assert!(!rec.checksum_valid);
    }

    #[test]
    fn test_serialized_checksums_in_range() {
        let rec = TleRecord::parse("CALSPHERE 1", CAL_L1, CAL_L2).unwrap();
        let (l1, l2) = rec.serialize();
        for line in [&l1, &l2] {
            let digit = (line.as_bytes()[68] - b'0') as u32;
            assert!(digit <= 9);
            assert_eq!(digit, checksum(line));
        }
    }

    #[test]
    fn test_non_ascii_line_is_format_error() {
        // A multi-byte character would land inside a fixed-column slice.
        let bad = CAL_L1.replace("73232-3", "73232µ3");
        assert!(matches!(
            TleRecord::parse("CALSPHERE 1", &bad, CAL_L2),
            Err(SkytrackError::Format(_))
        ));
    }

    #[test]
    fn test_malformed_field_is_format_error() {
        let mut bad = CAL_L2.to_string();
        bad.replace_range(8..16, "  xx.xxx");
        assert!(matches!(
            TleRecord::parse("CALSPHERE 1", CAL_L1, &bad),
            Err(SkytrackError::Format(_))
        ));
    }

    #[test]
    fn test_epoch_year_pivot() {
        let mut l1 = CAL_L1.to_string();
        l1.replace_range(18..20, "57");
        let rec = TleRecord::parse("X", &l1, CAL_L2).unwrap();
        assert_eq!(rec.epoch_year, 1957);

        let mut l1 = CAL_L1.to_string();
        l1.replace_range(18..20, "56");
        let rec = TleRecord::parse("X", &l1, CAL_L2).unwrap();
        assert_eq!(rec.epoch_year, 2056);
    }

    #[test]
    fn test_implied_decimal() {
        assert_relative_eq!(
            parse_implied(" 73232-3", "t").unwrap(),
            0.73232e-3,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            parse_implied("-11606-4", "t").unwrap(),
            -0.11606e-4,
            epsilon = 1e-15
        );
        assert_eq!(format_implied(0.73232e-3), " 73232-3");
        assert_eq!(format_implied(-0.11606e-4), "-11606-4");
        assert_eq!(format_implied(0.0), " 00000+0");
    }

    #[test]
    fn test_omm_round_trip() {
        let rec = TleRecord::parse("ISS (ZARYA)", ISS_L1, ISS_L2).unwrap();
        let omm = rec.to_omm();
        assert_eq!(omm["OBJECT_ID"], "1998-067A");
        let back = TleRecord::from_omm(&omm).unwrap();
        assert_eq!(back.catalog_number, rec.catalog_number);
        assert_eq!(back.intl_designator, rec.intl_designator);
        assert_relative_eq!(back.epoch_jd_utc, rec.epoch_jd_utc, epsilon = 1e-9);
        assert_relative_eq!(back.mean_motion, rec.mean_motion, epsilon = 1e-12);
        assert_relative_eq!(back.bstar, rec.bstar, epsilon = 1e-15);
    }

    #[test]
    fn test_omm_missing_key() {
        let rec = TleRecord::parse("ISS (ZARYA)", ISS_L1, ISS_L2).unwrap();
        let mut omm = rec.to_omm();
        omm.as_object_mut().unwrap().remove("MEAN_MOTION");
        assert!(matches!(
            TleRecord::from_omm(&omm),
            Err(SkytrackError::MissingField(k)) if k == "MEAN_MOTION"
        ));
    }

    #[test]
    fn test_epoch_jd() {
        // 2008 day 264.51782528 is 2008-09-20 12:25:40 UTC.
        let rec = TleRecord::parse("ISS (ZARYA)", ISS_L1, ISS_L2).unwrap();
        let dt = datetime_from_jd(rec.epoch_jd_utc).unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2008-09-20");
    }
}
