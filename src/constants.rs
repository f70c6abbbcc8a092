//! Shared physical and calendrical constants.

/// J2000.0 epoch as a Julian date (2000 January 1.5 TT)
pub const J2000: f64 = 2_451_545.0;

/// Seconds per day
pub const DAY_S: f64 = 86_400.0;

/// Days per Julian century
pub const CENTURY_D: f64 = 36_525.0;

/// Days per Julian millennium
pub const MILLENNIUM_D: f64 = 365_250.0;

/// Astronomical unit in meters (IAU 2012 definition)
pub const AU_M: f64 = 1.495_978_707e11;

/// Arcseconds to radians
pub const ASEC2RAD: f64 = std::f64::consts::TAU / 1_296_000.0;

/// Arcseconds to degrees
pub const ASEC2DEG: f64 = 1.0 / 3600.0;

/// TT - TAI offset in seconds (exact by definition)
pub const TT_MINUS_TAI_S: f64 = 32.184;

/// Earth rotation rate in radians per second (IAU 1982 conventions)
pub const EARTH_ANGVEL_RAD_S: f64 = 7.292_115_146_706_979e-5;

/// Mean obliquity of the ecliptic at J2000.0 in degrees (IAU 1976 system,
/// 84381.448 arcseconds)
pub const EPS_J2000_DEG: f64 = 84_381.448 / 3600.0;

/// WGS84 ellipsoid equatorial radius in meters
pub const WGS84_RADIUS_M: f64 = 6_378_137.0;

/// WGS84 inverse flattening
pub const WGS84_INVERSE_FLATTENING: f64 = 298.257_223_563;
