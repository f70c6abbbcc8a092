//! Skytrack: satellite tracking core
//!
//! Computes position and velocity of Earth satellites from catalog
//! orbital-element records, in any of a fixed set of reference frames,
//! resolving the four time scales (UT1, UTC, TAI, TT) that drive the
//! computation.
//!
//! Components:
//! - [`mathlib`]: degree trigonometry and single-axis rotations
//! - [`timelib`]: table-driven time-scale correlation and polar motion
//! - [`nutationlib`]: IAU 1980 nutation theory
//! - [`siderlib`]: Greenwich mean and apparent sidereal time
//! - [`framelib`]: reference-frame transform pipeline (9 frames)
//! - [`planetlib`]: truncated heliocentric planetary ephemeris
//! - [`tlelib`]: two-line element / OMM record codec
//! - [`sgp4lib`]: SGP4 near-Earth orbit propagator
//!
//! # Example
//!
//! ```ignore
//! use skytrack::tlelib::TleRecord;
//! use skytrack::timelib::{TimeCorrelation, TimeScale};
//! use skytrack::framelib::{transform, Frame};
//! use skytrack::sgp4lib::propagate;
//!
//! let rec = TleRecord::parse("ISS (ZARYA)", line1, line2)?;
//! let correlation = TimeCorrelation::default();
//! let instant = correlation.instant_from(TimeScale::Utc, 2460000.5);
//! let teme = propagate(&rec, &instant)?;
//! let efi = transform(&teme, Frame::Efi, None, None)?;
//! ```

pub mod constants;
pub mod framelib;
pub mod mathlib;
pub mod nutationlib;
pub mod planetlib;
pub mod sgp4lib;
pub mod siderlib;
pub mod tlelib;
pub mod timelib;

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkytrackError {
    /// Malformed fixed-column text (TLE line that does not parse)
    #[error("format error: {0}")]
    Format(String),

    /// Key-value element record lacks a required field
    #[error("missing field: {0}")]
    MissingField(String),

    /// Propagation model left its valid domain
    #[error("propagation error: {0}")]
    Propagation(String),

    /// Unsatisfiable frame transform request
    #[error("frame error: {0}")]
    Frame(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SkytrackError>;

pub use framelib::{transform, Frame, Observer, Osv};
pub use nutationlib::{nutation, NutationData};
pub use sgp4lib::{propagate, Propagator, Sgp4};
pub use timelib::{Instant, TimeCorrelation, TimeScale};
pub use tlelib::TleRecord;
