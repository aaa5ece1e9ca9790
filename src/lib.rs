// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar event times and coordinate notation.
//!
//! # Solar events
//!
//! [`solar_event_time`] turns a Julian Day, an observer position and a
//! zenith angle into the UTC instant at which the sun crosses that angle.
//! The named wrappers ([`sunrise`], [`sunset`], [`civil_twilight_sunrise`],
//! …) are fixed `(SolarAngle, Crossing)` pairs over that single operation,
//! listed in [`SolarEvent`].
//!
//! | Angle | Zenith | Events |
//! |-------|--------|--------|
//! | [`SolarAngle::Official`] | 90.833° | sunrise / sunset |
//! | [`SolarAngle::Civil`] | 96° | civil dawn / dusk |
//! | [`SolarAngle::Nautical`] | 102° | nautical dawn / dusk |
//! | [`SolarAngle::Astronomical`] | 108° | astronomical dawn / dusk |
//!
//! ```
//! use chrono::NaiveDate;
//! use sunclock::{sunrise, GeoCoordinate, JulianDate};
//!
//! let day = JulianDate::from_date(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
//! let flint_hill = GeoCoordinate::new(-90.85866, 38.85563244).unwrap();
//! let rise = sunrise(day, flint_hill).unwrap();
//! assert_eq!(rise.format("%Y-%m-%d %H").to_string(), "2025-01-07 13");
//! ```
//!
//! # Julian Days
//!
//! [`JulianDate`] (`Time<JD>`) is a day count on the UTC axis.  Civil
//! midnight falls on `.5`; [`to_julian_day`] and [`from_julian_day`] convert
//! through the proleptic Gregorian calendar and round-trip exactly at
//! whole-second resolution.
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`MJD`] | Modified Julian Date |
//!
//! # DMS notation
//!
//! [`parse_dms`], [`dms_to_decimal`] and [`decimal_to_dms`] convert between
//! `38° 51' 31.44" N` and signed decimal degrees.
//!
//! # Logging
//!
//! Intermediate solar quantities are emitted at `debug` level and calendar
//! conversions at `trace` level through the [`log`] facade.

mod calendar;
mod coordinate;
mod dms;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
pub(crate) mod scales;
mod solar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{from_julian_day, to_julian_day, to_local};
pub use coordinate::GeoCoordinate;
pub use dms::{decimal_to_dms, dms_to_decimal, format_dms, parse_dms, Axis, Dms, Hemisphere};
pub use error::{SunError, SunResult};
pub use instant::{Time, TimeScale};
pub use scales::{JD, MJD};
pub use solar::{
    astronomical_twilight_sunrise, astronomical_twilight_sunset, civil_twilight_sunrise,
    civil_twilight_sunset, day_length, nautical_twilight_sunrise, nautical_twilight_sunset,
    solar_event_time, solar_noon, sunrise, sunset, Crossing, SolarAngle, SolarEvent,
};

/// Julian Date: continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date, `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
