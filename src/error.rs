// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by the solar calculator and the DMS converter.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`ParseFormat`](SunError::ParseFormat) | [`parse_dms`](crate::parse_dms) |
//! | [`UnreachableAngle`](SunError::UnreachableAngle) | [`solar_event_time`](crate::solar_event_time) and the named wrappers |
//! | [`InvalidDirection`](SunError::InvalidDirection) | [`dms_to_decimal`](crate::dms_to_decimal), [`Hemisphere`](crate::Hemisphere) parsing, [`GeoCoordinate::from_dms`](crate::GeoCoordinate::from_dms) |
//! | [`OutOfRange`](SunError::OutOfRange) | [`GeoCoordinate::new`](crate::GeoCoordinate::new), [`Dms::new`](crate::Dms::new), [`to_local`](crate::to_local) |
//! | [`DateOutOfRange`](SunError::DateOutOfRange) | [`from_julian_day`](crate::from_julian_day) |

use thiserror::Error;

/// Failure modes of every fallible operation in the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SunError {
    /// DMS text does not match `D[D]° M[M]' S[.f]" H`.
    #[error("invalid DMS format: {input:?}")]
    ParseFormat { input: String },

    /// The sun never crosses the requested zenith on that day at that latitude.
    ///
    /// `cos_hour_angle` is the out-of-domain `acos` argument: above `1.0` the
    /// sun stays below the angle all day, below `-1.0` it stays above it.
    #[error(
        "sun never reaches zenith {zenith}° at latitude {latitude}° (cos H = {cos_hour_angle:.6})"
    )]
    UnreachableAngle {
        zenith: f64,
        latitude: f64,
        cos_hour_angle: f64,
    },

    /// Hemisphere letter outside `{N, S, E, W}`, or on the wrong axis.
    #[error("invalid direction {direction:?}: expected one of N, S, E, W")]
    InvalidDirection { direction: String },

    /// A numeric input outside its documented range.
    #[error("{quantity} {value} out of range [{min}, {max}]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The Julian day has no `chrono::DateTime<Utc>` representation.
    #[error("Julian day {julian_day} is not representable as a UTC date-time")]
    DateOutOfRange { julian_day: f64 },
}

/// Convenience alias for `Result<T, SunError>`.
pub type SunResult<T> = Result<T, SunError>;

impl SunError {
    pub(crate) fn parse_format(input: &str) -> Self {
        Self::ParseFormat {
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_direction(direction: &str) -> Self {
        Self::InvalidDirection {
            direction: direction.to_string(),
        }
    }

    pub(crate) fn out_of_range(quantity: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            quantity,
            value,
            min,
            max,
        }
    }

    /// `true` when the sun stays below the requested angle all day.
    pub fn is_polar_night(&self) -> bool {
        matches!(self, Self::UnreachableAngle { cos_hour_angle, .. } if *cos_hour_angle > 1.0)
    }

    /// `true` when the sun stays above the requested angle all day.
    pub fn is_polar_day(&self) -> bool {
        matches!(self, Self::UnreachableAngle { cos_hour_angle, .. } if *cos_hour_angle < -1.0)
    }
}
