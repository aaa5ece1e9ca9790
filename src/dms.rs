// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degrees–minutes–seconds notation.
//!
//! The accepted text form is strict:
//!
//! ```text
//! D[D]° M[M]' S[.f]" H
//! ```
//!
//! with whitespace between the components and `H` one of `N`, `S`, `E`, `W`
//! (either case).  Anything else is a [`SunError::ParseFormat`]; there is no
//! best-effort recovery.
//!
//! The hemisphere travels next to the unsigned [`Dms`] value and is only
//! folded into a sign by [`dms_to_decimal`] / [`Dms::to_decimal`].
//!
//! ```
//! use sunclock::{decimal_to_dms, dms_to_decimal, parse_dms, Axis, Hemisphere};
//!
//! let (dms, hemisphere) = parse_dms("38° 51' 31.44\" N").unwrap();
//! assert_eq!(hemisphere, Hemisphere::N);
//! assert_eq!(dms_to_decimal(&dms, "N").unwrap(), 38.8587333);
//!
//! let (back, h) = decimal_to_dms(38.8587333, Axis::Latitude).unwrap();
//! assert_eq!((back.degrees(), back.minutes(), h), (38, 51, Hemisphere::N));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

use crate::error::{SunError, SunResult};

/// Decimal places kept by [`dms_to_decimal`].
const DECIMAL_PLACES: i32 = 7;

/// Decimal places of the minutes fraction kept by [`decimal_to_dms`].
const MINUTE_FRACTION_PLACES: i32 = 4;

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^
        (\d{1,2})°               # degrees
        \s+
        (\d{1,2})'               # minutes
        \s+
        (\d{1,2}(?:\.\d+)?)"     # seconds, optional fraction
        \s+
        ([NSEWnsew])             # hemisphere
        $
        "#,
    )
    .unwrap()
});

/// Which coordinate a value belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// North/south; hemispheres `N` and `S`.
    Latitude,
    /// East/west; hemispheres `E` and `W`.
    Longitude,
}

/// Hemisphere letter carried alongside a [`Dms`] value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

impl Hemisphere {
    /// Hemisphere of a signed decimal value on `axis`. Zero counts as positive.
    pub fn from_sign(decimal: f64, axis: Axis) -> Self {
        match (axis, decimal < 0.0) {
            (Axis::Latitude, false) => Self::N,
            (Axis::Latitude, true) => Self::S,
            (Axis::Longitude, false) => Self::E,
            (Axis::Longitude, true) => Self::W,
        }
    }

    /// The axis this letter applies to.
    pub const fn axis(self) -> Axis {
        match self {
            Self::N | Self::S => Axis::Latitude,
            Self::E | Self::W => Axis::Longitude,
        }
    }

    /// `-1.0` for `S` and `W`, `1.0` otherwise.
    pub const fn sign(self) -> f64 {
        match self {
            Self::S | Self::W => -1.0,
            Self::N | Self::E => 1.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::S => "S",
            Self::E => "E",
            Self::W => "W",
        }
    }
}

impl TryFrom<char> for Hemisphere {
    type Error = SunError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Self::N),
            'S' => Ok(Self::S),
            'E' => Ok(Self::E),
            'W' => Ok(Self::W),
            _ => Err(SunError::invalid_direction(c.encode_utf8(&mut [0; 4]))),
        }
    }
}

impl FromStr for Hemisphere {
    type Err = SunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).map_err(|_| SunError::invalid_direction(s)),
            _ => Err(SunError::invalid_direction(s)),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unsigned angle in degrees, minutes and seconds.
///
/// `minutes` is in `[0, 59]` and `seconds` in `[0, 60)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dms {
    degrees: u32,
    minutes: u32,
    seconds: f64,
}

impl Dms {
    /// Build a value, checking the minute and second ranges.
    pub fn new(degrees: u32, minutes: u32, seconds: f64) -> SunResult<Self> {
        if minutes > 59 {
            return Err(SunError::out_of_range("minutes", minutes.into(), 0.0, 59.0));
        }
        if !(0.0..60.0).contains(&seconds) {
            return Err(SunError::out_of_range("seconds", seconds, 0.0, 60.0));
        }
        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    #[inline]
    pub const fn degrees(&self) -> u32 {
        self.degrees
    }

    #[inline]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    #[inline]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Signed decimal degrees, rounded to 7 places.
    pub fn to_decimal(&self, hemisphere: Hemisphere) -> f64 {
        let magnitude =
            f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0;
        round_to_places(hemisphere.sign() * magnitude, DECIMAL_PLACES)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Dms {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            degrees: u32,
            minutes: u32,
            seconds: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.degrees, raw.minutes, raw.seconds).map_err(D::Error::custom)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}' {}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Render a value and its hemisphere in the form [`parse_dms`] accepts.
pub fn format_dms(dms: &Dms, hemisphere: Hemisphere) -> String {
    format!("{dms} {hemisphere}")
}

/// Parse `D[D]° M[M]' S[.f]" H`.
pub fn parse_dms(input: &str) -> SunResult<(Dms, Hemisphere)> {
    let caps = DMS_REGEX
        .captures(input)
        .ok_or_else(|| SunError::parse_format(input))?;

    let degrees: u32 = caps[1].parse().map_err(|_| SunError::parse_format(input))?;
    let minutes: u32 = caps[2].parse().map_err(|_| SunError::parse_format(input))?;
    let seconds: f64 = caps[3].parse().map_err(|_| SunError::parse_format(input))?;
    let hemisphere: Hemisphere = caps[4].parse()?;

    let dms = Dms::new(degrees, minutes, seconds).map_err(|_| SunError::parse_format(input))?;
    Ok((dms, hemisphere))
}

/// Signed decimal degrees of `dms`, negated for `S` and `W`.
///
/// `direction` is a single hemisphere letter; anything outside
/// `N`, `S`, `E`, `W` is an [`SunError::InvalidDirection`].
pub fn dms_to_decimal(dms: &Dms, direction: &str) -> SunResult<f64> {
    let hemisphere: Hemisphere = direction.parse()?;
    Ok(dms.to_decimal(hemisphere))
}

/// Split signed decimal degrees into a [`Dms`] and its hemisphere.
///
/// The minutes fraction is rounded to 4 places *before* scaling to
/// seconds. A result of exactly 60 seconds is carried into the minutes.
///
/// # Errors
///
/// [`SunError::OutOfRange`] for non-finite values and for values outside
/// `[-90, 90]` on [`Axis::Latitude`] or `[-180, 180]` on [`Axis::Longitude`].
pub fn decimal_to_dms(decimal: f64, axis: Axis) -> SunResult<(Dms, Hemisphere)> {
    let (quantity, limit) = match axis {
        Axis::Latitude => ("latitude", 90.0),
        Axis::Longitude => ("longitude", 180.0),
    };
    if !(-limit..=limit).contains(&decimal) {
        return Err(SunError::out_of_range(quantity, decimal, -limit, limit));
    }
    Ok(split_dms(decimal, axis))
}

/// [`decimal_to_dms`] for a value already known to be in range.
pub(crate) fn split_dms(decimal: f64, axis: Axis) -> (Dms, Hemisphere) {
    let hemisphere = Hemisphere::from_sign(decimal, axis);
    let magnitude = decimal.abs();

    let mut degrees = magnitude.trunc();
    let minutes_total = (magnitude - degrees) * 60.0;
    let mut minutes = minutes_total.trunc();
    let mut seconds =
        round_to_places(minutes_total - minutes, MINUTE_FRACTION_PLACES) * 60.0;

    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1.0;
    }
    if minutes >= 60.0 {
        minutes -= 60.0;
        degrees += 1.0;
    }

    let dms = Dms {
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds,
    };
    (dms, hemisphere)
}

fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
