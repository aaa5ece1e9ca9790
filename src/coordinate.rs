// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer location on the Earth's surface.

use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

use crate::dms::{parse_dms, split_dms, Axis, Dms, Hemisphere};
use crate::error::{SunError, SunResult};

/// Geographic position in decimal degrees, east and north positive.
///
/// Latitude is restricted to `[-90, 90]` and longitude to `[-180, 180]`.
/// Values outside those ranges are rejected, never wrapped.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GeoCoordinate {
    longitude: f64,
    latitude: f64,
}

impl GeoCoordinate {
    /// Validate and build a coordinate.
    pub fn new(longitude: f64, latitude: f64) -> SunResult<Self> {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SunError::out_of_range("longitude", longitude, -180.0, 180.0));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SunError::out_of_range("latitude", latitude, -90.0, 90.0));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Parse a pair of DMS strings such as `38° 51' 31.44" N` and
    /// `90° 51' 31.18" W`.
    ///
    /// The latitude text must carry `N`/`S` and the longitude text `E`/`W`.
    pub fn from_dms(latitude: &str, longitude: &str) -> SunResult<Self> {
        let (lat_dms, lat_hemisphere) = parse_dms(latitude)?;
        let (lon_dms, lon_hemisphere) = parse_dms(longitude)?;

        if lat_hemisphere.axis() != Axis::Latitude {
            return Err(SunError::invalid_direction(lat_hemisphere.as_str()));
        }
        if lon_hemisphere.axis() != Axis::Longitude {
            return Err(SunError::invalid_direction(lon_hemisphere.as_str()));
        }

        Self::new(
            lon_dms.to_decimal(lon_hemisphere),
            lat_dms.to_decimal(lat_hemisphere),
        )
    }

    /// Longitude, east positive.
    #[inline]
    pub fn longitude(&self) -> Degrees {
        Degrees::new(self.longitude)
    }

    /// Latitude, north positive.
    #[inline]
    pub fn latitude(&self) -> Degrees {
        Degrees::new(self.latitude)
    }

    /// Latitude and longitude in DMS notation, in that order.
    pub fn to_dms(&self) -> ((Dms, Hemisphere), (Dms, Hemisphere)) {
        (
            split_dms(self.latitude, Axis::Latitude),
            split_dms(self.longitude, Axis::Longitude),
        )
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            longitude: f64,
            latitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.longitude, raw.latitude).map_err(D::Error::custom)
    }
}
