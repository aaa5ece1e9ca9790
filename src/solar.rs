// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Solar events from the mean-sun model
//!
//! Sunrise, sunset and twilight instants for an observer, following the
//! low-precision solar position of the *Astronomical Almanac* as popularised
//! by NOAA and Meeus:
//!
//! ```text
//! civil date → J* (mean solar noon) → M → C → λ → J_transit → δ → H → J_event
//! ```
//!
//! Angles stay in [`Degrees`] until they hit a trigonometric function, which
//! goes through qtty's angular `sin`/`cos`; inverse trig results come back as
//! [`Radians`].  There is no other degree/radian conversion in the module.
//!
//! All instants are UTC.  Apply a civil offset afterwards with
//! [`to_local`](crate::to_local) if needed.
//!
//! ## Accuracy
//!
//! The truncated equation of center and fixed obliquity keep results within
//! a couple of minutes of published tables at mid latitudes.  Atmospheric
//! refraction is folded into the standard 90.833° zenith and nothing else.
//!
//! ## Polar regions
//!
//! When the sun never crosses the requested zenith on the given day the
//! hour-angle argument leaves `[-1, 1]` and the call fails with
//! [`SunError::UnreachableAngle`].  The value is never clamped.

use chrono::{DateTime, Utc};
use log::debug;
use qtty::{Days, Degrees, Radians};
use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar::from_julian_day;
use crate::coordinate::GeoCoordinate;
use crate::error::{SunError, SunResult};
use crate::JulianDate;

/// Mean anomaly at J2000.0.
const MEAN_ANOMALY_AT_EPOCH: Degrees = Degrees::new(357.5291);

/// Mean daily motion of the Earth around the Sun, degrees per day.
const MEAN_DAILY_MOTION: f64 = 0.985_600_28;

/// Argument of perihelion of the Earth.
const PERIHELION: Degrees = Degrees::new(102.9372);

/// Obliquity of the ecliptic.
const OBLIQUITY: Degrees = Degrees::new(23.44);

// ═══════════════════════════════════════════════════════════════════════════
// Public types
// ═══════════════════════════════════════════════════════════════════════════

/// Zenith angle at which an event is defined.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolarAngle {
    /// 90.833°: upper limb on the horizon with standard refraction.
    Official,
    /// 96°: sun 6° below the horizon.
    Civil,
    /// 102°: sun 12° below the horizon.
    Nautical,
    /// 108°: sun 18° below the horizon.
    Astronomical,
    /// Any other zenith, in degrees.
    Custom(f64),
}

impl SolarAngle {
    /// The zenith angle.
    pub const fn zenith(self) -> Degrees {
        match self {
            Self::Official => Degrees::new(90.833),
            Self::Civil => Degrees::new(96.0),
            Self::Nautical => Degrees::new(102.0),
            Self::Astronomical => Degrees::new(108.0),
            Self::Custom(zenith) => Degrees::new(zenith),
        }
    }
}

/// Which horizon crossing of the day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Crossing {
    /// Morning crossing, before solar transit.
    Rising,
    /// Evening crossing, after solar transit.
    Setting,
}

/// The named events, each a fixed `(SolarAngle, Crossing)` pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolarEvent {
    AstronomicalTwilightSunrise,
    NauticalTwilightSunrise,
    CivilTwilightSunrise,
    Sunrise,
    Sunset,
    CivilTwilightSunset,
    NauticalTwilightSunset,
    AstronomicalTwilightSunset,
}

impl SolarEvent {
    /// Every event, dawn to dusk.
    pub const ALL: [SolarEvent; 8] = [
        Self::AstronomicalTwilightSunrise,
        Self::NauticalTwilightSunrise,
        Self::CivilTwilightSunrise,
        Self::Sunrise,
        Self::Sunset,
        Self::CivilTwilightSunset,
        Self::NauticalTwilightSunset,
        Self::AstronomicalTwilightSunset,
    ];

    /// Zenith angle and crossing that define this event.
    pub const fn definition(self) -> (SolarAngle, Crossing) {
        use Crossing::*;
        use SolarAngle::*;
        match self {
            Self::Sunrise => (Official, Rising),
            Self::Sunset => (Official, Setting),
            Self::CivilTwilightSunrise => (Civil, Rising),
            Self::CivilTwilightSunset => (Civil, Setting),
            Self::NauticalTwilightSunrise => (Nautical, Rising),
            Self::NauticalTwilightSunset => (Nautical, Setting),
            Self::AstronomicalTwilightSunrise => (Astronomical, Rising),
            Self::AstronomicalTwilightSunset => (Astronomical, Setting),
        }
    }

    /// UTC instant of this event on the civil date containing `day`.
    pub fn time(self, day: JulianDate, coord: GeoCoordinate) -> SunResult<DateTime<Utc>> {
        let (angle, crossing) = self.definition();
        solar_event_time(day, coord, angle, crossing)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Algorithm steps
// ═══════════════════════════════════════════════════════════════════════════

/// Mean solar noon `J*` in days since J2000.0 for the observer's meridian.
fn mean_solar_noon(day: JulianDate, longitude: Degrees) -> Days {
    let n = day.civil_day_number().days_since_j2000();
    n - Days::new(longitude.value() / 360.0)
}

/// Solar mean anomaly `M`, wrapped into `[0°, 360°)`.
fn mean_anomaly(j_star: Days) -> Degrees {
    Degrees::new(MEAN_ANOMALY_AT_EPOCH.value() + MEAN_DAILY_MOTION * j_star.value()).wrap_pos()
}

/// Equation of center `C`, the mean-to-true anomaly correction.
fn equation_of_center(m: Degrees) -> Degrees {
    let m2 = Degrees::new(2.0 * m.value());
    let m3 = Degrees::new(3.0 * m.value());
    Degrees::new(1.9148 * m.sin() + 0.0200 * m2.sin() + 0.0003 * m3.sin())
}

/// Ecliptic longitude `λ`, wrapped into `[0°, 360°)`.
fn ecliptic_longitude(m: Degrees, c: Degrees) -> Degrees {
    Degrees::new(m.value() + c.value() + PERIHELION.value() + 180.0).wrap_pos()
}

/// Solar transit: the instant of local apparent noon.
fn solar_transit(j_star: Days, m: Degrees, lambda: Degrees) -> JulianDate {
    let two_lambda = Degrees::new(2.0 * lambda.value());
    JulianDate::J2000 + j_star + Days::new(0.0053 * m.sin() - 0.0069 * two_lambda.sin())
}

/// Solar declination `δ`.
fn declination(lambda: Degrees) -> Radians {
    Radians::new((lambda.sin() * OBLIQUITY.sin()).asin())
}

/// Hour angle `H` at which the sun sits at `zenith`.
fn hour_angle(latitude: Degrees, delta: Radians, zenith: Degrees) -> SunResult<Radians> {
    let cos_h =
        (zenith.cos() - latitude.sin() * delta.sin()) / (latitude.cos() * delta.cos());

    if !(-1.0..=1.0).contains(&cos_h) {
        return Err(SunError::UnreachableAngle {
            zenith: zenith.value(),
            latitude: latitude.value(),
            cos_hour_angle: cos_h,
        });
    }
    Ok(Radians::new(cos_h.acos()))
}

/// Transit and declination of the sun on the civil date containing `day`.
#[derive(Debug, Copy, Clone)]
struct SolarPosition {
    transit: JulianDate,
    declination: Radians,
}

impl SolarPosition {
    fn at(day: JulianDate, longitude: Degrees) -> Self {
        let j_star = mean_solar_noon(day, longitude);
        let m = mean_anomaly(j_star);
        let c = equation_of_center(m);
        let lambda = ecliptic_longitude(m, c);
        let transit = solar_transit(j_star, m, lambda);
        let declination = declination(lambda);

        debug!(
            "solar position: J*={} M={} C={} λ={} transit={} δ={}",
            j_star.value(),
            m.value(),
            c.value(),
            lambda.value(),
            transit.value(),
            declination.value()
        );

        Self {
            transit,
            declination,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Public operations
// ═══════════════════════════════════════════════════════════════════════════

/// UTC instant at which the sun crosses `angle` on the civil date of `day`.
///
/// `day` may be any instant of the UTC date; it is reduced to the date's
/// noon-referenced Julian Day Number first.
///
/// # Errors
///
/// [`SunError::UnreachableAngle`] when the sun never reaches the angle that
/// day, [`SunError::DateOutOfRange`] when the result has no UTC
/// representation.
pub fn solar_event_time(
    day: JulianDate,
    coord: GeoCoordinate,
    angle: SolarAngle,
    crossing: Crossing,
) -> SunResult<DateTime<Utc>> {
    let position = SolarPosition::at(day, coord.longitude());
    let h = hour_angle(coord.latitude(), position.declination, angle.zenith())?;
    let offset = Days::new(h.value() / TAU);

    let event = match crossing {
        Crossing::Rising => position.transit - offset,
        Crossing::Setting => position.transit + offset,
    };
    debug!(
        "{crossing:?} at zenith {}: H={} rad, J={}",
        angle.zenith().value(),
        h.value(),
        event.value()
    );
    from_julian_day(event)
}

/// Solar transit (local apparent noon) on the civil date of `day`.
pub fn solar_noon(day: JulianDate, coord: GeoCoordinate) -> SunResult<DateTime<Utc>> {
    from_julian_day(SolarPosition::at(day, coord.longitude()).transit)
}

/// Time between sunrise and sunset.
pub fn day_length(day: JulianDate, coord: GeoCoordinate) -> SunResult<chrono::Duration> {
    Ok(sunset(day, coord)? - sunrise(day, coord)?)
}

macro_rules! named_events {
    ($($(#[$doc:meta])* $name:ident => $event:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(day: JulianDate, coord: GeoCoordinate) -> SunResult<DateTime<Utc>> {
                SolarEvent::$event.time(day, coord)
            }
        )+
    };
}

named_events! {
    /// Upper limb on the horizon, morning.
    sunrise => Sunrise,
    /// Upper limb on the horizon, evening.
    sunset => Sunset,
    /// Sun 6° below the horizon, morning.
    civil_twilight_sunrise => CivilTwilightSunrise,
    /// Sun 6° below the horizon, evening.
    civil_twilight_sunset => CivilTwilightSunset,
    /// Sun 12° below the horizon, morning.
    nautical_twilight_sunrise => NauticalTwilightSunrise,
    /// Sun 12° below the horizon, evening.
    nautical_twilight_sunset => NauticalTwilightSunset,
    /// Sun 18° below the horizon, morning.
    astronomical_twilight_sunrise => AstronomicalTwilightSunrise,
    /// Sun 18° below the horizon, evening.
    astronomical_twilight_sunset => AstronomicalTwilightSunset,
}
