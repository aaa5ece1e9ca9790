// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day counts on the UTC axis.
//!
//! [`Time<S>`] is a [`Days`] value tagged with a scale marker.  Every scale
//! here is a fixed offset from the Julian Day: there is no ΔT, no leap
//! seconds and no TT/UT split, so changing scale is one addition.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use qtty::Days;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar;
use crate::error::SunResult;
use crate::scales::JD;

/// A day-count scale anchored on the Julian Day.
pub trait TimeScale: Copy + fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix used by `Display`.
    const LABEL: &'static str;

    /// Julian Day of this scale's zero.
    const EPOCH: Days;
}

/// An instant expressed as days on scale `S`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    days: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            days: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Days since the scale's epoch.
    #[inline]
    pub const fn days(&self) -> Days {
        self.days
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.days.value()
    }

    /// The same instant on scale `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::new(self.value() + S::EPOCH.value() - T::EPOCH.value())
    }

    /// Civil UTC instant, rounded to the nearest second.
    ///
    /// # Errors
    ///
    /// [`SunError::DateOutOfRange`](crate::SunError::DateOutOfRange) for
    /// non-finite values or years chrono cannot hold.
    pub fn to_utc(&self) -> SunResult<DateTime<Utc>> {
        calendar::from_julian_day(self.to::<JD>())
    }

    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        calendar::to_julian_day(datetime).to::<S>()
    }

    /// 00:00 UTC of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_utc(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl<S: TimeScale> fmt::Display for Time<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", S::LABEL, self.value())
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self {
        Self::new(self.value() + rhs.value())
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self {
        Self::new(self.value() - rhs.value())
    }
}

/// Elapsed days between two instants on the same scale.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Days {
        Days::new(self.value() - rhs.value())
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::MJD;
    use chrono::TimeZone;

    #[test]
    fn utc_noon_is_integral() {
        let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = Time::<JD>::from_utc(noon);
        assert_eq!(jd.value(), 2_451_545.0);
        assert_eq!(jd.to_utc().unwrap(), noon);
    }

    #[test]
    fn from_date_lands_on_half_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(Time::<JD>::from_date(date).value(), 2_460_682.5);
        assert_eq!(Time::<MJD>::from_date(date).value(), 60_682.0);
    }

    #[test]
    fn mjd_goes_through_utc_like_jd() {
        let midnight = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let mjd = Time::<MJD>::from_utc(midnight);
        assert!((mjd.value() - 51_544.0).abs() < 1e-9);
        assert_eq!(mjd.to_utc().unwrap(), midnight);
    }

    #[test]
    fn non_finite_has_no_utc() {
        assert!(Time::<JD>::new(f64::NAN).to_utc().is_err());
        assert!(Time::<MJD>::new(f64::NEG_INFINITY).to_utc().is_err());
    }

    #[test]
    fn day_arithmetic() {
        let a = Time::<JD>::new(2_451_545.0);
        let b = a + Days::new(2.5);
        assert_eq!(b.value(), 2_451_547.5);
        assert_eq!(b - a, Days::new(2.5));
        assert_eq!(b - Days::new(2.5), a);
        assert!(a < b);
    }

    #[test]
    fn display_carries_label() {
        assert_eq!(Time::<JD>::new(2_451_545.0).to_string(), "JD 2451545");
        assert_eq!(Time::<MJD>::new(51_544.5).to_string(), "MJD 51544.5");
    }
}
