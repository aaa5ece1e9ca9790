// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil UTC date-time ↔ Julian Day.
//!
//! Both directions use the integer Fliegel–Van Flandern day-number
//! formulas on the proleptic Gregorian calendar, so there is no epoch
//! bound and no special casing around 1970 or 1582.
//!
//! The half-day offset lives here and nowhere else: a Julian Day Number is
//! the day that *starts at noon*, so civil midnight sits at `JDN − 0.5`.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc,
};
use log::trace;

use crate::error::{SunError, SunResult};
use crate::JulianDate;

const SECONDS_PER_DAY: i64 = 86_400;

/// Largest |JD| handled before the i64 second count; far beyond chrono's range.
const MAX_ABS_JULIAN_DAY: f64 = 1.0e12;

/// Julian Day Number of a proleptic Gregorian date (the JDN of its noon).
pub(crate) fn gregorian_to_day_number(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Proleptic Gregorian `(year, month, day)` of a Julian Day Number.
pub(crate) fn day_number_to_gregorian(day_number: i64) -> (i64, u32, u32) {
    let a = day_number + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1_461);
    let e = c - (1_461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year, month as u32, day as u32)
}

/// Julian Day of a UTC instant.
///
/// A value at 00:00 UTC lands on `.5`; 12:00 UTC lands on `.0`.  Sub-second
/// precision is kept; [`from_julian_day`] later rounds it to the nearest
/// second rather than truncating.
pub fn to_julian_day(datetime: DateTime<Utc>) -> JulianDate {
    let naive = datetime.naive_utc();
    let day_number = gregorian_to_day_number(
        i64::from(naive.year()),
        i64::from(naive.month()),
        i64::from(naive.day()),
    );
    let seconds = f64::from(naive.num_seconds_from_midnight())
        + f64::from(naive.nanosecond()) / 1e9;
    let jd = day_number as f64 - 0.5 + seconds / SECONDS_PER_DAY as f64;
    trace!("to_julian_day({datetime}) = {jd}");
    JulianDate::new(jd)
}

/// UTC instant of a Julian Day, rounded to the nearest whole second.
///
/// Exact inverse of [`to_julian_day`] for whole-second inputs.
pub fn from_julian_day(jd: JulianDate) -> SunResult<DateTime<Utc>> {
    let value = jd.value();
    if !value.is_finite() || value.abs() > MAX_ABS_JULIAN_DAY {
        return Err(SunError::DateOutOfRange { julian_day: value });
    }

    let total_seconds = ((value + 0.5) * SECONDS_PER_DAY as f64).round() as i64;
    let day_number = total_seconds.div_euclid(SECONDS_PER_DAY);
    let second_of_day = total_seconds.rem_euclid(SECONDS_PER_DAY) as u32;

    let (year, month, day) = day_number_to_gregorian(day_number);
    let out_of_range = || SunError::DateOutOfRange { julian_day: value };
    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(out_of_range)?;
    let time =
        NaiveTime::from_num_seconds_from_midnight_opt(second_of_day, 0).ok_or_else(out_of_range)?;

    let datetime = NaiveDateTime::new(date, time).and_utc();
    trace!("from_julian_day({value}) = {datetime}");
    Ok(datetime)
}

/// Shift a UTC instant into a fixed whole-hour civil offset for display.
///
/// Offsets must lie in `[-23, 23]` hours.
pub fn to_local(instant: DateTime<Utc>, offset_hours: i32) -> SunResult<DateTime<FixedOffset>> {
    let out_of_range =
        || SunError::out_of_range("UTC offset (hours)", offset_hours.into(), -23.0, 23.0);
    if !(-23..=23).contains(&offset_hours) {
        return Err(out_of_range());
    }
    let offset = FixedOffset::east_opt(offset_hours * 3_600).ok_or_else(out_of_range)?;
    Ok(instant.with_timezone(&offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn day_number_of_known_dates() {
        assert_eq!(gregorian_to_day_number(2000, 1, 1), 2_451_545);
        assert_eq!(gregorian_to_day_number(1970, 1, 1), 2_440_588);
        assert_eq!(gregorian_to_day_number(1858, 11, 17), 2_400_001);
        assert_eq!(gregorian_to_day_number(2025, 1, 7), 2_460_683);
    }

    #[test]
    fn day_number_inverse() {
        for jdn in [2_415_386, 2_440_588, 2_451_545, 2_451_604, 2_460_683, 2_488_069] {
            let (y, m, d) = day_number_to_gregorian(jdn);
            assert_eq!(gregorian_to_day_number(y, m.into(), d.into()), jdn);
        }
        assert_eq!(day_number_to_gregorian(2_451_604), (2000, 2, 29));
    }

    #[test]
    fn midnight_lands_on_half_day() {
        let midnight = Utc.with_ymd_and_hms(2025, 1, 7, 0, 0, 0).unwrap();
        assert_eq!(to_julian_day(midnight).value(), 2_460_682.5);

        let noon = Utc.with_ymd_and_hms(2025, 1, 7, 12, 0, 0).unwrap();
        assert_eq!(to_julian_day(noon).value(), 2_460_683.0);
    }

    #[test]
    fn half_day_is_not_dropped_on_the_way_back() {
        let back = from_julian_day(JulianDate::new(2_460_680.5)).unwrap();
        assert_eq!(back, Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap());

        let back = from_julian_day(JulianDate::new(2_451_545.0)).unwrap();
        assert_eq!(back, Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn roundtrip_is_exact_to_the_second() {
        let mut t = Utc.with_ymd_and_hms(1901, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2099, 12, 31, 23, 59, 59).unwrap();
        // Odd stride so the walk visits every hour, minute and second class.
        let step = Duration::seconds(7 * 86_400 + 3_907);
        while t <= end {
            assert_eq!(from_julian_day(to_julian_day(t)).unwrap(), t, "at {t}");
            t += step;
        }
        assert_eq!(from_julian_day(to_julian_day(end)).unwrap(), end);
    }

    #[test]
    fn roundtrip_rounds_sub_second_input() {
        let t = Utc.with_ymd_and_hms(2024, 2, 29, 6, 30, 15).unwrap();
        let jittered = t + Duration::milliseconds(200);
        assert_eq!(from_julian_day(to_julian_day(jittered)).unwrap(), t);

        let late = t + Duration::milliseconds(700);
        assert_eq!(
            from_julian_day(to_julian_day(late)).unwrap(),
            t + Duration::seconds(1)
        );
    }

    #[test]
    fn rounding_carries_into_the_next_day() {
        let almost = JulianDate::new(2_460_683.499_999_9);
        let t = from_julian_day(almost).unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 1, 8, 0, 0, 0).unwrap());
    }

    #[test]
    fn pre_unix_dates_use_the_calendar() {
        let t = Utc.with_ymd_and_hms(1901, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_julian_day(t).value(), 2_415_385.5);
    }

    #[test]
    fn non_finite_julian_day_is_rejected() {
        let err = from_julian_day(JulianDate::new(f64::NAN)).unwrap_err();
        assert!(matches!(err, SunError::DateOutOfRange { .. }));
        assert!(from_julian_day(JulianDate::new(1.0e15)).is_err());
    }

    #[test]
    fn local_offset_is_presentation_only() {
        let utc = Utc.with_ymd_and_hms(2025, 1, 7, 13, 19, 48).unwrap();
        let cst = to_local(utc, -6).unwrap();
        assert_eq!(cst.format("%H:%M:%S").to_string(), "07:19:48");
        assert_eq!(cst.with_timezone(&Utc), utc);
    }

    #[test]
    fn local_offset_range_is_checked() {
        let utc = Utc.with_ymd_and_hms(2025, 1, 7, 0, 0, 0).unwrap();
        assert!(to_local(utc, 24).is_err());
        assert!(to_local(utc, -24).is_err());
        assert!(to_local(utc, 14).is_ok());
    }
}
