// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use qtty::Days;

use crate::instant::Time;
use crate::scales::JD;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Days elapsed since J2000.0.
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Noon-referenced Julian Day Number of the UTC civil date containing
    /// this instant.
    ///
    /// Julian days turn over at noon while civil dates turn over at
    /// midnight, so every instant from `D 00:00` to `D 23:59:59` maps to the
    /// integral value of `D 12:00`.
    #[inline]
    pub fn civil_day_number(&self) -> Self {
        Self::new((self.value() + 0.5).floor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn j2000_is_noon() {
        let noon = Time::<JD>::from_utc(Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
        assert_eq!(noon, Time::<JD>::J2000);
        assert_eq!(noon.days_since_j2000(), Days::new(0.0));
    }

    #[test]
    fn civil_day_number_covers_whole_civil_date() {
        let midnight = Time::<JD>::new(2_460_682.5);
        let late = Time::<JD>::from_utc(Utc.with_ymd_and_hms(2025, 1, 7, 23, 59, 59).unwrap());
        let noon = Time::<JD>::new(2_460_683.0);

        assert_eq!(midnight.civil_day_number().value(), 2_460_683.0);
        assert_eq!(late.civil_day_number().value(), 2_460_683.0);
        assert_eq!(noon.civil_day_number().value(), 2_460_683.0);
    }

    #[test]
    fn civil_day_number_steps_at_midnight() {
        let before = Time::<JD>::new(2_460_682.499_99);
        assert_eq!(before.civil_day_number().value(), 2_460_682.0);
    }
}
