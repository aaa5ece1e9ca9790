// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Scale markers for [`Time`].
//!
//! | Marker | Zero at | Integral values fall on |
//! |--------|---------|-------------------------|
//! | [`JD`] | JD 0 | 12:00 UTC |
//! | [`MJD`] | JD 2 400 000.5 | 00:00 UTC |

use qtty::Days;

use crate::instant::{Time, TimeScale};

/// Julian Date.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "JD";
    const EPOCH: Days = Days::new(0.0);
}

/// Modified Julian Date, `JD − 2 400 000.5`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";
    const EPOCH: Days = Days::new(2_400_000.5);
}

/// `From` between every pair of listed scales, both directions.
macro_rules! impl_scale_from {
    ($last:ty) => {};
    ($head:ty, $($tail:ty),+) => {
        $(
            impl From<Time<$head>> for Time<$tail> {
                #[inline]
                fn from(t: Time<$head>) -> Self {
                    t.to()
                }
            }

            impl From<Time<$tail>> for Time<$head> {
                #[inline]
                fn from(t: Time<$tail>) -> Self {
                    t.to()
                }
            }
        )+
        impl_scale_from!($($tail),+);
    };
}

impl_scale_from!(JD, MJD);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mjd_zero_is_its_epoch() {
        let jd: Time<JD> = Time::<MJD>::new(0.0).into();
        assert_eq!(jd.value(), 2_400_000.5);
    }

    #[test]
    fn j2000_in_both_scales() {
        let jd = Time::<JD>::new(2_451_545.0);
        let mjd: Time<MJD> = jd.into();
        assert!((mjd.value() - 51_544.5).abs() < 1e-10);
        assert!((Time::<JD>::from(mjd).value() - jd.value()).abs() < 1e-10);
    }
}
