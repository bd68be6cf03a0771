//! Deals with different time scales, specifically, conversion from the
//! dynamical time of the lunar theory into UT, and from UT into local days.
//!
//! Only conversions necessary for other computations in this crate are
//! included.

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::error::CalendarError;

/// [Terrestrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented in Julian date (JD).
///
/// The new moon series yields instants in this (dynamical) time scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time),
/// represented in Julian date (JD), i.e. days since 4713 BC January 1 noon.
///
/// `2451545.125` is 2000-01-01T15:00Z.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Converts a dynamical time instant into UT.
    ///
    /// `t` is the epoch of `tt` in Julian centuries since 1900 January 0.5,
    /// the argument of [`delta_t`].
    pub fn from_tt(tt: Tt, t: f64) -> Self {
        Ut(tt.0 - delta_t(t))
    }

    /// Returns the date at the time point in timezone `tz`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::time_scales::{TimeZone, Ut};
    ///
    /// let ut = Ut(2451545.125); // 2000-01-01T15:00Z
    /// assert_eq!(2451545, ut.day_in(TimeZone::UTC).jdn());
    /// assert_eq!(2451546, ut.day_in(TimeZone::from_hours(10.0).unwrap()).jdn());
    /// ```
    pub fn day_in(&self, tz: TimeZone) -> Date {
        Date::from_jdn((self.0 + 0.5 + tz.hours() / 24.0).floor() as i32)
    }
}

/// ΔT (TT − UT) in days, as a function of `t`, Julian centuries since 1900
/// January 0.5.
///
/// The polynomial changes at `t = -11` (around 800 AD); both pieces are kept
/// as published.
pub fn delta_t(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    }
}

/// A fixed offset east of UTC, in hours.
///
/// No default zone is provided; every conversion names its zone.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TimeZone(f64);

impl TimeZone {
    pub const UTC: TimeZone = TimeZone(0.0);
    /// UTC+7, used for the Vietnamese calendar.
    pub const INDOCHINA: TimeZone = TimeZone(7.0);
    /// UTC+8, used for the Chinese calendar.
    pub const CHINA: TimeZone = TimeZone(8.0);

    /// Creates a zone `hours` ahead (east) of UTC. Fractional hours are
    /// allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::time_scales::TimeZone;
    ///
    /// assert_eq!(5.75, TimeZone::from_hours(5.75).unwrap().hours());
    /// assert!(TimeZone::from_hours(f64::NAN).is_err());
    /// ```
    pub fn from_hours(hours: f64) -> Result<Self, CalendarError> {
        if hours.is_finite() && (-12.0..=14.0).contains(&hours) {
            Ok(TimeZone(hours))
        } else {
            Err(CalendarError::InvalidTimeZone { hours })
        }
    }
    /// Creates a zone `minutes` ahead (east) of UTC.
    ///
    /// For Beijing time (UTC+8), `minutes` should be +480.
    pub fn from_minutes(minutes: i32) -> Result<Self, CalendarError> {
        Self::from_hours(minutes as f64 / 60.0)
    }
    /// Offset in hours east of UTC.
    pub fn hours(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TimeZone {
    type Error = CalendarError;
    fn try_from(hours: f64) -> Result<Self, Self::Error> {
        Self::from_hours(hours)
    }
}

impl From<TimeZone> for f64 {
    fn from(tz: TimeZone) -> f64 {
        tz.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_t_branches() {
        assert!((delta_t(0.0) + 0.000278).abs() < 1e-12);
        assert!((delta_t(-11.0) - 0.028509).abs() < 1e-9);
        assert!((delta_t(-12.0) - 0.036412384).abs() < 1e-9);
        // the two pieces do not meet at the threshold
        let early = 0.001 + 0.000839 * -11.0 + 0.0002261 * 121.0 - 0.00000845 * -1331.0
            - 0.000000081 * 14641.0;
        assert!((early - delta_t(-11.0)).abs() > 1e-4);
    }

    #[test]
    fn tt_to_ut() {
        let ut = Ut::from_tt(Tt(2451545.0), 1.0);
        assert!((ut.0 - (2451545.0 - 0.000249)).abs() < 1e-9);
    }

    #[test]
    fn local_days() {
        let ut = Ut(2451544.9); // 2000-01-01T09:36Z
        assert_eq!(2451545, ut.day_in(TimeZone::UTC).jdn());
        assert_eq!(2451545, ut.day_in(TimeZone::INDOCHINA).jdn());
        let ut = Ut(2451545.25); // 2000-01-01T18:00Z
        assert_eq!(2451545, ut.day_in(TimeZone::UTC).jdn());
        assert_eq!(2451546, ut.day_in(TimeZone::INDOCHINA).jdn());
        let ut = Ut(2451544.6); // 2000-01-01T02:24Z
        let west = TimeZone::from_hours(-10.0).unwrap();
        assert_eq!(2451544, ut.day_in(west).jdn());
    }

    #[test]
    fn zone_bounds() {
        assert_eq!(Ok(TimeZone::CHINA), TimeZone::from_minutes(480));
        assert_eq!(Ok(-12.0), TimeZone::from_hours(-12.0).map(|tz| tz.hours()));
        assert_eq!(
            Err(CalendarError::InvalidTimeZone { hours: 14.5 }),
            TimeZone::from_hours(14.5)
        );
        assert!(TimeZone::from_hours(f64::INFINITY).is_err());
    }
}
