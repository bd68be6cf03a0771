//! New moon and solar longitude from truncated series.
//!
//! Both series follow Jean Meeus, *Astronomical Algorithms* (1998). They are
//! good to a few minutes over several millennia, which is enough to place new
//! moons and major solar terms on the right local day in all but rare corner
//! cases.

use std::f64::consts::PI;

use crate::date::Date;
use crate::time_scales::{TimeZone, Tt, Ut};

/// JD (UT) of the reference new moon, 1900-01-01 13:52 UT. Lunation index
/// `0` refers to this new moon.
pub const EPOCH_NEW_MOON: f64 = 2415021.076998695;

/// Mean length of a lunation in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

const LUNATIONS_PER_CENTURY: f64 = 1236.85;
const DEG: f64 = PI / 180.0;

/// Computes the time of the `k`-th new moon after the reference new moon
/// ([`EPOCH_NEW_MOON`]). Negative `k` counts backwards.
///
/// # Example
///
/// ```
/// use amlich::lunar::ephemeris::new_moon_time;
///
/// let ut = new_moon_time(2);
/// assert!((ut.0 - 2415079.9761).abs() < 1e-3); // 1900-03-01T11:25Z
/// ```
pub fn new_moon_time(k: i32) -> Ut {
    let k = k as f64;
    // Julian centuries since 1900 January 0.5
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let mean = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3
        + 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DEG).sin();
    // sun's mean anomaly
    let m = (359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3) * DEG;
    // moon's mean anomaly
    let mpr = (306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3) * DEG;
    // moon's argument of latitude
    let f = (21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3) * DEG;

    let correction = (0.1734 - 0.000393 * t) * m.sin() + 0.0021 * (2.0 * m).sin()
        - 0.4068 * mpr.sin()
        + 0.0161 * (2.0 * mpr).sin()
        - 0.0004 * (3.0 * mpr).sin()
        + 0.0104 * (2.0 * f).sin()
        - 0.0051 * (m + mpr).sin()
        - 0.0074 * (m - mpr).sin()
        + 0.0004 * (2.0 * f + m).sin()
        - 0.0004 * (2.0 * f - m).sin()
        - 0.0006 * (2.0 * f + mpr).sin()
        + 0.0010 * (2.0 * f - mpr).sin()
        + 0.0005 * (2.0 * mpr + m).sin();

    Ut::from_tt(Tt(mean + correction), t)
}

/// Returns the local day on which the `k`-th new moon falls in zone `tz`.
pub fn new_moon_day(k: i32, tz: TimeZone) -> Date {
    new_moon_time(k).day_in(tz)
}

/// Lunation index of the mean new moon on or before `date`.
pub(crate) fn lunation_before(date: Date) -> i32 {
    ((date.jdn() as f64 - EPOCH_NEW_MOON) / SYNODIC_MONTH).floor() as i32
}

/// Lunation index of the mean new moon nearest to `date`.
pub(crate) fn lunation_nearest(date: Date) -> i32 {
    ((date.jdn() as f64 - EPOCH_NEW_MOON) / SYNODIC_MONTH + 0.5).floor() as i32
}

/// Computes the apparent ecliptic longitude of the sun at `ut`, in radians,
/// normalized to `[0, 2π)`.
///
/// # Example
///
/// ```
/// use amlich::lunar::ephemeris::sun_longitude;
/// use amlich::time_scales::Ut;
///
/// let lon = sun_longitude(Ut(2451545.0)).to_degrees();
/// assert!((lon - 280.38).abs() < 0.01);
/// ```
pub fn sun_longitude(ut: Ut) -> f64 {
    // Julian centuries since J2000.0
    let t = (ut.0 - 2451545.0) / 36525.0;
    let t2 = t * t;
    // mean anomaly
    let m = (357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2) * DEG;
    // mean longitude
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let center = (1.914600 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000290 * (3.0 * m).sin();
    let lon = (l0 + center) * DEG;
    lon - 2.0 * PI * (lon / (2.0 * PI)).floor()
}

/// Returns which 30° sector (`0..=11`) the sun is in at the local midnight
/// starting `day` in zone `tz`.
///
/// Sector `0` starts at the March equinox, so a major solar term falls on
/// the day where the sector changes. The winter solstice starts sector `9`.
pub fn sun_longitude_sector(day: Date, tz: TimeZone) -> u32 {
    let midnight = Ut(day.jdn() as f64 - 0.5 - tz.hours() / 24.0);
    (sun_longitude(midnight) / PI * 6.0).floor() as u32
}
