//! Traditional lunisolar calendar (âm lịch), as used in Vietnam and China.
//!
//! Months begin on the local day of a new moon. Month 11 is the month that
//! contains the winter solstice. A span from one month 11 to the next (an
//! [`Annus`]) holds either 12 or 13 lunations; with 13, the first lunation
//! that contains no major solar term becomes a leap month and repeats the
//! number of the month before it.
//!
//! New moons and solar terms are computed with the truncated series in
//! [`ephemeris`], evaluated for a caller-supplied [`TimeZone`]. The same
//! date can therefore fall in different lunar months at UTC+7 and UTC+8.
//!
//! # Example
//!
//! ```
//! use amlich::{GregorianDate, LunarDate, TimeZone, lunar};
//!
//! let date = GregorianDate::new(1, 1, 2000).unwrap();
//! let lunar_date = lunar::solar_to_lunar(date, TimeZone::INDOCHINA);
//!
//! assert_eq!(LunarDate { day: 25, month: 11, year: 1999, is_leap_month: false }, lunar_date);
//! assert_eq!(Ok(date), lunar::lunar_to_solar(lunar_date, TimeZone::INDOCHINA));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::date::{Date, GregorianDate, julian_day_from_gregorian};
use crate::error::CalendarError;
use crate::time_scales::TimeZone;

pub mod annus;
pub mod ephemeris;

pub use annus::{Annus, NewMoon, OtherAnnus};

use ephemeris::{lunation_before, lunation_nearest, new_moon_day, sun_longitude_sector};

/// Lunations scanned after month 11 before giving up on finding a leap
/// month. A leap month cannot come later than this.
const LEAP_SCAN_LIMIT: i32 = 14;

/// A day in the lunar calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Day of month, `1..=30`
    pub day: u32,
    /// Month number, `1..=12`
    pub month: u32,
    /// Lunar year, numbered after the Gregorian year in which its month 1
    /// begins
    pub year: i32,
    /// `true` for the intercalary month, which repeats the number of the
    /// month before it
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Returns the month name of the date.
    pub fn month_name(&self) -> Month {
        if self.is_leap_month {
            Month::Leap(self.month)
        } else {
            Month::Common(self.month)
        }
    }
}

/// Month name, `Common` for ordinary months, `Leap` for the intercalary one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// Returns the month number, leap or not.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` for a leap month, `false` otherwise.
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
}

/// Finds the first day of lunar month 11 that begins in (or just before the
/// end of) Gregorian `year`, i.e. the month containing the December solstice.
///
/// # Example
///
/// ```
/// use amlich::{GregorianDate, TimeZone, lunar::lunar_month11_start};
///
/// let start = lunar_month11_start(1999, TimeZone::INDOCHINA);
/// assert_eq!(GregorianDate { day: 8, month: 12, year: 1999 }, start.gregorian());
/// ```
pub fn lunar_month11_start(year: i32, tz: TimeZone) -> Date {
    let dec31 = julian_day_from_gregorian(31, 12, year);
    let k = ((dec31 - 2415021) as f64 / ephemeris::SYNODIC_MONTH).floor() as i32;
    let new_moon = new_moon_day(k, tz);
    // the solstice (start of sector 9) has not come yet at that new moon
    if sun_longitude_sector(new_moon, tz) >= 9 {
        trace!(year, "month 11 starts one lunation earlier");
        new_moon_day(k - 1, tz)
    } else {
        new_moon
    }
}

/// Finds how many lunations after month 11 (starting on `month11`) the leap
/// month falls, i.e. the first lunation during which the sun does not enter
/// a new sector.
///
/// Only meaningful when the annus starting at `month11` has 13 lunations.
/// The scan gives up at 14 lunations after month 11.
pub fn leap_month_offset(month11: Date, tz: TimeZone) -> i32 {
    let k = lunation_nearest(month11);
    let mut i = 1;
    let mut sector = sun_longitude_sector(new_moon_day(k + i, tz), tz);
    loop {
        let last = sector;
        i += 1;
        sector = sun_longitude_sector(new_moon_day(k + i, tz), tz);
        if sector == last || i >= LEAP_SCAN_LIMIT {
            break;
        }
    }
    trace!(month11 = month11.jdn(), offset = i - 1, "leap month scan");
    i - 1
}

/// Month number of the leap month found `offset` lunations after month 11.
fn leap_month_number(offset: i32) -> u32 {
    ((offset + 9).rem_euclid(12) + 1) as u32
}

/// Returns the leap month of lunar `year` (month 1 to month 12 of that
/// year), or `None` if the year has 12 months.
///
/// # Example
///
/// ```
/// use amlich::{TimeZone, lunar::leap_month};
///
/// assert_eq!(Some(4), leap_month(2020, TimeZone::INDOCHINA));
/// assert_eq!(None, leap_month(2024, TimeZone::INDOCHINA));
/// ```
pub fn leap_month(year: i32, tz: TimeZone) -> Option<u32> {
    let a11 = lunar_month11_start(year - 1, tz);
    let b11 = lunar_month11_start(year, tz);
    if b11 - a11 > 365 {
        // leap months 11 and 12 of this annus belong to the previous year
        let offset = leap_month_offset(a11, tz);
        if offset >= 3 {
            return Some(leap_month_number(offset));
        }
    }
    let c11 = lunar_month11_start(year + 1, tz);
    if c11 - b11 > 365 {
        let offset = leap_month_offset(b11, tz);
        if offset <= 2 {
            return Some(leap_month_number(offset));
        }
    }
    None
}

/// Converts a civil date into a lunar date in zone `tz`.
///
/// Never fails; fields of `date` are evaluated arithmetically without
/// validation (use [`GregorianDate::new`] to check them first).
pub fn solar_to_lunar(date: GregorianDate, tz: TimeZone) -> LunarDate {
    let day = Date::from_gregorian(date);
    let k = lunation_before(day);
    // latest new moon on or before `day`
    let month_start = [k + 1, k, k - 1]
        .into_iter()
        .map(|k| new_moon_day(k, tz))
        .find(|start| *start <= day)
        .unwrap_or_else(|| new_moon_day(k - 2, tz));

    let a11 = lunar_month11_start(date.year, tz);
    let (a11, b11, mut year) = if a11 >= month_start {
        (lunar_month11_start(date.year - 1, tz), a11, date.year)
    } else {
        (a11, lunar_month11_start(date.year + 1, tz), date.year + 1)
    };

    let diff = (month_start - a11).div_euclid(29);
    let mut month = diff + 11;
    let mut is_leap_month = false;
    if b11 - a11 > 365 {
        let leap_diff = leap_month_offset(a11, tz);
        if diff >= leap_diff {
            month = diff + 10;
            is_leap_month = diff == leap_diff;
        }
    }
    if month > 12 {
        month -= 12;
    }
    // months 11 and 12 at the head of the annus belong to the previous year
    if month >= 11 && diff < 4 {
        year -= 1;
    }

    LunarDate {
        day: (day - month_start + 1) as u32,
        month: month as u32,
        year,
        is_leap_month,
    }
}

/// Converts a lunar date in zone `tz` back into a civil date.
///
/// # Errors
///
/// - [`CalendarError::InvalidMonth`] if `month` is not in `1..=12`.
/// - [`CalendarError::InvalidLeapMonth`] if `is_leap_month` is set but that
///   month is not the leap month of `year`.
/// - [`CalendarError::InvalidLunarDay`] if `day` is `0` or past the end of
///   the month.
///
/// # Example
///
/// ```
/// use amlich::{CalendarError, GregorianDate, LunarDate, TimeZone, lunar::lunar_to_solar};
///
/// let tz = TimeZone::INDOCHINA;
/// let leap4 = LunarDate { day: 1, month: 4, year: 2020, is_leap_month: true };
/// assert_eq!(Ok(GregorianDate { day: 23, month: 5, year: 2020 }), lunar_to_solar(leap4, tz));
///
/// let leap6 = LunarDate { month: 6, ..leap4 };
/// assert!(matches!(
///     lunar_to_solar(leap6, tz),
///     Err(CalendarError::InvalidLeapMonth { leap_month: Some(4), .. })
/// ));
/// ```
pub fn lunar_to_solar(date: LunarDate, tz: TimeZone) -> Result<GregorianDate, CalendarError> {
    let LunarDate {
        day,
        month,
        year,
        is_leap_month,
    } = date;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }

    let (a11, b11) = if month < 11 {
        (
            lunar_month11_start(year - 1, tz),
            lunar_month11_start(year, tz),
        )
    } else {
        (
            lunar_month11_start(year, tz),
            lunar_month11_start(year + 1, tz),
        )
    };
    let k = lunation_nearest(a11);
    let mut off = (month as i32 - 11).rem_euclid(12);
    let mut leap_ok = !is_leap_month;
    if b11 - a11 > 365 {
        let leap_off = leap_month_offset(a11, tz);
        if is_leap_month {
            leap_ok = month == leap_month_number(leap_off);
        }
        if leap_ok && (is_leap_month || off >= leap_off) {
            off += 1;
        }
    }
    if !leap_ok {
        let err = CalendarError::InvalidLeapMonth {
            month,
            year,
            leap_month: leap_month(year, tz),
        };
        debug!(%err, "rejected lunar date");
        return Err(err);
    }

    let month_start = new_moon_day(k + off, tz);
    let max_day = (new_moon_day(k + off + 1, tz) - month_start) as u32;
    if !(1..=max_day).contains(&day) {
        let err = CalendarError::InvalidLunarDay {
            day,
            month,
            year,
            max_day,
        };
        debug!(%err, "rejected lunar date");
        return Err(err);
    }
    Ok((month_start + (day as i32 - 1)).gregorian())
}

/// Returns the sexagenary number (`1..=60`) of lunar `year`, with 1 for
/// Giáp Tý.
///
/// # Example
///
/// ```
/// use amlich::lunar::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(1984)); // Giáp Tý
/// assert_eq!(17, sexagenary_for_year(2000)); // Canh Thìn
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year - 1984).rem_euclid(60) as u32 + 1
}
