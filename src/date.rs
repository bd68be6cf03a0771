//! Calendar-independant date, and the Gregorian (proleptic Julian before the
//! 1582 reform) calendar.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// First Julian day number counted with Gregorian rules (1582-10-15).
pub const GREGORIAN_CUTOVER_JDN: i32 = 2299161;

/// A calendar-independant date.
///
/// Wraps a Julian day number (JDN), i.e. whole days since January 1, 4713
/// BC, proleptic Julian calendar. Negative values are allowed for earlier
/// proleptic dates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` from a calendar date.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Date, GregorianDate};
    ///
    /// let date = Date::from_gregorian(GregorianDate::new(1, 1, 2000).unwrap());
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(date: GregorianDate) -> Self {
        Self::from_jdn(julian_day_from_gregorian(
            date.day as i32,
            date.month as i32,
            date.year,
        ))
    }
    /// Represents the date in the civil calendar (Julian before the reform).
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Date, GregorianDate};
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!(GregorianDate { day: 1, month: 1, year: 2000 }, date.gregorian());
    /// ```
    pub fn gregorian(&self) -> GregorianDate {
        julian_day_to_gregorian(self.jdn)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// assert_eq!(6, Date::from_jdn(2451545).day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn.rem_euclid(7) as u32 + 1
    }
    /// Returns the sexagenary day number of the date, numbered from 1
    /// (Giáp Tý) to 60 (Quý Hợi).
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// assert_eq!(55, Date::from_jdn(2451545).sexagenary()); // Mậu Ngọ
    /// ```
    pub fn sexagenary(&self) -> u32 {
        (self.jdn + 49).rem_euclid(60) as u32 + 1
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// A day in the civil calendar: Gregorian from 1582-10-15 on, proleptic
/// Julian before that.
///
/// `year` is an astronomical year number, i.e. 1 BC is `0`, 2 BC is `-1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GregorianDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl GregorianDate {
    /// Creates a checked date.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{CalendarError, GregorianDate};
    ///
    /// assert!(GregorianDate::new(29, 2, 2000).is_ok());
    /// assert!(GregorianDate::new(29, 2, 1500).is_ok()); // Julian leap year
    /// assert_eq!(
    ///     Err(CalendarError::DroppedDay { day: 10 }),
    ///     GregorianDate::new(10, 10, 1582)
    /// );
    /// ```
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(month, YearType::for_civil_year(year));
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        if year == 1582 && month == 10 && (5..=14).contains(&day) {
            return Err(CalendarError::DroppedDay { day });
        }
        Ok(Self { day, month, year })
    }
}

/// Computes the Julian day number of `day`/`month`/`year`.
///
/// Any integers are accepted and evaluated arithmetically. Results before
/// [`GREGORIAN_CUTOVER_JDN`] are recomputed with Julian calendar rules, so
/// `4 Oct 1582` and `15 Oct 1582` are consecutive days.
///
/// # Example
///
/// ```
/// use amlich::date::julian_day_from_gregorian;
///
/// assert_eq!(2451545, julian_day_from_gregorian(1, 1, 2000));
/// assert_eq!(
///     1,
///     julian_day_from_gregorian(15, 10, 1582) - julian_day_from_gregorian(4, 10, 1582)
/// );
/// ```
pub fn julian_day_from_gregorian(day: i32, month: i32, year: i32) -> i32 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let base = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4);
    let jdn = base - y.div_euclid(100) + y.div_euclid(400) - 32045;
    if jdn < GREGORIAN_CUTOVER_JDN {
        base - 32083
    } else {
        jdn
    }
}

/// Converts a Julian day number back into a calendar date, the inverse of
/// [`julian_day_from_gregorian`].
pub fn julian_day_to_gregorian(jdn: i32) -> GregorianDate {
    let (b, c) = if jdn >= GREGORIAN_CUTOVER_JDN {
        let a = jdn + 32044;
        let b = (4 * a + 3).div_euclid(146097);
        (b, a - (146097 * b).div_euclid(4))
    } else {
        (0, jdn + 32082)
    };
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    GregorianDate {
        day: (e - (153 * m + 2).div_euclid(5) + 1) as u32,
        month: (m + 3 - 12 * m.div_euclid(10)) as u32,
        year: b * 100 + d - 4800 + m.div_euclid(10),
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Determines if `year` is a leap year in Julian calendar.
    pub fn from_julian(year: i32) -> Self {
        if year.rem_euclid(4) == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Picks the calendar in force for `year`: Julian before 1582, Gregorian
    /// afterwards. February 1582 is common in both.
    pub fn for_civil_year(year: i32) -> Self {
        if year < 1582 {
            Self::from_julian(year)
        } else {
            Self::from_gregorian(year)
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in `month` (`1..=12`).
pub fn days_in_month(month: u32, year_type: YearType) -> u32 {
    match month {
        2 => 28 + year_type.is_leap() as u32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(day: u32, month: u32, year: i32) -> GregorianDate {
        GregorianDate { day, month, year }
    }

    #[test]
    fn from_gregorian() {
        assert_eq!(2440588, julian_day_from_gregorian(1, 1, 1970));
        assert_eq!(2459466, julian_day_from_gregorian(8, 9, 2021));
        assert_eq!(0, julian_day_from_gregorian(1, 1, -4712));
        assert_eq!(-365, julian_day_from_gregorian(1, 1, -4713));
    }

    #[test]
    fn to_gregorian() {
        assert_eq!(ymd(1, 1, 1970), julian_day_to_gregorian(2440588));
        assert_eq!(ymd(8, 9, 2021), julian_day_to_gregorian(2459466));
        assert_eq!(ymd(1, 1, 2000), julian_day_to_gregorian(2451545));
        assert_eq!(ymd(1, 1, -4713), julian_day_to_gregorian(-365));
    }

    #[test]
    fn cutover() {
        assert_eq!(2299160, julian_day_from_gregorian(4, 10, 1582));
        assert_eq!(2299161, julian_day_from_gregorian(15, 10, 1582));
        assert_eq!(ymd(4, 10, 1582), julian_day_to_gregorian(2299160));
        assert_eq!(ymd(15, 10, 1582), julian_day_to_gregorian(2299161));
    }

    #[test]
    fn julian_leap_day_round_trips() {
        let jdn = julian_day_from_gregorian(29, 2, 1500);
        assert_eq!(ymd(29, 2, 1500), julian_day_to_gregorian(jdn));
        assert_eq!(1, julian_day_from_gregorian(1, 3, 1500) - jdn);
    }

    #[test]
    fn date_arithmetic() {
        let date = Date::from_jdn(2451545);
        assert_eq!(Date::from_jdn(2451575), date + 30);
        assert_eq!(Date::from_jdn(2451515), date + -30);
        assert_eq!(-30, Date::from_jdn(2451515) - date);
        assert_eq!(ymd(31, 12, 1999), (date + -1).gregorian());
    }

    #[test]
    fn to_day_of_week() {
        assert_eq!(4, Date::from_jdn(2440588).day_of_week());
        assert_eq!(3, Date::from_jdn(2459466).day_of_week());
        // 1 Jan 4713 BC was a Monday
        assert_eq!(1, Date::from_jdn(0).day_of_week());
        assert_eq!(7, Date::from_jdn(-1).day_of_week());
    }

    #[test]
    fn to_sexagenary() {
        assert_eq!(18, Date::from_jdn(2440588).sexagenary());
        assert_eq!(56, Date::from_jdn(2459466).sexagenary());
        assert_eq!(49, Date::from_jdn(-1).sexagenary());
    }

    #[test]
    fn checked_dates() {
        assert_eq!(Ok(ymd(31, 12, 1999)), GregorianDate::new(31, 12, 1999));
        assert_eq!(
            Err(CalendarError::InvalidMonth { month: 0 }),
            GregorianDate::new(1, 0, 2000)
        );
        assert_eq!(
            Err(CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 1900,
                max_day: 28
            }),
            GregorianDate::new(29, 2, 1900)
        );
        assert_eq!(
            Err(CalendarError::InvalidDay {
                day: 0,
                month: 1,
                year: 2000,
                max_day: 31
            }),
            GregorianDate::new(0, 1, 2000)
        );
        assert!(GregorianDate::new(4, 10, 1582).is_ok());
        assert!(GregorianDate::new(15, 10, 1582).is_ok());
        for day in 5..=14 {
            assert_eq!(
                Err(CalendarError::DroppedDay { day }),
                GregorianDate::new(day, 10, 1582)
            );
        }
    }

    #[test]
    fn year_types() {
        assert!(YearType::from_gregorian(2000).is_leap());
        assert!(!YearType::from_gregorian(1900).is_leap());
        assert!(YearType::from_julian(1900).is_leap());
        assert!(YearType::for_civil_year(-4).is_leap());
        assert!(!YearType::for_civil_year(1700).is_leap());
        assert_eq!(29, days_in_month(2, YearType::Leap));
        assert_eq!(30, days_in_month(11, YearType::Common));
    }
}
