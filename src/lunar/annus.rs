//! Month-by-month view of one annus.

use serde::{Deserialize, Serialize};

use super::ephemeris::{lunation_nearest, new_moon_day};
use super::{LunarDate, Month, leap_month_offset, lunar_month11_start};
use crate::date::Date;
use crate::time_scales::TimeZone;

/// The span between two consecutive starts of month 11, i.e. from the month
/// containing one winter solstice up to (not including) the month containing
/// the next.
///
/// Lunar years begin with month 1, but months are numbered by annus, so this
/// is the unit the calendar is computed in. The lunar year of a date follows
/// from its annus and month.
///
/// # Example
///
/// ```
/// use amlich::{Date, GregorianDate, LunarDate, TimeZone};
/// use amlich::lunar::{Annus, Month::*};
///
/// let date = Date::from_gregorian(GregorianDate::new(23, 7, 2017).unwrap());
/// let annus = Annus::from_date(date, TimeZone::INDOCHINA);
///
/// assert_eq!(2017, annus.annus);
/// assert_eq!(Some(Leap(6)), annus.leap_month());
/// assert_eq!(
///     Ok(LunarDate { day: 1, month: 6, year: 2017, is_leap_month: true }),
///     annus.ymd_for(date)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annus {
    /// Gregorian year in which most of the annus falls, i.e. the year whose
    /// December holds the closing month 11.
    pub annus: i32,
    /// Zone the month starts were computed for
    pub time_zone: TimeZone,
    /// All month starts, including the first month of the next annus to mark
    /// the end of this one
    pub months: Vec<NewMoon>,
}

/// Start of a lunar month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewMoon {
    /// Month name
    pub month: Month,
    /// Local day of the new moon
    pub date: Date,
}

/// Indicates the given date is not in this annus, and whether it is before
/// or after it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherAnnus {
    Before,
    After,
}

impl Annus {
    /// Computes the annus ending with month 11 of Gregorian `annus`.
    pub fn new(annus: i32, tz: TimeZone) -> Self {
        use Month::*;

        let a11 = lunar_month11_start(annus - 1, tz);
        let b11 = lunar_month11_start(annus, tz);
        let k = lunation_nearest(a11);
        let (lunations, leap_offset) = if b11 - a11 > 365 {
            (13, Some(leap_month_offset(a11, tz)))
        } else {
            (12, None)
        };

        let months = (0..=lunations)
            .map(|i| {
                let (num, is_leap) = match leap_offset {
                    Some(leap) if i >= leap => (i + 10, i == leap),
                    _ => (i + 11, false),
                };
                let num = ((num - 1) % 12 + 1) as u32;
                NewMoon {
                    month: if is_leap { Leap(num) } else { Common(num) },
                    date: new_moon_day(k + i, tz),
                }
            })
            .collect();

        Annus {
            annus,
            time_zone: tz,
            months,
        }
    }

    /// Finds the annus containing `date`.
    pub fn from_date(date: Date, tz: TimeZone) -> Self {
        let mut y = date.gregorian().year;
        loop {
            let annus = Self::new(y, tz);
            match annus.contains(date) {
                Ok(()) => return annus,
                Err(OtherAnnus::Before) => y -= 1,
                Err(OtherAnnus::After) => y += 1,
            }
        }
    }

    /// First day of the annus (start of month 11).
    pub fn start(&self) -> Date {
        self.months[0].date
    }
    /// First day after the annus (start of the next month 11).
    pub fn end(&self) -> Date {
        self.months[self.months.len() - 1].date
    }
    /// Number of months in the annus, 12 or 13.
    pub fn len(&self) -> usize {
        self.months.len() - 1
    }
    /// The leap month of the annus, if it has 13 months.
    pub fn leap_month(&self) -> Option<Month> {
        self.months[..self.len()]
            .iter()
            .map(|m| m.month)
            .find(Month::is_leap)
    }
    /// Number of days in the `index`-th month (0 is month 11).
    pub fn month_len(&self, index: usize) -> Option<u32> {
        let start = self.months.get(index)?.date;
        let end = self.months.get(index + 1)?.date;
        Some((end - start) as u32)
    }

    fn contains(&self, date: Date) -> Result<(), OtherAnnus> {
        if date < self.start() {
            Err(OtherAnnus::Before)
        } else if date >= self.end() {
            Err(OtherAnnus::After)
        } else {
            Ok(())
        }
    }

    /// Returns the lunar date of `date`, which must be in this annus.
    ///
    /// If it is not, returns `Err` indicating whether it is before or after.
    pub fn ymd_for(&self, date: Date) -> Result<LunarDate, OtherAnnus> {
        self.contains(date)?;

        let idx = self.months.partition_point(|m| m.date <= date) - 1;
        let m = self.months[idx];
        let year = if m.month.num() >= 11 {
            self.annus - 1
        } else {
            self.annus
        };
        Ok(LunarDate {
            day: (date - m.date + 1) as u32,
            month: m.month.num(),
            year,
            is_leap_month: m.month.is_leap(),
        })
    }
}
