//! Conversion between the civil (Gregorian) calendar and the traditional
//! lunisolar calendar (âm lịch / 農曆), as shown on a wall clock.
//!
//! New moons and solar terms come from truncated astronomical series rather
//! than tables, so any year can be converted, for any fixed time zone.
//! Vietnam uses UTC+7 and China UTC+8; a few dates differ between the two.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use amlich::{Date, GregorianDate};
//!
//! let date = Date::from_gregorian(GregorianDate::new(1, 1, 2000).unwrap());
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Lunar calendar:
//!
//! ```
//! use amlich::{GregorianDate, LunarDate, TimeZone, lunar};
//!
//! let date = GregorianDate::new(1, 1, 2000).unwrap();
//! let lunar_date = lunar::solar_to_lunar(date, TimeZone::INDOCHINA);
//!
//! assert_eq!(LunarDate { day: 25, month: 11, year: 1999, is_leap_month: false }, lunar_date);
//! ```
//!
//! With a configured zone:
//!
//! ```
//! use amlich::{CalendarConfig, GregorianDate, LunarCalendar};
//!
//! let config = CalendarConfig::from_toml("time_zone = 7.0").unwrap();
//! let calendar = LunarCalendar::from_config(&config).unwrap();
//! let lunar_date = calendar.solar_to_lunar(GregorianDate::new(23, 5, 2020).unwrap());
//!
//! assert!(lunar_date.is_leap_month);
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod lunar;
pub mod time_scales;

pub use config::{CalendarConfig, LunarCalendar};
pub use date::{Date, GregorianDate, YearType};
pub use error::CalendarError;
pub use lunar::{LunarDate, Month};
pub use time_scales::TimeZone;
