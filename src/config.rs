//! Converter bound to a configured time zone.

use serde::Deserialize;

use crate::date::GregorianDate;
use crate::error::CalendarError;
use crate::lunar::{self, Annus, LunarDate};
use crate::time_scales::TimeZone;

/// Calendar settings as read from a configuration file.
///
/// ```toml
/// time_zone = 7.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Hours east of UTC used to place new moons and solar terms on local
    /// days.
    pub time_zone: f64,
}

impl CalendarConfig {
    /// Parses a TOML document.
    ///
    /// The zone itself is checked later, by [`LunarCalendar::from_config`].
    pub fn from_toml(text: &str) -> Result<Self, CalendarError> {
        toml::from_str(text).map_err(|e| CalendarError::InvalidConfig(e.to_string()))
    }
}

/// Lunar conversions for one time zone.
///
/// # Example
///
/// ```
/// use amlich::{CalendarConfig, GregorianDate, LunarCalendar};
///
/// let config = CalendarConfig { time_zone: 7.0 };
/// let calendar = LunarCalendar::from_config(&config).unwrap();
///
/// let date = GregorianDate::new(10, 2, 2024).unwrap();
/// let lunar_date = calendar.solar_to_lunar(date);
/// assert_eq!((1, 1, 2024), (lunar_date.day, lunar_date.month, lunar_date.year));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LunarCalendar {
    time_zone: TimeZone,
}

impl LunarCalendar {
    pub fn new(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    /// Validates `config` into a calendar.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        TimeZone::from_hours(config.time_zone).map(Self::new)
    }

    pub fn time_zone(&self) -> TimeZone {
        self.time_zone
    }

    /// See [`lunar::solar_to_lunar`].
    pub fn solar_to_lunar(&self, date: GregorianDate) -> LunarDate {
        lunar::solar_to_lunar(date, self.time_zone)
    }

    /// See [`lunar::lunar_to_solar`].
    pub fn lunar_to_solar(&self, date: LunarDate) -> Result<GregorianDate, CalendarError> {
        lunar::lunar_to_solar(date, self.time_zone)
    }

    /// See [`lunar::leap_month`].
    pub fn leap_month(&self, year: i32) -> Option<u32> {
        lunar::leap_month(year, self.time_zone)
    }

    /// See [`Annus::new`].
    pub fn annus(&self, annus: i32) -> Annus {
        Annus::new(annus, self.time_zone)
    }
}
