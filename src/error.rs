//! Error types for calendar conversions.

/// Error type for all fallible operations in this crate.
///
/// Every variant describes a caller input that cannot be converted; none of
/// them is transient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// A leap month was requested for a month that is not the leap month of
    /// that lunar year.
    #[error("lunar month {month} of {year} is not a leap month{}", leap_hint(.leap_month))]
    InvalidLeapMonth {
        month: u32,
        year: i32,
        /// The actual leap month of that year, if it has one.
        leap_month: Option<u32>,
    },

    /// Month number outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    /// Day number outside the given Gregorian (or Julian) month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        day: u32,
        month: u32,
        year: i32,
        max_day: u32,
    },

    /// One of the days dropped by the 1582 calendar reform (5..=14 October).
    #[error("1582-10-{day:02} does not exist")]
    DroppedDay { day: u32 },

    /// Lunar day outside the resolved lunar month.
    #[error("invalid lunar day: {day} for month {month} of {year} (max {max_day})")]
    InvalidLunarDay {
        day: u32,
        month: u32,
        year: i32,
        max_day: u32,
    },

    /// Non-finite or out of range time zone offset.
    #[error("invalid time zone offset: {hours} hours (must be -12..=14)")]
    InvalidTimeZone { hours: f64 },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn leap_hint(leap_month: &Option<u32>) -> String {
    match leap_month {
        Some(m) => format!(" (leap month is {m})"),
        None => " (year has no leap month)".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_leap_month_message() {
        let err = CalendarError::InvalidLeapMonth {
            month: 6,
            year: 2020,
            leap_month: Some(4),
        };
        assert_eq!(
            err.to_string(),
            "lunar month 6 of 2020 is not a leap month (leap month is 4)"
        );
        let err = CalendarError::InvalidLeapMonth {
            month: 1,
            year: 2024,
            leap_month: None,
        };
        assert_eq!(
            err.to_string(),
            "lunar month 1 of 2024 is not a leap month (year has no leap month)"
        );
    }

    #[test]
    fn boundary_messages() {
        assert_eq!(
            CalendarError::InvalidMonth { month: 13 }.to_string(),
            "invalid month: 13 (must be 1..=12)"
        );
        assert_eq!(
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2023,
                max_day: 28
            }
            .to_string(),
            "invalid day: 29 for 2023-02 (max 28)"
        );
        assert_eq!(
            CalendarError::DroppedDay { day: 5 }.to_string(),
            "1582-10-05 does not exist"
        );
    }

    #[test]
    fn error_is_send_sync_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<CalendarError>();
    }
}
