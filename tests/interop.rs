use amlich::lunar::{self, Annus};
use amlich::{CalendarError, GregorianDate, LunarDate, Month, TimeZone};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("amlich=trace"))
        .with_test_writer()
        .try_init();
}

#[test]
fn lunar_date_as_json() {
    let date = LunarDate {
        day: 1,
        month: 4,
        year: 2020,
        is_leap_month: true,
    };
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(
        r#"{"day":1,"month":4,"year":2020,"is_leap_month":true}"#,
        json
    );
    assert_eq!(date, serde_json::from_str::<LunarDate>(&json).unwrap());
    assert_eq!(r#"{"Leap":4}"#, serde_json::to_string(&date.month_name()).unwrap());
}

#[test]
fn gregorian_date_as_json() {
    let date = GregorianDate::new(23, 5, 2020).unwrap();
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(r#"{"day":23,"month":5,"year":2020}"#, json);
}

#[test]
fn time_zone_as_json() {
    assert_eq!("7.0", serde_json::to_string(&TimeZone::INDOCHINA).unwrap());
    assert_eq!(
        TimeZone::from_hours(5.75).unwrap(),
        serde_json::from_str::<TimeZone>("5.75").unwrap()
    );
    assert!(serde_json::from_str::<TimeZone>("20.0").is_err());
}

#[test]
fn annus_as_json() {
    let annus = Annus::new(2017, TimeZone::CHINA);
    let json = serde_json::to_string(&annus).unwrap();
    let back: Annus = serde_json::from_str(&json).unwrap();
    assert_eq!(annus, back);
    assert_eq!(Some(Month::Leap(6)), back.leap_month());
}

#[test]
fn rejected_conversions_are_logged_and_returned() {
    init_tracing();
    let tz = TimeZone::INDOCHINA;
    let request = LunarDate {
        day: 30,
        month: 1,
        year: 2024,
        is_leap_month: false,
    };
    // month 1 of 2024 has 29 days
    assert_eq!(
        Err(CalendarError::InvalidLunarDay {
            day: 30,
            month: 1,
            year: 2024,
            max_day: 29
        }),
        lunar::lunar_to_solar(request, tz)
    );
}
