use chrono::{NaiveDate, NaiveTime};
use hour::clock::FixedClock;
use hour::duration::{Duration, Fields, Unit};
use hour::error::HourError;

fn hms(h: u32, m: u32, s: u32) -> Duration {
    Duration::new(h, m, s).unwrap()
}

#[test]
fn test_create_keeps_every_valid_field() {
    for h in [0, 1, 23, 24, 1000] {
        for m in [0, 29, 30, 59] {
            for s in [0, 1, 30, 59] {
                let d = hms(h, m, s);
                assert_eq!(d.hours().value(), u64::from(h));
                assert_eq!(d.minutes().value(), u64::from(m));
                assert_eq!(d.seconds().unwrap().value(), u64::from(s));
            }
        }
    }
}

#[test]
fn test_create_rejects_out_of_range_fields() {
    assert!(matches!(
        Duration::new(1, 61, 0),
        Err(HourError::InvalidArgument(_))
    ));
    assert!(matches!(
        Duration::new(1, 0, 75),
        Err(HourError::InvalidArgument(_))
    ));
}

#[test]
fn test_boundary_sixty_is_rejected() {
    let err = Duration::new(0, 60, 0).unwrap_err();
    assert!(err.to_string().contains("minutes must be a number between 0 and 59"));

    let err = Duration::new(0, 0, 60).unwrap_err();
    assert!(err.to_string().contains("seconds must be a number between 0 and 59"));
}

#[test]
fn test_from_fields_defaults() {
    let d = Duration::from_fields(Fields {
        hours: 1,
        ..Fields::default()
    })
    .unwrap();
    assert_eq!(d.to_string(), "1:00:00");

    let absent = Duration::from_fields(Fields {
        hours: 1,
        minutes: 9,
        seconds: None,
    })
    .unwrap();
    assert_eq!(absent.to_string(), "1:09");
}

#[test]
fn test_from_fields_deserialized_from_json() {
    let fields: Fields = serde_json::from_str(r#"{ "minutes": 25, "seconds": 10 }"#).unwrap();
    let d = Duration::from_fields(fields).unwrap();
    assert_eq!(d, hms(0, 25, 10));
}

#[test]
fn test_from_overflow_minutes() {
    let d = Duration::from_overflow(85, 0).unwrap();
    assert_eq!(d.hours().value(), 1);
    assert_eq!(d.minutes().value(), 25);
    assert_eq!(d.seconds().unwrap().value(), 0);
}

#[test]
fn test_from_overflow_seconds() {
    let d = Duration::from_overflow(0, 2 * 60 * 60 + 25 * 60 + 5).unwrap();
    assert_eq!(d.hours().value(), 2);
    assert_eq!(d.minutes().value(), 25);
    assert_eq!(d.seconds().unwrap().value(), 5);
}

#[test]
fn test_from_overflow_rejects_both_units() {
    let err = Duration::from_overflow(1, 1).unwrap_err();
    assert_eq!(
        err,
        HourError::InvalidArgument("use either minutes or seconds, not both".to_string())
    );
}

#[test]
fn test_add_carries() {
    let sum = hms(0, 25, 10).checked_add(&hms(1, 0, 0)).unwrap();
    assert_eq!(sum.hours().value(), 1);
    assert_eq!(sum.minutes().value(), 25);
    assert_eq!(sum.seconds().unwrap().value(), 10);

    let carried = hms(0, 59, 45).checked_add(&hms(0, 0, 30)).unwrap();
    assert_eq!(carried.to_string(), "1:00:15");
}

#[test]
fn test_add_without_seconds_stays_without_seconds() {
    let a = Duration::create(1, 40, None).unwrap();
    let b = Duration::create(0, 30, None).unwrap();
    let sum = a.checked_add(&b).unwrap();
    assert!(!sum.has_seconds());
    assert_eq!(sum.to_string(), "2:10");
}

#[test]
fn test_mixing_seconds_tracking_fails() {
    let tracked = hms(1, 0, 0);
    let absent = Duration::create(1, 0, None).unwrap();

    let err = tracked.checked_add(&absent).unwrap_err();
    assert!(err.to_string().contains("cannot combine"));
    assert!(absent.checked_sub(&tracked).is_err());
}

#[test]
fn test_sub_borrows() {
    let diff = hms(2, 0, 5).checked_sub(&hms(0, 30, 10)).unwrap();
    assert_eq!(diff.to_string(), "1:29:55");
}

#[test]
fn test_sub_negative_fails() {
    let err = hms(0, 55, 30).checked_sub(&hms(1, 0, 0)).unwrap_err();
    assert_eq!(
        err,
        HourError::InvalidArgument("negative duration not supported".to_string())
    );
}

#[test]
fn test_scale() {
    let d = hms(0, 55, 10).scale(3.0).unwrap();
    assert_eq!(d.hours().value(), 2);
    assert_eq!(d.minutes().value(), 45);
    assert_eq!(d.seconds().unwrap().value(), 30);
}

#[test]
fn test_scale_without_seconds() {
    let d = Duration::create(0, 50, None).unwrap().scale(3.0).unwrap();
    assert!(!d.has_seconds());
    assert_eq!(d.to_string(), "2:30");
}

#[test]
fn test_scale_fractional_factor_fails() {
    let err = hms(1, 0, 0).scale(2.5).unwrap_err();
    assert!(err.to_string().contains("whole number"));
}

#[test]
fn test_decimal_hours() {
    assert_eq!(hms(1, 30, 0).to_decimal_hours(), 1.5);
    assert_eq!(hms(0, 0, 36).to_decimal_hours(), 0.01);
}

#[test]
fn test_sum() {
    let items = [hms(0, 20, 0), hms(0, 30, 0), hms(0, 15, 30)];
    assert_eq!(Duration::sum(&items).unwrap().to_string(), "1:05:30");
    assert_eq!(Duration::sum(&[] as &[Duration]).unwrap(), Duration::zero());
}

#[test]
fn test_now_reads_injected_clock() {
    let clock = FixedClock(NaiveTime::from_hms_opt(23, 59, 58).unwrap());
    let d = Duration::now_with(&clock, true);
    assert_eq!(d, hms(23, 59, 58));

    let d = Duration::now_with(&clock, false);
    assert!(!d.has_seconds());
    assert_eq!(d.to_string(), "23:59");
}

#[test]
fn test_now_from_system_clock_is_a_time_of_day() {
    let d = Duration::now(true);
    assert!(d.hours().value() < 24);
    assert!(d.has_seconds());
}

#[test]
fn test_to_time_on_date() {
    let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let at = hms(14, 5, 9).to_time_on(date).unwrap();
    assert_eq!(at.to_string(), "2026-10-18 14:05:09");

    assert!(hms(24, 0, 0).to_time_on(date).is_err());
}

#[test]
fn test_values_are_immutable() {
    let a = hms(1, 0, 0);
    let b = hms(0, 30, 0);
    let _ = a.checked_add(&b).unwrap();
    let _ = a.scale(4.0).unwrap();
    assert_eq!(a.to_string(), "1:00:00");
    assert_eq!(b.to_string(), "30:00");
}
