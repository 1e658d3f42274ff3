use hour::duration::Duration;
use hour::error::HourError;

#[test]
fn test_to_string_layouts() {
    assert_eq!(Duration::new(1, 9, 5).unwrap().to_string(), "1:09:05");
    assert_eq!(Duration::new(0, 52, 0).unwrap().to_string(), "52:00");
    assert_eq!(Duration::create(1, 9, None).unwrap().to_string(), "1:09");
    assert_eq!(Duration::new(12, 0, 0).unwrap().to_string(), "12:00:00");
}

#[test]
fn test_parse_with_seconds() {
    let d = Duration::parse("1:02:30", true).unwrap();
    assert_eq!(d, Duration::new(1, 2, 30).unwrap());
    assert!(d.has_seconds());
}

#[test]
fn test_parse_without_seconds() {
    let d = Duration::parse("7:45", false).unwrap();
    assert!(!d.has_seconds());
    assert_eq!(d.to_string(), "7:45");
}

#[test]
fn test_parse_too_few_segments() {
    let err = Duration::parse("1", true).unwrap_err();
    match err {
        HourError::InvalidArgument(msg) => assert!(msg.starts_with("too few segments")),
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(Duration::parse("1:02", true).is_err());
}

#[test]
fn test_parse_too_many_segments() {
    let err = Duration::parse("1:02:03:04", false).unwrap_err();
    match err {
        HourError::InvalidArgument(msg) => assert!(msg.starts_with("too many segments")),
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(Duration::parse("1:02:03", false).is_err());
}

#[test]
fn test_parse_validates_ranges() {
    assert!(Duration::parse("1:75:00", true).is_err());
    assert!(Duration::parse("1:00:60", true).is_err());
}

#[test]
fn test_parse_round_trip() {
    for h in [1, 9, 10, 42, 99] {
        for m in [0, 5, 59] {
            for s in [0, 7, 59] {
                let d = Duration::new(h, m, s).unwrap();
                let back = Duration::parse(&d.to_string(), true).unwrap();
                assert_eq!(back, d);
                assert!(back.has_seconds());
            }
        }
    }
}

#[test]
fn test_alternate_form_round_trips_zero_hours() {
    let d = Duration::new(0, 52, 0).unwrap();
    let back: Duration = format!("{d:#}").parse().unwrap();
    assert_eq!(back, d);

    let absent = Duration::create(0, 5, None).unwrap();
    let back: Duration = format!("{absent:#}").parse().unwrap();
    assert!(!back.has_seconds());
    assert_eq!(back, absent);
}
