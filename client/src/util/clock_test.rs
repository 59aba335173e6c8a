use super::*;
use time::Month;

#[test]
fn rfc3339_formats_epoch_millis() {
    assert_eq!(rfc3339_from_millis(0), "1970-01-01T00:00:00Z");
}

#[test]
fn now_is_after_2024() {
    assert!(now_millis() > 1_704_067_200_000);
    assert!(now_rfc3339().ends_with('Z'));
}

#[test]
fn local_date_applies_offset_across_midnight() {
    // 2025-06-12T23:30:00Z
    let ms = 1_749_771_000_000;
    assert_eq!(local_date_at(ms, 0), Date::from_calendar_date(2025, Month::June, 12).unwrap());
    assert_eq!(local_date_at(ms, 120), Date::from_calendar_date(2025, Month::June, 13).unwrap());
}

#[test]
fn parse_iso_date_accepts_input_format() {
    let date = parse_iso_date(" 2025-06-20 ").unwrap();
    assert_eq!(date, Date::from_calendar_date(2025, Month::June, 20).unwrap());
    assert_eq!(format_iso_date(date), "2025-06-20");
}

#[test]
fn parse_iso_date_rejects_garbage() {
    assert!(parse_iso_date("").is_none());
    assert!(parse_iso_date("20/06/2025").is_none());
    assert!(parse_iso_date("2025-02-30").is_none());
}
