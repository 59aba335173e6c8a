use std::sync::Arc;

use time::{Duration, Month};

use super::*;
use crate::state::content::ContentStore;
use crate::state::models::BookingStatus;
use crate::state::storage::MemoryStorage;

fn today() -> Date {
    Date::from_calendar_date(2030, Month::January, 15).unwrap()
}

fn iso(date: Date) -> String {
    clock::format_iso_date(date)
}

fn valid_draft() -> BookingDraft {
    BookingDraft {
        name: "Kovács Anna".to_owned(),
        phone: "+36701234567".to_owned(),
        preferred_date: iso(today() + Duration::days(1)),
        preferred_time: "11:00 AM".to_owned(),
        ..Default::default()
    }
}

// =============================================================
// Accepting input
// =============================================================

#[test]
fn valid_draft_produces_trimmed_booking() {
    let draft = BookingDraft {
        name: "  Kovács Anna ".to_owned(),
        email: "   ".to_owned(),
        message: " Délután jó ".to_owned(),
        dog_name: "Luna - Maltipoo".to_owned(),
        ..valid_draft()
    };
    let booking = draft.validate(today(), &[]).unwrap();
    assert_eq!(booking.name, "Kovács Anna");
    assert_eq!(booking.email, None);
    assert_eq!(booking.message.as_deref(), Some("Délután jó"));
    assert_eq!(booking.dog_name.as_deref(), Some("Luna - Maltipoo"));
    assert_eq!(booking.preferred_date, "2030-01-16");
}

#[test]
fn today_is_not_in_the_past() {
    let draft = BookingDraft { preferred_date: iso(today()), ..valid_draft() };
    assert!(draft.validate(today(), &[]).is_ok());
}

#[test]
fn phone_accepts_spaces_dashes_and_parentheses() {
    assert!(is_valid_phone("0036 70 217 8885"));
    assert!(is_valid_phone("+36 (70) 217-8885"));
    assert!(!is_valid_phone("+36 70 CALL ME"));
    assert!(!is_valid_phone(""));
}

// =============================================================
// Rejecting input
// =============================================================

#[test]
fn empty_name_is_reported() {
    let draft = BookingDraft { name: "   ".to_owned(), ..valid_draft() };
    let errors = draft.validate(today(), &[]).unwrap_err();
    assert_eq!(errors.get(BookingField::Name), Some(NAME_REQUIRED));
    assert_eq!(errors.len(), 1);
}

#[test]
fn phone_required_then_pattern_checked() {
    let missing = BookingDraft { phone: String::new(), ..valid_draft() };
    assert_eq!(missing.validate(today(), &[]).unwrap_err().get(BookingField::Phone), Some(PHONE_REQUIRED));
    let invalid = BookingDraft { phone: "06-70-abc".to_owned(), ..valid_draft() };
    assert_eq!(invalid.validate(today(), &[]).unwrap_err().get(BookingField::Phone), Some(PHONE_INVALID));
}

#[test]
fn past_and_malformed_dates_are_rejected() {
    let past = BookingDraft { preferred_date: iso(today() - Duration::days(1)), ..valid_draft() };
    assert_eq!(past.validate(today(), &[]).unwrap_err().get(BookingField::PreferredDate), Some(DATE_IN_PAST));
    let missing = BookingDraft { preferred_date: String::new(), ..valid_draft() };
    assert_eq!(missing.validate(today(), &[]).unwrap_err().get(BookingField::PreferredDate), Some(DATE_REQUIRED));
    let garbage = BookingDraft { preferred_date: "tomorrow".to_owned(), ..valid_draft() };
    assert_eq!(garbage.validate(today(), &[]).unwrap_err().get(BookingField::PreferredDate), Some(DATE_INVALID));
}

#[test]
fn time_must_be_an_offered_slot() {
    let missing = BookingDraft { preferred_time: String::new(), ..valid_draft() };
    assert_eq!(missing.validate(today(), &[]).unwrap_err().get(BookingField::PreferredTime), Some(TIME_REQUIRED));
    let odd = BookingDraft { preferred_time: "3:15 AM".to_owned(), ..valid_draft() };
    assert!(odd.validate(today(), &[]).is_err());
}

#[test]
fn all_failures_reported_together() {
    let errors = BookingDraft::default().validate(today(), &[]).unwrap_err();
    assert_eq!(errors.len(), 4);
}

#[test]
fn clearing_a_field_error_leaves_the_rest() {
    let mut errors = BookingDraft::default().validate(today(), &[]).unwrap_err();
    errors.clear(BookingField::Name);
    assert!(errors.get(BookingField::Name).is_none());
    assert_eq!(errors.len(), 3);
}

#[test]
fn taken_slot_is_rejected_but_cancelled_slot_is_free() {
    let mut store = ContentStore::load(Arc::new(MemoryStorage::new()));
    let first = store.add_booking(valid_draft().validate(today(), store.bookings()).unwrap());

    let err = valid_draft().validate(today(), store.bookings()).unwrap_err();
    assert_eq!(err.get(BookingField::PreferredTime), Some(TIME_TAKEN));

    store.update_booking_status(first.id, BookingStatus::Cancelled).unwrap();
    assert!(valid_draft().validate(today(), store.bookings()).is_ok());
}

// =============================================================
// End-to-end submission scenario
// =============================================================

#[test]
fn submit_valid_then_invalid_booking() {
    let mem = Arc::new(MemoryStorage::new());
    let mut store = ContentStore::load(mem.clone());

    let booking = valid_draft().validate(today(), store.bookings()).map(|b| store.add_booking(b)).unwrap();
    assert_eq!(store.bookings().len(), 1);
    assert_eq!(booking.status, BookingStatus::Pending);

    let blank_name = BookingDraft { name: String::new(), preferred_time: "2:00 PM".to_owned(), ..valid_draft() };
    let result = blank_name.validate(today(), store.bookings()).map(|b| store.add_booking(b));
    let errors = result.unwrap_err();
    assert!(errors.get(BookingField::Name).is_some_and(|m| !m.is_empty()));
    assert_eq!(store.bookings().len(), 1);
}
