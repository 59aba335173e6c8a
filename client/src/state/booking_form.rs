//! Booking form draft and field validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The booking page edits a `BookingDraft`; on submit `validate` either
//! produces a `NewBooking` for `ContentStore::add_booking` or a set of
//! per-field messages rendered inline. Nothing reaches the store on failure.

#[cfg(test)]
#[path = "booking_form_test.rs"]
mod booking_form_test;

use std::collections::BTreeMap;

use time::Date;

use super::catalog::{TIME_SLOTS, is_slot_taken};
use super::models::{Booking, NewBooking};
use crate::util::clock;

/// Fields that carry validation messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    Name,
    Phone,
    PreferredDate,
    PreferredTime,
}

pub const NAME_REQUIRED: &str = "A név megadása kötelező";
pub const PHONE_REQUIRED: &str = "A telefonszám megadása kötelező";
pub const PHONE_INVALID: &str = "Érvénytelen telefonszám formátum";
pub const DATE_REQUIRED: &str = "A dátum megadása kötelező";
pub const DATE_INVALID: &str = "Érvénytelen dátum formátum";
pub const DATE_IN_PAST: &str = "A dátum nem lehet múltbeli";
pub const TIME_REQUIRED: &str = "Az időpont megadása kötelező";
pub const TIME_TAKEN: &str = "Ez az időpont már foglalt";

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<BookingField, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: BookingField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, field: BookingField, message: &'static str) {
        self.0.insert(field, message);
    }

    /// Drop the message for `field`; called as the visitor edits it.
    pub fn clear(&mut self, field: BookingField) {
        self.0.remove(&field);
    }
}

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: String,
    pub dog_name: String,
}

impl BookingDraft {
    /// Check the draft against `today` and the existing bookings.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once so the form can mark them together.
    pub fn validate(&self, today: Date, bookings: &[Booking]) -> Result<NewBooking, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(BookingField::Name, NAME_REQUIRED);
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.insert(BookingField::Phone, PHONE_REQUIRED);
        } else if !is_valid_phone(phone) {
            errors.insert(BookingField::Phone, PHONE_INVALID);
        }

        let date = self.preferred_date.trim();
        if date.is_empty() {
            errors.insert(BookingField::PreferredDate, DATE_REQUIRED);
        } else {
            match clock::parse_iso_date(date) {
                None => errors.insert(BookingField::PreferredDate, DATE_INVALID),
                Some(day) if day < today => errors.insert(BookingField::PreferredDate, DATE_IN_PAST),
                Some(_) => {}
            }
        }

        let time = self.preferred_time.trim();
        if !TIME_SLOTS.contains(&time) {
            errors.insert(BookingField::PreferredTime, TIME_REQUIRED);
        } else if errors.get(BookingField::PreferredDate).is_none() && is_slot_taken(bookings, date, time) {
            errors.insert(BookingField::PreferredTime, TIME_TAKEN);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewBooking {
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: non_empty(&self.email),
            preferred_date: date.to_owned(),
            preferred_time: time.to_owned(),
            message: non_empty(&self.message),
            dog_name: non_empty(&self.dog_name),
        })
    }
}

/// Digits, whitespace and `+ - ( )` only.
#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')'))
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
