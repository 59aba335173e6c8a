//! Derived read models: filtered listings, dashboard counts, open time slots.
//!
//! These are pure functions over store slices so pages stay declarative and
//! the selection rules are testable without a browser.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::content::ContentStore;
use super::models::{Booking, BookingStatus, GalleryImage, ImageCategory, Puppy, SlideshowImage};

/// Appointment slots offered by the booking form.
pub const TIME_SLOTS: [&str; 5] = ["9:00 AM", "11:00 AM", "2:00 PM", "4:00 PM", "6:00 PM"];

/// Interest option for visitors not asking about a specific puppy.
pub const GENERAL_INTEREST: &str = "Általános érdeklődés";

// =============================================================================
// GALLERY
// =============================================================================

/// Gallery category selection. `All` disables filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ImageCategory),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All).chain(ImageCategory::ALL.into_iter().map(Self::Only)).collect()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Összes",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, category: ImageCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// Gallery images followed by slideshow images, the latter under the
/// `slideshow` category.
#[must_use]
pub fn gallery_entries(gallery: &[GalleryImage], slideshow: &[SlideshowImage]) -> Vec<GalleryImage> {
    gallery
        .iter()
        .cloned()
        .chain(slideshow.iter().map(|s| GalleryImage {
            id: s.id,
            src: s.src.clone(),
            alt: s.alt.clone(),
            category: ImageCategory::Slideshow,
        }))
        .collect()
}

#[must_use]
pub fn filter_gallery(images: &[GalleryImage], filter: CategoryFilter) -> Vec<GalleryImage> {
    images.iter().filter(|img| filter.matches(img.category)).cloned().collect()
}

// =============================================================================
// PUPPIES
// =============================================================================

/// Puppy breed selection. Breeds are free text, so `Only` compares exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BreedFilter {
    #[default]
    All,
    Only(String),
}

impl BreedFilter {
    #[must_use]
    pub fn matches(&self, breed: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == breed,
        }
    }
}

#[must_use]
pub fn filter_puppies(puppies: &[Puppy], filter: &BreedFilter) -> Vec<Puppy> {
    puppies.iter().filter(|p| filter.matches(&p.breed)).cloned().collect()
}

/// Distinct breed names in first-seen order.
#[must_use]
pub fn unique_breeds(puppies: &[Puppy]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for puppy in puppies {
        if !seen.iter().any(|b| b == &puppy.breed) {
            seen.push(puppy.breed.clone());
        }
    }
    seen
}

/// Booking-form interest choices: each available puppy, then a general option.
#[must_use]
pub fn interest_options(puppies: &[Puppy]) -> Vec<String> {
    puppies
        .iter()
        .filter(|p| p.available)
        .map(|p| format!("{} - {}", p.name, p.breed))
        .chain(std::iter::once(GENERAL_INTEREST.to_owned()))
        .collect()
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// Slots on `date` not held by a pending or confirmed booking.
#[must_use]
pub fn available_time_slots(bookings: &[Booking], date: &str) -> Vec<&'static str> {
    TIME_SLOTS
        .into_iter()
        .filter(|slot| !is_slot_taken(bookings, date, slot))
        .collect()
}

#[must_use]
pub fn is_slot_taken(bookings: &[Booking], date: &str, slot: &str) -> bool {
    bookings
        .iter()
        .any(|b| b.status.is_active() && b.preferred_date == date && b.preferred_time == slot)
}

/// Up to `limit` bookings, newest first.
#[must_use]
pub fn recent_bookings(bookings: &[Booking], limit: usize) -> Vec<Booking> {
    bookings.iter().rev().take(limit).cloned().collect()
}

/// Admin overview counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub gallery_images: usize,
    pub slideshow_images: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub breeds: usize,
    pub puppies: usize,
}

impl DashboardStats {
    #[must_use]
    pub fn from_store(store: &ContentStore) -> Self {
        Self {
            gallery_images: store.gallery_images().len(),
            slideshow_images: store.slideshow_images().len(),
            total_bookings: store.bookings().len(),
            pending_bookings: store.bookings().iter().filter(|b| b.status == BookingStatus::Pending).count(),
            breeds: store.breeds().len(),
            puppies: store.puppies().len(),
        }
    }
}
