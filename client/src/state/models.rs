//! Persisted record types for site content and bookings.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON already sitting in visitors' `localStorage`
//! (`heroTitle` camelCase for site text, `preferred_date` snake_case for
//! bookings) so existing browser data keeps loading. Fields added after the
//! first release carry `#[serde(default)]`; a record missing a required field
//! fails the whole collection, which then falls back to defaults.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier shared by every id-bearing collection.
pub type RecordId = u64;

// =============================================================================
// IMAGES
// =============================================================================

/// Fixed set of gallery categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    Family,
    Maltipoo,
    Cavapoo,
    Goldendoodle,
    #[default]
    Puppies,
    Slideshow,
}

impl ImageCategory {
    pub const ALL: [Self; 6] = [
        Self::Family,
        Self::Maltipoo,
        Self::Cavapoo,
        Self::Goldendoodle,
        Self::Puppies,
        Self::Slideshow,
    ];

    /// Stable slug used in persisted JSON and `<select>` values.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Maltipoo => "maltipoo",
            Self::Cavapoo => "cavapoo",
            Self::Goldendoodle => "goldendoodle",
            Self::Puppies => "puppies",
            Self::Slideshow => "slideshow",
        }
    }

    /// Display label for filter buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Family => "Családi",
            Self::Maltipoo => "Maltipoo",
            Self::Cavapoo => "Cavapoo",
            Self::Goldendoodle => "Goldendoodle",
            Self::Puppies => "Kiskutyák",
            Self::Slideshow => "Slideshow",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Gallery photo uploaded by the admin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: RecordId,
    /// Image URL or `data:` URL.
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub category: ImageCategory,
}

/// Marker carried in the `type` field of slideshow records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    #[default]
    Slideshow,
}

/// Hero slideshow photo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideshowImage {
    pub id: RecordId,
    pub src: String,
    pub alt: String,
    #[serde(rename = "type", default)]
    pub kind: ImageKind,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================================
// BREEDS & PUPPIES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub lifespan: String,
    /// Ordered trait badges ("Hipoallergén", "Intelligens", ...).
    #[serde(default)]
    pub characteristics: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puppy {
    pub id: RecordId,
    pub name: String,
    /// Free text typed by the admin; not a reference into the breed list.
    pub breed: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// Booking lifecycle.
///
/// `Pending -> Confirmed | Cancelled`, `Confirmed -> Cancelled`. A cancelled
/// booking is terminal apart from deletion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Whether the admin "confirm" action is offered.
    #[must_use]
    pub fn can_confirm(self) -> bool {
        self == Self::Pending
    }

    /// Whether the admin "cancel" action is offered.
    #[must_use]
    pub fn can_cancel(self) -> bool {
        self != Self::Cancelled
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        match next {
            Self::Confirmed => self.can_confirm(),
            Self::Cancelled => self.can_cancel(),
            Self::Pending => self == Self::Pending,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Függő",
            Self::Confirmed => "Megerősítve",
            Self::Cancelled => "Törölve",
        }
    }

    /// Whether the booking still holds its time slot.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::Cancelled
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        })
    }
}

/// Visitor appointment request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    /// ISO `YYYY-MM-DD`.
    pub preferred_date: String,
    /// One of the booking time slots, e.g. `"11:00 AM"`.
    pub preferred_time: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub dog_name: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

// =============================================================================
// SITE TEXT & MENU
// =============================================================================

/// Editable site copy. A singleton: replaced wholesale on admin save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about_text: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub instagram: String,
    pub opening_hours: String,
    pub address: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            hero_title: "Hibrid Shopp".to_owned(),
            hero_subtitle: "Prémium hibrid kutyafajták szeretettel és gondossággal".to_owned(),
            about_text: "Több mint 10 éves tapasztalattal rendelkezünk a hibrid kutyafajták tenyésztésében"
                .to_owned(),
            contact_phone: "+36 70 217 8885".to_owned(),
            contact_email: "shoppdogg583@gmail.com".to_owned(),
            instagram: "@hibridshopp".to_owned(),
            opening_hours: "Hétfő-Péntek 8:00-22:00".to_owned(),
            address: "Budapest, Magyarország".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: RecordId,
    pub name: String,
    pub path: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub order: u32,
}

/// Navigation seeded on first visit.
#[must_use]
pub fn default_menu_items() -> Vec<MenuItem> {
    [("Főoldal", "/"), ("Galéria", "/gallery"), ("Kiskutyák", "/puppies"), ("Időpontfoglalás", "/booking")]
        .into_iter()
        .zip(1u32..)
        .map(|((name, path), order)| MenuItem {
            id: RecordId::from(order),
            name: name.to_owned(),
            path: path.to_owned(),
            visible: true,
            order,
        })
        .collect()
}

fn default_true() -> bool {
    true
}

// =============================================================================
// DRAFTS
// =============================================================================
// Field sets accepted by the store's `add_*` operations. The store fills in
// id, timestamps and defaulted flags.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewGalleryImage {
    pub src: String,
    pub alt: String,
    pub category: ImageCategory,
}

impl NewGalleryImage {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.src.trim().is_empty() && !self.alt.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewSlideshowImage {
    pub src: String,
    pub alt: String,
}

impl NewSlideshowImage {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.src.trim().is_empty() && !self.alt.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewBreed {
    pub name: String,
    pub description: String,
    pub size: String,
    pub lifespan: String,
    pub characteristics: Vec<String>,
    pub image: Option<String>,
}

impl NewBreed {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewPuppy {
    pub name: String,
    pub breed: String,
    pub age: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

impl NewPuppy {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.breed.trim().is_empty()
    }
}

/// Validated booking fields; produced by the booking form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: Option<String>,
    pub dog_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub path: String,
}

impl NewMenuItem {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.path.trim().is_empty()
    }
}

/// Split a comma-separated characteristics field into trimmed badges.
#[must_use]
pub fn parse_characteristics(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}
