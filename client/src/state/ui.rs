//! Local UI chrome state: navigation drawer, slideshow, lightbox, admin tabs.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the content store. Nothing
//! here is persisted; it resets when the visitor navigates away.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Hero slideshow advance interval.
pub const SLIDE_INTERVAL_MS: u64 = 5_000;
/// Artificial delay that drives the booking spinner.
pub const BOOKING_SUBMIT_DELAY_MS: u64 = 1_000;
/// How long the admin "saved" notice stays up.
pub const SAVE_NOTICE_MS: u64 = 3_000;

/// Shared chrome state provided as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub nav_open: bool,
    pub admin_tab: AdminTab,
    pub admin_menu_open: bool,
}

/// Admin panel sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Gallery,
    Slideshow,
    Breeds,
    Puppies,
    Bookings,
    Content,
    Menu,
    Contact,
}

impl AdminTab {
    pub const ALL: [Self; 9] = [
        Self::Dashboard,
        Self::Gallery,
        Self::Slideshow,
        Self::Breeds,
        Self::Puppies,
        Self::Bookings,
        Self::Content,
        Self::Menu,
        Self::Contact,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Áttekintés",
            Self::Gallery => "Galéria",
            Self::Slideshow => "Slideshow",
            Self::Breeds => "Fajták",
            Self::Puppies => "Kiskutyák",
            Self::Bookings => "Foglalások",
            Self::Content => "Tartalom",
            Self::Menu => "Menü",
            Self::Contact => "Kapcsolat",
        }
    }
}

/// Index after `current`, wrapping. Zero when `len` is zero.
#[must_use]
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index before `current`, wrapping. Zero when `len` is zero.
#[must_use]
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

/// Gallery lightbox position within the currently filtered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    pub index: Option<usize>,
}

impl Lightbox {
    pub fn open(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.index.is_some()
    }

    pub fn next(&mut self, len: usize) {
        if let Some(i) = self.index {
            self.index = Some(next_index(i, len));
        }
    }

    pub fn prev(&mut self, len: usize) {
        if let Some(i) = self.index {
            self.index = Some(prev_index(i, len));
        }
    }

    /// Apply a keyboard key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str, len: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowRight" => self.next(len),
            "ArrowLeft" => self.prev(len),
            _ => return false,
        }
        true
    }
}
