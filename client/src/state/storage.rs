//! Key-value persistence boundary for site collections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The content store and auth gate write whole JSON blobs under fixed keys.
//! In the browser those land in `localStorage`. On the server the browser
//! backend is inert, so the SSR pass renders defaults. Tests use an in-memory
//! map that records its writes.
//!
//! ERROR HANDLING
//! ==============
//! Storage is best effort. Missing keys and unparsable text come back as
//! `None` so callers fall back to defaults; failed writes are logged and
//! dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Fixed storage key for each persisted collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    GalleryImages,
    Bookings,
    Breeds,
    Puppies,
    SiteContent,
    SlideshowImages,
    MenuItems,
}

impl CollectionKey {
    pub const ALL: [Self; 7] = [
        Self::GalleryImages,
        Self::Bookings,
        Self::Breeds,
        Self::Puppies,
        Self::SiteContent,
        Self::SlideshowImages,
        Self::MenuItems,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GalleryImages => "hibridshop_gallery_images",
            Self::Bookings => "hibridshop_bookings",
            Self::Breeds => "hibridshop_breeds",
            Self::Puppies => "hibridshop_puppies",
            Self::SiteContent => "hibridshop_site_content",
            Self::SlideshowImages => "hibridshop_slideshow_images",
            Self::MenuItems => "hibridshop_menu_items",
        }
    }
}

/// Key for the mirrored admin-session flag.
pub const ADMIN_AUTH_KEY: &str = "hibridshop_admin_auth";

/// Synchronous string store addressed by key.
pub trait KeyValueStore: Send + Sync {
    /// Raw text stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Overwrite `key` with `value`.
    fn save(&self, key: &str, value: &str);
}

/// Window `localStorage`. Reads and writes no-op outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::warn!("localStorage unavailable; dropped write to {key}");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write to {key} ({} bytes)", value.len());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Process-local map for tests. Records every write in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys passed to `save`, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn clear_writes(&self) {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).push(key.to_owned());
    }
}

/// Load and parse the JSON value stored under `key`.
///
/// Returns `None` when the key is absent or the text does not parse as `T`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.load(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unreadable {key}: {e}");
            None
        }
    }
}

/// Serialize `value` and store it under `key`.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.save(key, &raw),
        Err(e) => log::warn!("failed to serialize {key}: {e}"),
    }
}
