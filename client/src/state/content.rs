//! Content store: the single source of truth for site data and bookings.
//!
//! DESIGN
//! ======
//! `ContentStore` is constructed explicitly and handed to views through a
//! Leptos context (`RwSignal<ContentStore>`). It owns seven independent
//! collections. Every mutator persists exactly the collection it touched,
//! once, through the injected `KeyValueStore`; there is no batching and no
//! cross-collection transaction.
//!
//! Construction never writes. `with_defaults` is used for the server render
//! and the first client render; `load` replaces it once the browser has
//! mounted, so hydration sees the same markup on both sides.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::sync::Arc;

use super::ids::IdGenerator;
use super::models::{
    Booking, BookingStatus, Breed, GalleryImage, ImageKind, MenuItem, NewBooking, NewBreed, NewGalleryImage,
    NewMenuItem, NewPuppy, NewSlideshowImage, Puppy, RecordId, SiteContent, SlideshowImage, default_menu_items,
};
use super::storage::{CollectionKey, KeyValueStore, load_json, save_json};
use crate::util::clock;

/// Failures from targeted store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{collection} record {id} not found")]
    NotFound { collection: &'static str, id: RecordId },
    #[error("booking {id} cannot move from {from} to {to}")]
    InvalidTransition { id: RecordId, from: BookingStatus, to: BookingStatus },
}

#[derive(Clone)]
pub struct ContentStore {
    storage: Arc<dyn KeyValueStore>,
    ids: IdGenerator,
    gallery_images: Vec<GalleryImage>,
    slideshow_images: Vec<SlideshowImage>,
    bookings: Vec<Booking>,
    breeds: Vec<Breed>,
    puppies: Vec<Puppy>,
    site_content: SiteContent,
    menu_items: Vec<MenuItem>,
}

impl ContentStore {
    /// Store holding only built-in defaults. Nothing is read or written.
    #[must_use]
    pub fn with_defaults(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut store = Self {
            storage,
            ids: IdGenerator::default(),
            gallery_images: Vec::new(),
            slideshow_images: Vec::new(),
            bookings: Vec::new(),
            breeds: Vec::new(),
            puppies: Vec::new(),
            site_content: SiteContent::default(),
            menu_items: default_menu_items(),
        };
        store.seed_ids();
        store
    }

    /// Initialize every collection from storage, falling back to defaults for
    /// absent or unreadable keys.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut store = Self::with_defaults(storage);
        let backend = store.storage.as_ref();

        if let Some(v) = load_json(backend, CollectionKey::GalleryImages.as_str()) {
            store.gallery_images = v;
        }
        if let Some(v) = load_json(backend, CollectionKey::SlideshowImages.as_str()) {
            store.slideshow_images = v;
        }
        if let Some(v) = load_json(backend, CollectionKey::Bookings.as_str()) {
            store.bookings = v;
        }
        if let Some(v) = load_json(backend, CollectionKey::Breeds.as_str()) {
            store.breeds = v;
        }
        if let Some(v) = load_json(backend, CollectionKey::Puppies.as_str()) {
            store.puppies = v;
        }
        if let Some(v) = load_json(backend, CollectionKey::SiteContent.as_str()) {
            store.site_content = v;
        }
        if let Some(v) = load_json(backend, CollectionKey::MenuItems.as_str()) {
            store.menu_items = v;
        }

        store.seed_ids();
        log::info!(
            "content store loaded: {} gallery, {} slides, {} bookings, {} breeds, {} puppies, {} menu",
            store.gallery_images.len(),
            store.slideshow_images.len(),
            store.bookings.len(),
            store.breeds.len(),
            store.puppies.len(),
            store.menu_items.len(),
        );
        store
    }

    fn seed_ids(&mut self) {
        let ids = self
            .gallery_images
            .iter()
            .map(|r| r.id)
            .chain(self.slideshow_images.iter().map(|r| r.id))
            .chain(self.bookings.iter().map(|r| r.id))
            .chain(self.breeds.iter().map(|r| r.id))
            .chain(self.puppies.iter().map(|r| r.id))
            .chain(self.menu_items.iter().map(|r| r.id));
        for id in ids {
            self.ids.observe(id);
        }
    }

    fn persist(&self, key: CollectionKey) {
        let backend = self.storage.as_ref();
        let name = key.as_str();
        match key {
            CollectionKey::GalleryImages => save_json(backend, name, &self.gallery_images),
            CollectionKey::SlideshowImages => save_json(backend, name, &self.slideshow_images),
            CollectionKey::Bookings => save_json(backend, name, &self.bookings),
            CollectionKey::Breeds => save_json(backend, name, &self.breeds),
            CollectionKey::Puppies => save_json(backend, name, &self.puppies),
            CollectionKey::SiteContent => save_json(backend, name, &self.site_content),
            CollectionKey::MenuItems => save_json(backend, name, &self.menu_items),
        }
    }

    // =========================================================================
    // READ
    // =========================================================================

    #[must_use]
    pub fn gallery_images(&self) -> &[GalleryImage] {
        &self.gallery_images
    }

    #[must_use]
    pub fn slideshow_images(&self) -> &[SlideshowImage] {
        &self.slideshow_images
    }

    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    #[must_use]
    pub fn breeds(&self) -> &[Breed] {
        &self.breeds
    }

    #[must_use]
    pub fn puppies(&self) -> &[Puppy] {
        &self.puppies
    }

    #[must_use]
    pub fn site_content(&self) -> &SiteContent {
        &self.site_content
    }

    #[must_use]
    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    /// Visible menu entries sorted by `order`, ties kept in list order.
    #[must_use]
    pub fn visible_menu_items(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self.menu_items.iter().filter(|i| i.visible).cloned().collect();
        items.sort_by_key(|i| i.order);
        items
    }

    // =========================================================================
    // ADD
    // =========================================================================

    pub fn add_gallery_image(&mut self, draft: NewGalleryImage) -> GalleryImage {
        let image = GalleryImage { id: self.ids.next_id(), src: draft.src, alt: draft.alt, category: draft.category };
        self.gallery_images.push(image.clone());
        self.persist(CollectionKey::GalleryImages);
        image
    }

    pub fn add_slideshow_image(&mut self, draft: NewSlideshowImage) -> SlideshowImage {
        let image = SlideshowImage {
            id: self.ids.next_id(),
            src: draft.src,
            alt: draft.alt,
            kind: ImageKind::Slideshow,
            created_at: Some(clock::now_rfc3339()),
        };
        self.slideshow_images.push(image.clone());
        self.persist(CollectionKey::SlideshowImages);
        image
    }

    /// Append a visitor booking as `pending`. The caller validates fields.
    pub fn add_booking(&mut self, draft: NewBooking) -> Booking {
        let booking = Booking {
            id: self.ids.next_id(),
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            preferred_date: draft.preferred_date,
            preferred_time: draft.preferred_time,
            message: draft.message,
            dog_name: draft.dog_name,
            status: BookingStatus::Pending,
            created_at: clock::now_rfc3339(),
        };
        self.bookings.push(booking.clone());
        self.persist(CollectionKey::Bookings);
        log::info!("booking {} added for {} {}", booking.id, booking.preferred_date, booking.preferred_time);
        booking
    }

    pub fn add_breed(&mut self, draft: NewBreed) -> Breed {
        let breed = Breed {
            id: self.ids.next_id(),
            name: draft.name,
            description: draft.description,
            size: draft.size,
            lifespan: draft.lifespan,
            characteristics: draft.characteristics,
            image: draft.image,
            created_at: Some(clock::now_rfc3339()),
        };
        self.breeds.push(breed.clone());
        self.persist(CollectionKey::Breeds);
        breed
    }

    pub fn add_puppy(&mut self, draft: NewPuppy) -> Puppy {
        let puppy = Puppy {
            id: self.ids.next_id(),
            name: draft.name,
            breed: draft.breed,
            age: draft.age,
            price: draft.price,
            description: draft.description,
            image: draft.image,
            available: true,
            created_at: Some(clock::now_rfc3339()),
        };
        self.puppies.push(puppy.clone());
        self.persist(CollectionKey::Puppies);
        puppy
    }

    /// Append a visible menu entry ordered after the current list.
    pub fn add_menu_item(&mut self, draft: NewMenuItem) -> MenuItem {
        let order = u32::try_from(self.menu_items.len()).map_or(u32::MAX, |n| n.saturating_add(1));
        let item = MenuItem { id: self.ids.next_id(), name: draft.name, path: draft.path, visible: true, order };
        self.menu_items.push(item.clone());
        self.persist(CollectionKey::MenuItems);
        item
    }

    // =========================================================================
    // REPLACE
    // =========================================================================

    pub fn set_gallery_images(&mut self, images: Vec<GalleryImage>) {
        self.gallery_images = images;
        self.persist(CollectionKey::GalleryImages);
    }

    pub fn set_slideshow_images(&mut self, images: Vec<SlideshowImage>) {
        self.slideshow_images = images;
        self.persist(CollectionKey::SlideshowImages);
    }

    pub fn set_bookings(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
        self.persist(CollectionKey::Bookings);
    }

    pub fn set_breeds(&mut self, breeds: Vec<Breed>) {
        self.breeds = breeds;
        self.persist(CollectionKey::Breeds);
    }

    pub fn set_puppies(&mut self, puppies: Vec<Puppy>) {
        self.puppies = puppies;
        self.persist(CollectionKey::Puppies);
    }

    pub fn set_site_content(&mut self, content: SiteContent) {
        self.site_content = content;
        self.persist(CollectionKey::SiteContent);
    }

    pub fn set_menu_items(&mut self, items: Vec<MenuItem>) {
        self.menu_items = items;
        self.persist(CollectionKey::MenuItems);
    }

    // =========================================================================
    // TARGETED EDITS
    // =========================================================================

    /// Remove one gallery image.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no image has `id`; nothing is persisted.
    pub fn delete_gallery_image(&mut self, id: RecordId) -> Result<GalleryImage, StoreError> {
        let removed = take_by_id(&mut self.gallery_images, id, |r| r.id, "gallery image")?;
        self.persist(CollectionKey::GalleryImages);
        Ok(removed)
    }

    /// Remove one slideshow image.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no slide has `id`.
    pub fn delete_slideshow_image(&mut self, id: RecordId) -> Result<SlideshowImage, StoreError> {
        let removed = take_by_id(&mut self.slideshow_images, id, |r| r.id, "slideshow image")?;
        self.persist(CollectionKey::SlideshowImages);
        Ok(removed)
    }

    /// Remove one booking.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no booking has `id`.
    pub fn delete_booking(&mut self, id: RecordId) -> Result<Booking, StoreError> {
        let removed = take_by_id(&mut self.bookings, id, |r| r.id, "booking")?;
        self.persist(CollectionKey::Bookings);
        Ok(removed)
    }

    /// Remove one menu entry. Remaining entries keep their `order` values.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no entry has `id`.
    pub fn delete_menu_item(&mut self, id: RecordId) -> Result<MenuItem, StoreError> {
        let removed = take_by_id(&mut self.menu_items, id, |r| r.id, "menu item")?;
        self.persist(CollectionKey::MenuItems);
        Ok(removed)
    }

    /// Move one booking to `status`.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` for an unknown id, `StoreError::InvalidTransition`
    /// when the lifecycle forbids the move (e.g. confirming a cancelled
    /// booking). Neither case persists anything.
    pub fn update_booking_status(&mut self, id: RecordId, status: BookingStatus) -> Result<Booking, StoreError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound { collection: "booking", id })?;
        if !booking.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition { id, from: booking.status, to: status });
        }
        booking.status = status;
        let updated = booking.clone();
        self.persist(CollectionKey::Bookings);
        log::info!("booking {id} is now {status}");
        Ok(updated)
    }
}

fn take_by_id<T>(
    items: &mut Vec<T>,
    id: RecordId,
    id_of: impl Fn(&T) -> RecordId,
    collection: &'static str,
) -> Result<T, StoreError> {
    let index = items.iter().position(|r| id_of(r) == id).ok_or(StoreError::NotFound { collection, id })?;
    Ok(items.remove(index))
}
