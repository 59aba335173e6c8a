use std::sync::Arc;

use super::*;
use crate::state::models::{ImageKind, NewBooking, NewGalleryImage, NewPuppy};
use crate::state::storage::MemoryStorage;

fn image(id: u64, category: ImageCategory) -> GalleryImage {
    GalleryImage { id, src: format!("/img/{id}.jpg"), alt: format!("image {id}"), category }
}

fn puppy(id: u64, name: &str, breed: &str, available: bool) -> Puppy {
    Puppy {
        id,
        name: name.to_owned(),
        breed: breed.to_owned(),
        age: String::new(),
        price: String::new(),
        description: String::new(),
        image: String::new(),
        available,
        created_at: None,
    }
}

fn booking(id: u64, date: &str, time: &str, status: BookingStatus) -> Booking {
    Booking {
        id,
        name: format!("visitor {id}"),
        phone: "+36 70 000 0000".to_owned(),
        email: None,
        preferred_date: date.to_owned(),
        preferred_time: time.to_owned(),
        message: None,
        dog_name: None,
        status,
        created_at: "2025-06-12T10:00:00Z".to_owned(),
    }
}

// =============================================================
// Gallery filtering
// =============================================================

#[test]
fn filter_all_returns_everything_in_order() {
    let images = vec![image(1, ImageCategory::Family), image(2, ImageCategory::Puppies), image(3, ImageCategory::Family)];
    assert_eq!(filter_gallery(&images, CategoryFilter::All), images);
}

#[test]
fn filter_category_returns_exact_subset() {
    let images = vec![image(1, ImageCategory::Family), image(2, ImageCategory::Puppies), image(3, ImageCategory::Family)];
    let family = filter_gallery(&images, CategoryFilter::Only(ImageCategory::Family));
    assert_eq!(family.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
    assert!(filter_gallery(&images, CategoryFilter::Only(ImageCategory::Cavapoo)).is_empty());
}

#[test]
fn filter_options_start_with_all() {
    let options = CategoryFilter::options();
    assert_eq!(options[0], CategoryFilter::All);
    assert_eq!(options.len(), ImageCategory::ALL.len() + 1);
    assert_eq!(options[0].label(), "Összes");
}

#[test]
fn gallery_entries_append_slides_as_slideshow_category() {
    let gallery = vec![image(1, ImageCategory::Maltipoo)];
    let slides = vec![SlideshowImage {
        id: 9,
        src: "/s.jpg".to_owned(),
        alt: "slide".to_owned(),
        kind: ImageKind::Slideshow,
        created_at: None,
    }];
    let entries = gallery_entries(&gallery, &slides);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].id, 9);
    assert_eq!(entries[1].category, ImageCategory::Slideshow);
    let only_slides = filter_gallery(&entries, CategoryFilter::Only(ImageCategory::Slideshow));
    assert_eq!(only_slides.len(), 1);
}

// =============================================================
// Puppy filtering
// =============================================================

#[test]
fn breed_filter_all_and_exact() {
    let puppies = vec![
        puppy(1, "Luna", "Maltipoo", true),
        puppy(2, "Max", "Cavapoo", true),
        puppy(3, "Bella", "Maltipoo", false),
    ];
    assert_eq!(filter_puppies(&puppies, &BreedFilter::All), puppies);
    let maltipoo = filter_puppies(&puppies, &BreedFilter::Only("Maltipoo".to_owned()));
    assert_eq!(maltipoo.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
    assert!(filter_puppies(&puppies, &BreedFilter::Only("maltipoo".to_owned())).is_empty());
}

#[test]
fn unique_breeds_keeps_first_seen_order() {
    let puppies = vec![
        puppy(1, "Luna", "Maltipoo", true),
        puppy(2, "Max", "Cavapoo", true),
        puppy(3, "Bella", "Maltipoo", true),
    ];
    assert_eq!(unique_breeds(&puppies), vec!["Maltipoo", "Cavapoo"]);
}

#[test]
fn interest_options_list_available_puppies_then_general() {
    let puppies = vec![puppy(1, "Luna", "Maltipoo", true), puppy(2, "Max", "Cavapoo", false)];
    assert_eq!(interest_options(&puppies), vec!["Luna - Maltipoo".to_owned(), GENERAL_INTEREST.to_owned()]);
}

// =============================================================
// Time slots
// =============================================================

#[test]
fn active_bookings_take_their_slot() {
    let bookings = vec![
        booking(1, "2030-01-15", "9:00 AM", BookingStatus::Pending),
        booking(2, "2030-01-15", "2:00 PM", BookingStatus::Confirmed),
        booking(3, "2030-01-15", "4:00 PM", BookingStatus::Cancelled),
        booking(4, "2030-01-16", "11:00 AM", BookingStatus::Pending),
    ];
    assert_eq!(available_time_slots(&bookings, "2030-01-15"), vec!["11:00 AM", "4:00 PM", "6:00 PM"]);
    assert_eq!(available_time_slots(&bookings, "2030-01-17"), TIME_SLOTS.to_vec());
}

#[test]
fn recent_bookings_newest_first() {
    let bookings: Vec<_> = (1..=7).map(|id| booking(id, "2030-01-15", "9:00 AM", BookingStatus::Pending)).collect();
    let recent = recent_bookings(&bookings, 5);
    assert_eq!(recent.iter().map(|b| b.id).collect::<Vec<_>>(), vec![7, 6, 5, 4, 3]);
}

// =============================================================
// Dashboard
// =============================================================

#[test]
fn dashboard_counts_pending_separately() {
    let mut store = ContentStore::load(Arc::new(MemoryStorage::new()));
    let draft = NewBooking {
        name: "Anna".to_owned(),
        phone: "+36701234567".to_owned(),
        preferred_date: "2030-01-15".to_owned(),
        preferred_time: "9:00 AM".to_owned(),
        ..Default::default()
    };
    let first = store.add_booking(draft.clone());
    store.add_booking(draft);
    store.update_booking_status(first.id, BookingStatus::Confirmed).unwrap();
    store.add_gallery_image(NewGalleryImage { src: "/a.jpg".to_owned(), alt: "a".to_owned(), ..Default::default() });
    store.add_puppy(NewPuppy { name: "Luna".to_owned(), breed: "Maltipoo".to_owned(), ..Default::default() });

    let stats = DashboardStats::from_store(&store);
    assert_eq!(stats.total_bookings, 2);
    assert_eq!(stats.pending_bookings, 1);
    assert_eq!(stats.gallery_images, 1);
    assert_eq!(stats.puppies, 1);
    assert_eq!(stats.breeds, 0);
}
