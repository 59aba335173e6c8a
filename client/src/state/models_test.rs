use super::*;

// =============================================================
// ImageCategory
// =============================================================

#[test]
fn image_category_slug_round_trips() {
    for category in ImageCategory::ALL {
        assert_eq!(ImageCategory::from_slug(category.slug()), Some(category));
    }
    assert_eq!(ImageCategory::from_slug("all"), None);
}

#[test]
fn image_category_serializes_lowercase() {
    let json = serde_json::to_string(&ImageCategory::Goldendoodle).unwrap();
    assert_eq!(json, "\"goldendoodle\"");
}

// =============================================================
// BookingStatus
// =============================================================

#[test]
fn pending_can_be_confirmed_or_cancelled() {
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
}

#[test]
fn confirmed_can_only_be_cancelled() {
    assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Confirmed));
    assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
    assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
}

#[test]
fn cancelled_cannot_be_confirmed() {
    assert!(!BookingStatus::Cancelled.can_confirm());
    assert!(!BookingStatus::Cancelled.can_cancel());
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Confirmed));
}

#[test]
fn booking_status_display_matches_wire_value() {
    assert_eq!(BookingStatus::Cancelled.to_string(), "cancelled");
    assert_eq!(serde_json::to_string(&BookingStatus::Confirmed).unwrap(), "\"confirmed\"");
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn site_content_uses_camel_case_keys() {
    let value = serde_json::to_value(SiteContent::default()).unwrap();
    assert_eq!(value["heroTitle"], "Hibrid Shopp");
    assert_eq!(value["openingHours"], "Hétfő-Péntek 8:00-22:00");
    assert!(value.get("hero_title").is_none());
}

#[test]
fn site_content_missing_fields_take_defaults() {
    let parsed: SiteContent = serde_json::from_str(r#"{"heroTitle":"Custom"}"#).unwrap();
    assert_eq!(parsed.hero_title, "Custom");
    assert_eq!(parsed.address, "Budapest, Magyarország");
}

#[test]
fn booking_parses_browser_record() {
    let raw = r#"{
        "id": 1718200000000,
        "name": "Kovács Anna",
        "phone": "+36701234567",
        "email": "",
        "preferred_date": "2025-06-20",
        "preferred_time": "11:00 AM",
        "message": "",
        "dog_name": "Luna - Maltipoo",
        "status": "confirmed",
        "created_at": "2025-06-12T15:00:00.000Z"
    }"#;
    let booking: Booking = serde_json::from_str(raw).unwrap();
    assert_eq!(booking.id, 1_718_200_000_000);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.dog_name.as_deref(), Some("Luna - Maltipoo"));
}

#[test]
fn slideshow_image_type_field_is_renamed() {
    let image = SlideshowImage {
        id: 7,
        src: "/a.jpg".to_owned(),
        alt: "a".to_owned(),
        kind: ImageKind::Slideshow,
        created_at: None,
    };
    let value = serde_json::to_value(&image).unwrap();
    assert_eq!(value["type"], "slideshow");
}

#[test]
fn puppy_available_defaults_to_true() {
    let puppy: Puppy = serde_json::from_str(r#"{"id":1,"name":"Luna","breed":"Maltipoo"}"#).unwrap();
    assert!(puppy.available);
    assert!(puppy.price.is_empty());
}

// =============================================================
// Defaults and drafts
// =============================================================

#[test]
fn default_menu_has_four_ordered_visible_entries() {
    let items = default_menu_items();
    assert_eq!(items.len(), 4);
    assert_eq!(items.iter().map(|i| i.order).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert!(items.iter().all(|i| i.visible));
    assert_eq!(items[3].path, "/booking");
}

#[test]
fn draft_completeness_requires_trimmed_fields() {
    let image = NewGalleryImage { src: "/x.jpg".to_owned(), alt: "  ".to_owned(), ..Default::default() };
    assert!(!image.is_complete());
    let breed = NewBreed { name: "Maltipoo".to_owned(), description: "Kedves".to_owned(), ..Default::default() };
    assert!(breed.is_complete());
    assert!(!NewPuppy { name: "Luna".to_owned(), ..Default::default() }.is_complete());
    assert!(NewMenuItem { name: "Blog".to_owned(), path: "/blog".to_owned() }.is_complete());
}

#[test]
fn parse_characteristics_trims_and_drops_empty() {
    assert_eq!(
        parse_characteristics(" Hipoallergén, Intelligens ,, Barátságos "),
        vec!["Hipoallergén", "Intelligens", "Barátságos"]
    );
    assert!(parse_characteristics("  ").is_empty());
}
