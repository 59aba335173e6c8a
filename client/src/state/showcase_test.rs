use super::*;

#[test]
fn fallback_gallery_covers_every_photo_category() {
    let gallery = fallback_gallery();
    assert_eq!(gallery.len(), 6);
    for category in [ImageCategory::Family, ImageCategory::Maltipoo, ImageCategory::Cavapoo, ImageCategory::Puppies] {
        assert!(gallery.iter().any(|img| img.category == category));
    }
}

#[test]
fn fallback_gallery_ids_are_unique() {
    let mut ids: Vec<_> = fallback_gallery().into_iter().map(|i| i.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn showcase_breeds_have_images_and_traits() {
    let breeds = showcase_breeds();
    assert_eq!(breeds.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(), vec!["Maltipoo", "Cavapoo", "Goldendoodle"]);
    assert!(breeds.iter().all(|b| b.image.is_some() && b.characteristics.len() == 4));
}

#[test]
fn fallback_slides_start_with_hero() {
    assert_eq!(fallback_slides()[0], HERO_IMAGE);
}
