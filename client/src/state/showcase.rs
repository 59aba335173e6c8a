//! Built-in display content used when the store has nothing to show.
//!
//! Views fall back to these lists; they are never written into the content
//! store, so the admin's first upload replaces them on screen.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use super::models::{Breed, GalleryImage, ImageCategory, RecordId};

pub const HERO_IMAGE: &str = "/assets/hero.jpg";
pub const MALTIPOO_IMAGE: &str = "/assets/maltipoo.jpg";
pub const CAVAPOO_IMAGE: &str = "/assets/cavapoo.jpg";
pub const GOLDENDOODLE_IMAGE: &str = "/assets/goldendoodle.jpg";
pub const PUPPY_IMAGES: [&str; 2] = ["/assets/puppy-1.jpg", "/assets/puppy-2.jpg"];

/// Hero slides when no slideshow image has been uploaded.
#[must_use]
pub fn fallback_slides() -> Vec<String> {
    [HERO_IMAGE, MALTIPOO_IMAGE, CAVAPOO_IMAGE, GOLDENDOODLE_IMAGE].into_iter().map(str::to_owned).collect()
}

/// Gallery shown when neither gallery nor slideshow images exist.
#[must_use]
pub fn fallback_gallery() -> Vec<GalleryImage> {
    [
        (HERO_IMAGE, "Hibrid Shopp - Családi pillanat", ImageCategory::Family),
        (MALTIPOO_IMAGE, "Maltipoo kiskutya", ImageCategory::Maltipoo),
        (CAVAPOO_IMAGE, "Cavapoo kiskutya", ImageCategory::Cavapoo),
        (GOLDENDOODLE_IMAGE, "Goldendoodle kiskutya", ImageCategory::Goldendoodle),
        (PUPPY_IMAGES[0], "Játékos kiskutya", ImageCategory::Puppies),
        (PUPPY_IMAGES[1], "Aranyos kiskutya", ImageCategory::Puppies),
    ]
    .into_iter()
    .zip(1..)
    .map(|((src, alt, category), id)| GalleryImage { id, src: src.to_owned(), alt: alt.to_owned(), category })
    .collect()
}

/// Breed cards for the home page until the admin adds breeds.
#[must_use]
pub fn showcase_breeds() -> Vec<Breed> {
    vec![
        breed(
            1,
            "Maltipoo",
            "A Maltipoo egy bájos hibrid fajta, amely a Máltai selyemkutya és a Pudli keresztezéséből született. \
             Intelligens, barátságos és hipoallergén szőrzettel rendelkezik.",
            MALTIPOO_IMAGE,
            &["Hipoallergén", "Intelligens", "Barátságos", "Könnyen tanítható"],
            "Kicsi (3-7 kg)",
            "12-15 év",
        ),
        breed(
            2,
            "Cavapoo",
            "A Cavapoo a Cavalier King Charles Spániel és a Pudli keresztezése. \
             Rendkívül kedves, családbarát és alkalmazkodó természetű.",
            CAVAPOO_IMAGE,
            &["Családbarát", "Kedves", "Alkalmazkodó", "Játékos"],
            "Kicsi-közepes (5-12 kg)",
            "12-16 év",
        ),
        breed(
            3,
            "Goldendoodle",
            "A Goldendoodle a Golden Retriever és a Pudli keresztezése. \
             Nagy méretű, intelligens és rendkívül barátságos családi kutya.",
            GOLDENDOODLE_IMAGE,
            &["Nagy méret", "Intelligens", "Barátságos", "Aktív"],
            "Nagy (20-35 kg)",
            "10-15 év",
        ),
    ]
}

fn breed(
    id: RecordId,
    name: &str,
    description: &str,
    image: &str,
    characteristics: &[&str],
    size: &str,
    lifespan: &str,
) -> Breed {
    Breed {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        size: size.to_owned(),
        lifespan: lifespan.to_owned(),
        characteristics: characteristics.iter().map(|c| (*c).to_owned()).collect(),
        image: Some(image.to_owned()),
        created_at: None,
    }
}

/// Home page selling points: (title, description).
pub const FEATURES: [(&str, &str); 4] = [
    ("Prémium Minőség", "Csak a legjobb vérvonalakból tenyésztünk"),
    ("Egészséggarancia", "Minden kiskutyánk egészségügyi garanciával"),
    ("Szeretettel", "Minden kutyánkat családtagként kezeljük"),
    ("Szakértelem", "10+ év tapasztalat a tenyésztésben"),
];
