use super::*;

#[test]
fn stat_cards_show_every_counter() {
    let stats = DashboardStats {
        gallery_images: 1,
        slideshow_images: 2,
        total_bookings: 3,
        pending_bookings: 4,
        breeds: 5,
        puppies: 6,
    };
    let cards = stat_cards(&stats);
    assert_eq!(cards[1], ("Slideshow képek", 2));
    assert_eq!(cards[2], ("Összes foglalás", 3));
    let mut values: Vec<usize> = cards.iter().map(|(_, v)| *v).collect();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn stat_card_labels_are_distinct() {
    let cards = stat_cards(&DashboardStats::default());
    for (i, (label, _)) in cards.iter().enumerate() {
        assert!(cards[i + 1..].iter().all(|(other, _)| other != label), "duplicate label {label}");
    }
}
