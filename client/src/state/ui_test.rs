use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_nav_closed_on_dashboard() {
    let state = UiState::default();
    assert!(!state.nav_open);
    assert!(!state.admin_menu_open);
    assert_eq!(state.admin_tab, AdminTab::Dashboard);
}

#[test]
fn admin_tabs_have_distinct_labels() {
    let labels: std::collections::HashSet<_> = AdminTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels.len(), AdminTab::ALL.len());
}

// =============================================================
// Index wrapping
// =============================================================

#[test]
fn next_index_wraps() {
    assert_eq!(next_index(0, 4), 1);
    assert_eq!(next_index(3, 4), 0);
    assert_eq!(next_index(0, 0), 0);
}

#[test]
fn prev_index_wraps() {
    assert_eq!(prev_index(2, 4), 1);
    assert_eq!(prev_index(0, 4), 3);
    assert_eq!(prev_index(9, 4), 3);
    assert_eq!(prev_index(0, 0), 0);
}

// =============================================================
// Lightbox
// =============================================================

#[test]
fn lightbox_navigation_wraps_both_ways() {
    let mut lb = Lightbox::default();
    lb.open(2);
    lb.next(3);
    assert_eq!(lb.index, Some(0));
    lb.prev(3);
    assert_eq!(lb.index, Some(2));
}

#[test]
fn lightbox_keys_only_apply_when_open() {
    let mut lb = Lightbox::default();
    assert!(!lb.handle_key("ArrowRight", 3));
    assert_eq!(lb.index, None);

    lb.open(0);
    assert!(lb.handle_key("ArrowLeft", 3));
    assert_eq!(lb.index, Some(2));
    assert!(!lb.handle_key("Enter", 3));
    assert!(lb.handle_key("Escape", 3));
    assert!(!lb.is_open());
}
