//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, listing cards and the admin tabs while
//! reading/writing shared state from Leptos context providers.

pub mod admin_bookings;
pub mod admin_catalog;
pub mod admin_content;
pub mod admin_dashboard;
pub mod admin_media;
pub mod admin_menu;
pub mod breed_card;
pub mod contact_cards;
pub mod form_field;
pub mod hero_slideshow;
pub mod lightbox;
pub mod navigation;
pub mod puppy_card;
