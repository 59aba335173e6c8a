//! Application state: persisted site content and transient UI state.
//!
//! ARCHITECTURE
//! ============
//! `content` owns every persisted collection and writes through `storage`.
//! `auth` gates the admin route. `catalog` and `booking_form` are pure
//! helpers the pages call; `ui` holds presentation-only state.

pub mod auth;
pub mod booking_form;
pub mod catalog;
pub mod content;
pub mod ids;
pub mod models;
pub mod showcase;
pub mod storage;
pub mod ui;
