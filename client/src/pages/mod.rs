//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin;
pub mod admin_login;
pub mod booking;
pub mod gallery;
pub mod home;
pub mod puppies;
