//! Shared admin-route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin panel and any future admin view apply identical unauthenticated
//! redirect behavior; the login page applies the reverse.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthGate;

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const ADMIN_PATH: &str = "/admin";

/// Where an admin-only view should send the visitor, if anywhere.
#[must_use]
pub fn admin_redirect_target(gate: &AuthGate) -> Option<&'static str> {
    gate.should_redirect().then_some(ADMIN_LOGIN_PATH)
}

/// Where the login page should send an already signed-in admin.
#[must_use]
pub fn login_redirect_target(gate: &AuthGate) -> Option<&'static str> {
    (!gate.loading && gate.is_authenticated()).then_some(ADMIN_PATH)
}

/// Redirect to the admin login once the gate has loaded and is closed.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthGate>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = auth.with(admin_redirect_target) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
