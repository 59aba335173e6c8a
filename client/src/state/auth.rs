//! Admin session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards the `/admin` route. Credentials are compared against the
//! compile-time admin login; there is no server verification. The
//! authenticated flag is mirrored to storage so a reload keeps the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use super::storage::{ADMIN_AUTH_KEY, KeyValueStore};

const DEFAULT_ADMIN_USER: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "hibridshopp";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Adja meg a felhasználónevet és a jelszót")]
    MissingCredentials,
    #[error("Hibás felhasználónév vagy jelszó")]
    InvalidCredentials,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Login baked in at build time via `SITE_ADMIN_USER` / `SITE_ADMIN_PASSWORD`.
    #[must_use]
    pub fn configured() -> Self {
        Self::new(
            option_env!("SITE_ADMIN_USER").unwrap_or(DEFAULT_ADMIN_USER),
            option_env!("SITE_ADMIN_PASSWORD").unwrap_or(DEFAULT_ADMIN_PASSWORD),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// Admin authentication state, provided to views as `RwSignal<AuthGate>`.
#[derive(Clone)]
pub struct AuthGate {
    status: AuthStatus,
    /// True until the persisted flag has been read in the browser. Route
    /// guards wait on this so a reload does not bounce a signed-in admin.
    pub loading: bool,
    expected: AdminCredentials,
    storage: Arc<dyn KeyValueStore>,
}

impl AuthGate {
    /// Unauthenticated gate that has not yet read storage.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, expected: AdminCredentials) -> Self {
        Self { status: AuthStatus::Unauthenticated, loading: true, expected, storage }
    }

    /// Pick up a session persisted by an earlier visit.
    pub fn restore(&mut self) {
        if self.storage.load(ADMIN_AUTH_KEY).as_deref() == Some("true") {
            self.status = AuthStatus::Authenticated;
        }
        self.loading = false;
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.status
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    /// Whether an admin-only view should send the visitor to the login page.
    #[must_use]
    pub fn should_redirect(&self) -> bool {
        !self.loading && !self.is_authenticated()
    }

    /// Authenticate with `credentials`.
    ///
    /// # Errors
    ///
    /// `MissingCredentials` when either field is blank, `InvalidCredentials`
    /// when they do not match. The gate stays unauthenticated in both cases.
    pub fn login(&mut self, credentials: &AdminCredentials) -> Result<(), AuthError> {
        let username = credentials.username.trim();
        if username.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if username != self.expected.username || credentials.password != self.expected.password {
            log::warn!("admin login rejected for {username:?}");
            return Err(AuthError::InvalidCredentials);
        }
        self.status = AuthStatus::Authenticated;
        self.loading = false;
        self.storage.save(ADMIN_AUTH_KEY, "true");
        log::info!("admin signed in");
        Ok(())
    }

    pub fn logout(&mut self) {
        self.status = AuthStatus::Unauthenticated;
        self.storage.save(ADMIN_AUTH_KEY, "false");
        log::info!("admin signed out");
    }
}
