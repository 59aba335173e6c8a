use std::sync::Arc;

use super::*;
use crate::state::auth::AdminCredentials;
use crate::state::storage::MemoryStorage;

fn gate() -> AuthGate {
    AuthGate::new(Arc::new(MemoryStorage::new()), AdminCredentials::new("admin", "secret"))
}

#[test]
fn no_redirect_while_loading() {
    let gate = gate();
    assert_eq!(admin_redirect_target(&gate), None);
    assert_eq!(login_redirect_target(&gate), None);
}

#[test]
fn closed_gate_redirects_to_login() {
    let mut gate = gate();
    gate.restore();
    assert_eq!(admin_redirect_target(&gate), Some(ADMIN_LOGIN_PATH));
    assert_eq!(login_redirect_target(&gate), None);
}

#[test]
fn signed_in_admin_skips_login_page() {
    let mut gate = gate();
    gate.restore();
    gate.login(&AdminCredentials::new("admin", "secret")).unwrap();
    assert_eq!(admin_redirect_target(&gate), None);
    assert_eq!(login_redirect_target(&gate), Some(ADMIN_PATH));
}
