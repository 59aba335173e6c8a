//! Admin sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AdminCredentials, AuthGate};
use crate::util::auth::{ADMIN_PATH, login_redirect_target};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthGate>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    // Already signed in from an earlier visit.
    let navigate_admin = navigate.clone();
    Effect::new(move || {
        if let Some(target) = auth.with(login_redirect_target) {
            navigate_admin(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = AdminCredentials::new(username.get_untracked(), password.get_untracked());
        let mut result = Ok(());
        auth.update(|gate| result = gate.login(&credentials));
        match result {
            Ok(()) => {
                error.set(None);
                navigate(ADMIN_PATH, NavigateOptions::default());
            }
            Err(e) => {
                password.set(String::new());
                error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin belépés"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Felhasználónév"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Jelszó"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Belépés"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
