//! Admin panel: tabbed content management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded by the auth gate. Until the persisted session has been read the
//! page shows a loading notice; a closed gate redirects to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin_bookings::BookingsTab;
use crate::components::admin_catalog::{BreedsTab, PuppiesTab};
use crate::components::admin_content::{ContactTab, ContentTab};
use crate::components::admin_dashboard::DashboardTab;
use crate::components::admin_media::{GalleryTab, SlideshowTab};
use crate::components::admin_menu::MenuTab;
use crate::state::auth::AuthGate;
use crate::state::ui::{AdminTab, UiState};
use crate::util::auth::install_admin_redirect;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthGate>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_admin_redirect(auth, navigate.clone());

    let on_logout = move |_| {
        auth.update(AuthGate::logout);
        ui.update(|u| *u = UiState::default());
        navigate("/", NavigateOptions::default());
    };
    let select = move |tab: AdminTab| {
        ui.update(|u| {
            u.admin_tab = tab;
            u.admin_menu_open = false;
        });
    };
    let tab = Memo::new(move |_| ui.with(|u| u.admin_tab));

    view! {
        <Show
            when=move || auth.with(AuthGate::is_authenticated)
            fallback=move || {
                view! {
                    <div class="admin-page">
                        <p>{move || if auth.get().loading { "Betöltés..." } else { "Átirányítás a belépéshez..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin-page">
                <header class="admin-page__header">
                    <button
                        class="btn admin-page__menu-toggle"
                        on:click=move |_| ui.update(|u| u.admin_menu_open = !u.admin_menu_open)
                    >
                        "☰"
                    </button>
                    <h1 class="admin-page__title">{move || tab.get().label()}</h1>
                    <span class="admin-page__spacer"></span>
                    <a class="btn" href="/">
                        "Weboldal"
                    </a>
                    <button class="btn admin-page__logout" on:click=on_logout.clone()>
                        "Kijelentkezés"
                    </button>
                </header>
                <div class="admin-page__body">
                    <nav class="admin-tabs" class:admin-tabs--open=move || ui.get().admin_menu_open>
                        {AdminTab::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        class="admin-tabs__tab"
                                        class:admin-tabs__tab--active=move || tab.get() == t
                                        on:click=move |_| select(t)
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>
                    <section class="admin-page__content">
                        {move || match tab.get() {
                            AdminTab::Dashboard => view! { <DashboardTab/> }.into_any(),
                            AdminTab::Gallery => view! { <GalleryTab/> }.into_any(),
                            AdminTab::Slideshow => view! { <SlideshowTab/> }.into_any(),
                            AdminTab::Breeds => view! { <BreedsTab/> }.into_any(),
                            AdminTab::Puppies => view! { <PuppiesTab/> }.into_any(),
                            AdminTab::Bookings => view! { <BookingsTab/> }.into_any(),
                            AdminTab::Content => view! { <ContentTab/> }.into_any(),
                            AdminTab::Menu => view! { <MenuTab/> }.into_any(),
                            AdminTab::Contact => view! { <ContactTab/> }.into_any(),
                        }}
                    </section>
                </div>
            </div>
        </Show>
    }
}
