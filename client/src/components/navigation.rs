//! Site header: logo, visible menu entries and a call button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the router outlet. Menu entries come from the content
//! store so admin edits show up without a reload.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::content::ContentStore;
use crate::state::ui::UiState;
use crate::util::contact::tel_href;

#[component]
pub fn Navigation() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let items = move || content.with(ContentStore::visible_menu_items);
    let phone_href = move || content.with(|c| tel_href(&c.site_content().contact_phone));
    let close_menu = move |_| ui.update(|u| u.nav_open = false);

    view! {
        <header class="site-nav">
            <a class="site-nav__logo" href="/" on:click=close_menu>
                "Hibrid Shopp"
            </a>
            <button
                class="site-nav__toggle"
                aria-label="Menü"
                on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)
            >
                {move || if ui.get().nav_open { "✕" } else { "☰" }}
            </button>
            <nav class="site-nav__links" class:site-nav__links--open=move || ui.get().nav_open>
                {move || {
                    items()
                        .into_iter()
                        .map(|item| {
                            let path = item.path.clone();
                            let active = move || pathname.get() == path;
                            view! {
                                <a
                                    class="site-nav__link"
                                    class:site-nav__link--active=active
                                    href=item.path
                                    on:click=close_menu
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <a class="btn btn--primary site-nav__call" href=phone_href>
                    "Hívás"
                </a>
            </nav>
        </header>
    }
}
