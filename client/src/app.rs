//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::pages::{
    admin::AdminPage, admin_login::AdminLoginPage, booking::BookingPage, gallery::GalleryPage, home::HomePage,
    puppies::PuppiesPage,
};
use crate::state::auth::{AdminCredentials, AuthGate};
use crate::state::content::ContentStore;
use crate::state::storage::{BrowserStorage, KeyValueStore};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="hu">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the content store, auth gate and UI state as contexts. Both the
/// server render and the first client render use built-in defaults; the
/// persisted collections are read once the app has mounted in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let storage: Arc<dyn KeyValueStore> = Arc::new(BrowserStorage);
    let content = RwSignal::new(ContentStore::with_defaults(storage.clone()));
    let auth = RwSignal::new(AuthGate::new(storage.clone(), AdminCredentials::configured()));
    let ui = RwSignal::new(UiState::default());

    provide_context(content);
    provide_context(auth);
    provide_context(ui);

    Effect::new(move || {
        content.set(ContentStore::load(storage.clone()));
        auth.update(AuthGate::restore);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/hibrid-site.css"/>
        <Title text="Hibrid Shopp"/>

        <Router>
            <Navigation/>
            <main class="site-main">
                <Routes fallback=|| view! { <p class="not-found">"Az oldal nem található."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("gallery") view=GalleryPage/>
                    <Route path=StaticSegment("puppies") view=PuppiesPage/>
                    <Route path=StaticSegment("booking") view=BookingPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
}
