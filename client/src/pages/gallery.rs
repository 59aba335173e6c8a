//! Photo gallery with category filter and lightbox.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows gallery images followed by slideshow images. While both collections
//! are empty the built-in gallery is shown instead. The lightbox indexes into
//! the filtered list, so filtering closes it.

use leptos::prelude::*;

use crate::components::lightbox::LightboxView;
use crate::state::catalog::{CategoryFilter, filter_gallery, gallery_entries};
use crate::state::content::ContentStore;
use crate::state::showcase::fallback_gallery;
use crate::state::ui::Lightbox;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let filter = RwSignal::new(CategoryFilter::All);
    let lightbox = RwSignal::new(Lightbox::default());

    let entries = Memo::new(move |_| {
        content.with(|c| {
            let entries = gallery_entries(c.gallery_images(), c.slideshow_images());
            if entries.is_empty() { fallback_gallery() } else { entries }
        })
    });
    let visible = Signal::derive(move || entries.with(|all| filter_gallery(all, filter.get())));

    let select = move |next: CategoryFilter| {
        filter.set(next);
        lightbox.update(Lightbox::close);
    };

    view! {
        <div class="gallery-page">
            <h1 class="page-title">"Galéria"</h1>
            <div class="filter-bar">
                {CategoryFilter::options()
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class="filter-bar__button"
                                class:filter-bar__button--active=move || filter.get() == option
                                on:click=move |_| select(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="empty-state">"Ebben a kategóriában még nincs kép."</p> }
            >
                <div class="gallery-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, img)| {
                                view! {
                                    <button
                                        class="gallery-grid__item"
                                        on:click=move |_| lightbox.update(|lb| lb.open(index))
                                    >
                                        <img class="gallery-grid__image" src=img.src alt=img.alt loading="lazy"/>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <LightboxView images=visible state=lightbox/>
        </div>
    }
}
