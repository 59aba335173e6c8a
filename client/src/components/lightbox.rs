//! Full-screen image viewer for the gallery grid.

use leptos::prelude::*;

use crate::state::models::GalleryImage;
use crate::state::ui::Lightbox;

/// Overlay showing `images[state.index]`; hidden while the lightbox is closed.
///
/// Escape closes, arrow keys step through `images` with wrap-around.
#[component]
pub fn LightboxView(images: Signal<Vec<GalleryImage>>, state: RwSignal<Lightbox>) -> impl IntoView {
    let len = move || images.with(Vec::len);
    let current = move || {
        let index = state.get().index?;
        images.with(|list| list.get(index).cloned())
    };

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        let len = len();
        let mut consumed = false;
        state.update(|lb| consumed = lb.handle_key(&ev.key(), len));
        if consumed {
            ev.prevent_default();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || current().is_some()>
            <div class="lightbox" on:click=move |_| state.update(Lightbox::close)>
                <button class="lightbox__close" aria-label="Bezárás" on:click=move |_| state.update(Lightbox::close)>
                    "✕"
                </button>
                <button
                    class="lightbox__nav lightbox__nav--prev"
                    aria-label="Előző"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let len = len();
                        state.update(|lb| lb.prev(len));
                    }
                >
                    "‹"
                </button>
                {move || {
                    current()
                        .map(|img| {
                            view! {
                                <figure class="lightbox__figure" on:click=move |ev| ev.stop_propagation()>
                                    <img class="lightbox__image" src=img.src alt=img.alt.clone()/>
                                    <figcaption class="lightbox__caption">{img.alt}</figcaption>
                                </figure>
                            }
                        })
                }}
                <button
                    class="lightbox__nav lightbox__nav--next"
                    aria-label="Következő"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let len = len();
                        state.update(|lb| lb.next(len));
                    }
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}
