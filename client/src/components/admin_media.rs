//! Admin tabs for gallery and slideshow images.
//!
//! SYSTEM CONTEXT
//! ==============
//! Images are referenced by URL or data URL typed into the form. Both tabs
//! append through the store and delete by id; neither edits in place.

use leptos::prelude::*;

use crate::components::form_field::TextField;
use crate::state::content::ContentStore;
use crate::state::models::{ImageCategory, NewGalleryImage, NewSlideshowImage, RecordId};

#[component]
pub fn GalleryTab() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let draft = RwSignal::new(NewGalleryImage::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = draft.get_untracked();
        if !value.is_complete() {
            return;
        }
        content.update(|c| {
            c.add_gallery_image(value);
        });
        draft.set(NewGalleryImage::default());
    };
    let delete = move |id: RecordId| {
        content.update(|c| {
            if let Err(e) = c.delete_gallery_image(id) {
                log::warn!("gallery delete ignored: {e}");
            }
        });
    };

    view! {
        <div class="admin-media">
            <form class="admin-form" on:submit=on_submit>
                <ImageFields
                    src=Signal::derive(move || draft.get().src)
                    alt=Signal::derive(move || draft.get().alt)
                    on_src=Callback::new(move |v: String| draft.update(|d| d.src = v))
                    on_alt=Callback::new(move |v: String| draft.update(|d| d.alt = v))
                />
                <label class="admin-form__label">
                    "Kategória"
                    <select
                        class="admin-form__input"
                        prop:value=move || draft.get().category.slug()
                        on:change=move |ev| {
                            if let Some(category) = ImageCategory::from_slug(&event_target_value(&ev)) {
                                draft.update(|d| d.category = category);
                            }
                        }
                    >
                        {ImageCategory::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.slug()>{c.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || !draft.get().is_complete()>
                    "Kép hozzáadása"
                </button>
            </form>
            <div class="admin-thumbs">
                {move || {
                    content
                        .with(|c| c.gallery_images().to_vec())
                        .into_iter()
                        .map(|img| {
                            let id = img.id;
                            view! {
                                <Thumb
                                    src=img.src
                                    alt=img.alt
                                    caption=img.category.label().to_owned()
                                    on_delete=Callback::new(move |()| delete(id))
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn SlideshowTab() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let draft = RwSignal::new(NewSlideshowImage::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = draft.get_untracked();
        if !value.is_complete() {
            return;
        }
        content.update(|c| {
            c.add_slideshow_image(value);
        });
        draft.set(NewSlideshowImage::default());
    };
    let delete = move |id: RecordId| {
        content.update(|c| {
            if let Err(e) = c.delete_slideshow_image(id) {
                log::warn!("slideshow delete ignored: {e}");
            }
        });
    };

    view! {
        <div class="admin-media">
            <form class="admin-form" on:submit=on_submit>
                <ImageFields
                    src=Signal::derive(move || draft.get().src)
                    alt=Signal::derive(move || draft.get().alt)
                    on_src=Callback::new(move |v: String| draft.update(|d| d.src = v))
                    on_alt=Callback::new(move |v: String| draft.update(|d| d.alt = v))
                />
                <button class="btn btn--primary" type="submit" disabled=move || !draft.get().is_complete()>
                    "Dia hozzáadása"
                </button>
            </form>
            <Show
                when=move || content.with(|c| !c.slideshow_images().is_empty())
                fallback=|| view! { <p class="admin-empty">"Nincs feltöltött dia, a beépített képek jelennek meg."</p> }
            >
                <div class="admin-thumbs">
                    {move || {
                        content
                            .with(|c| c.slideshow_images().to_vec())
                            .into_iter()
                            .map(|slide| {
                                let id = slide.id;
                                view! {
                                    <Thumb
                                        src=slide.src
                                        alt=slide.alt
                                        caption=slide.created_at.unwrap_or_default()
                                        on_delete=Callback::new(move |()| delete(id))
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Image URL and alt text inputs shared by both tabs.
#[component]
fn ImageFields(
    src: Signal<String>,
    alt: Signal<String>,
    on_src: Callback<String>,
    on_alt: Callback<String>,
) -> impl IntoView {
    view! {
        <TextField label="Kép URL" value=src on_input=on_src placeholder="https://... vagy data:image/..."/>
        <TextField label="Leírás (alt)" value=alt on_input=on_alt/>
    }
}

#[component]
fn Thumb(src: String, alt: String, caption: String, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <figure class="admin-thumb">
            <img class="admin-thumb__image" src=src alt=alt.clone()/>
            <figcaption class="admin-thumb__caption">
                <span>{alt}</span>
                <span class="admin-thumb__meta">{caption}</span>
            </figcaption>
            <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(())>
                "Törlés"
            </button>
        </figure>
    }
}
