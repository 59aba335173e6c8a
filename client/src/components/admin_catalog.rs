//! Admin tabs for breeds and puppies: add forms plus the current lists.

use leptos::prelude::*;

use crate::components::form_field::TextField;
use crate::state::content::ContentStore;
use crate::state::models::{NewBreed, NewPuppy, parse_characteristics};

#[component]
pub fn BreedsTab() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let draft = RwSignal::new(NewBreed::default());
    // Comma-separated; split into `characteristics` on submit.
    let traits = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut value = draft.get_untracked();
        if !value.is_complete() {
            return;
        }
        value.characteristics = parse_characteristics(&traits.get_untracked());
        let image_src = image.get_untracked();
        value.image = (!image_src.trim().is_empty()).then(|| image_src.trim().to_owned());
        content.update(|c| {
            c.add_breed(value);
        });
        draft.set(NewBreed::default());
        traits.set(String::new());
        image.set(String::new());
    };

    let (name, on_name) = bind_text(draft, |d| &d.name, |d| &mut d.name);
    let (description, on_description) = bind_text(draft, |d| &d.description, |d| &mut d.description);
    let (size, on_size) = bind_text(draft, |d| &d.size, |d| &mut d.size);
    let (lifespan, on_lifespan) = bind_text(draft, |d| &d.lifespan, |d| &mut d.lifespan);

    view! {
        <div class="admin-catalog">
            <form class="admin-form" on:submit=on_submit>
                <TextField label="Név" value=name on_input=on_name/>
                <TextField label="Leírás" value=description on_input=on_description multiline=true/>
                <TextField label="Méret" value=size on_input=on_size placeholder="Kicsi (3-7 kg)"/>
                <TextField label="Élettartam" value=lifespan on_input=on_lifespan placeholder="12-15 év"/>
                <TextField
                    label="Jellemzők (vesszővel elválasztva)"
                    value=traits.into()
                    on_input=Callback::new(move |v: String| traits.set(v))
                    placeholder="Hipoallergén, Intelligens"
                />
                <TextField label="Kép URL" value=image.into() on_input=Callback::new(move |v: String| image.set(v))/>
                <button class="btn btn--primary" type="submit" disabled=move || !draft.get().is_complete()>
                    "Fajta hozzáadása"
                </button>
            </form>
            <ul class="admin-list">
                {move || {
                    content
                        .with(|c| c.breeds().to_vec())
                        .into_iter()
                        .map(|b| {
                            view! {
                                <li class="admin-list__item">
                                    <span class="admin-list__primary">{b.name}</span>
                                    <span class="admin-list__secondary">{b.characteristics.join(", ")}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

#[component]
pub fn PuppiesTab() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let draft = RwSignal::new(NewPuppy::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = draft.get_untracked();
        if !value.is_complete() {
            return;
        }
        content.update(|c| {
            c.add_puppy(value);
        });
        draft.set(NewPuppy::default());
    };

    let (name, on_name) = bind_text(draft, |d| &d.name, |d| &mut d.name);
    let (breed, on_breed) = bind_text(draft, |d| &d.breed, |d| &mut d.breed);
    let (age, on_age) = bind_text(draft, |d| &d.age, |d| &mut d.age);
    let (price, on_price) = bind_text(draft, |d| &d.price, |d| &mut d.price);
    let (description, on_description) = bind_text(draft, |d| &d.description, |d| &mut d.description);
    let (image, on_image) = bind_text(draft, |d| &d.image, |d| &mut d.image);

    view! {
        <div class="admin-catalog">
            <form class="admin-form" on:submit=on_submit>
                <TextField label="Név" value=name on_input=on_name/>
                <TextField label="Fajta" value=breed on_input=on_breed placeholder="Maltipoo"/>
                <TextField label="Kor" value=age on_input=on_age placeholder="8 hetes"/>
                <TextField label="Ár" value=price on_input=on_price/>
                <TextField label="Leírás" value=description on_input=on_description multiline=true/>
                <TextField label="Kép URL" value=image on_input=on_image/>
                <button class="btn btn--primary" type="submit" disabled=move || !draft.get().is_complete()>
                    "Kiskutya hozzáadása"
                </button>
            </form>
            <ul class="admin-list">
                {move || {
                    content
                        .with(|c| c.puppies().to_vec())
                        .into_iter()
                        .map(|p| {
                            view! {
                                <li class="admin-list__item">
                                    <span class="admin-list__primary">{p.name}</span>
                                    <span class="admin-list__secondary">{format!("{} · {}", p.breed, p.price)}</span>
                                    <span class="admin-list__secondary">
                                        {if p.available { "Elérhető" } else { "Foglalt" }}
                                    </span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

/// Signal and setter for one text field of a draft record.
fn bind_text<T: Send + Sync + 'static>(
    draft: RwSignal<T>,
    get: fn(&T) -> &String,
    get_mut: fn(&mut T) -> &mut String,
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || draft.with(|d| get(d).clone())),
        Callback::new(move |v: String| draft.update(|d| *get_mut(d) = v)),
    )
}
