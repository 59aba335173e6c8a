//! Puppy listing with a breed filter.

use leptos::prelude::*;

use crate::components::puppy_card::PuppyCard;
use crate::state::catalog::{BreedFilter, filter_puppies, unique_breeds};
use crate::state::content::ContentStore;

#[component]
pub fn PuppiesPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let filter = RwSignal::new(BreedFilter::All);

    let breeds = move || content.with(|c| unique_breeds(c.puppies()));
    let visible = move || content.with(|c| filter.with(|f| filter_puppies(c.puppies(), f)));

    view! {
        <div class="puppies-page">
            <h1 class="page-title">"Kiskutyáink"</h1>
            <div class="filter-bar">
                <button
                    class="filter-bar__button"
                    class:filter-bar__button--active=move || filter.with(|f| *f == BreedFilter::All)
                    on:click=move |_| filter.set(BreedFilter::All)
                >
                    "Összes"
                </button>
                {move || {
                    breeds()
                        .into_iter()
                        .map(|breed| {
                            let selected = BreedFilter::Only(breed.clone());
                            let is_active = selected.clone();
                            view! {
                                <button
                                    class="filter-bar__button"
                                    class:filter-bar__button--active=move || filter.with(|f| *f == is_active)
                                    on:click=move |_| filter.set(selected.clone())
                                >
                                    {breed}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <p>"Jelenleg nincs elérhető kiskutya ebben a kategóriában."</p>
                            <a class="btn btn--primary" href="/booking">
                                "Érdeklődjön időpontfoglalással"
                            </a>
                        </div>
                    }
                }
            >
                <div class="puppy-grid">
                    {move || visible().into_iter().map(|puppy| view! { <PuppyCard puppy=puppy/> }).collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
