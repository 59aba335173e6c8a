//! Breed showcase card on the landing page.

use leptos::prelude::*;

use crate::state::models::Breed;

#[component]
pub fn BreedCard(breed: Breed) -> impl IntoView {
    let Breed { name, description, size, lifespan, characteristics, image, .. } = breed;
    let has_facts = !size.is_empty() || !lifespan.is_empty();

    view! {
        <article class="breed-card">
            {image.map(|src| view! { <img class="breed-card__image" src=src alt=name.clone()/> })}
            <div class="breed-card__body">
                <h3 class="breed-card__name">{name.clone()}</h3>
                <p class="breed-card__description">{description}</p>
                <ul class="breed-card__traits">
                    {characteristics
                        .into_iter()
                        .map(|c| view! { <li class="breed-card__trait">{c}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <Show when=move || has_facts>
                    <dl class="breed-card__facts">
                        <dt>"Méret"</dt>
                        <dd>{size.clone()}</dd>
                        <dt>"Élettartam"</dt>
                        <dd>{lifespan.clone()}</dd>
                    </dl>
                </Show>
            </div>
        </article>
    }
}
