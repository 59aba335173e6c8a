//! Landing page: hero slideshow, selling points, breeds and contact.

use leptos::prelude::*;

use crate::components::breed_card::BreedCard;
use crate::components::contact_cards::ContactCards;
use crate::components::hero_slideshow::HeroSlideshow;
use crate::state::content::ContentStore;
use crate::state::showcase::{FEATURES, showcase_breeds};

#[component]
pub fn HomePage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();

    let breeds = move || {
        content.with(|c| if c.breeds().is_empty() { showcase_breeds() } else { c.breeds().to_vec() })
    };
    let about = move || content.with(|c| c.site_content().about_text.clone());

    view! {
        <div class="home-page">
            <HeroSlideshow/>

            <section class="features">
                {FEATURES
                    .into_iter()
                    .map(|(title, text)| {
                        view! {
                            <div class="feature-card">
                                <h3 class="feature-card__title">{title}</h3>
                                <p class="feature-card__text">{text}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="about">
                <h2 class="section-title">"Rólunk"</h2>
                <p class="about__text">{about}</p>
            </section>

            <section class="breeds">
                <h2 class="section-title">"Fajtáink"</h2>
                <div class="breeds__grid">
                    {move || breeds().into_iter().map(|breed| view! { <BreedCard breed=breed/> }).collect::<Vec<_>>()}
                </div>
            </section>

            <ContactCards/>
        </div>
    }
}
