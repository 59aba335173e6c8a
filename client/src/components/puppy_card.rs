//! Listing card for a single puppy.

#[cfg(test)]
#[path = "puppy_card_test.rs"]
mod puppy_card_test;

use leptos::prelude::*;

use crate::state::content::ContentStore;
use crate::state::models::Puppy;
use crate::util::contact::tel_href;

/// Call link for the inquiry button. `None` hides it while no phone is set.
fn inquiry_href(phone: &str) -> Option<String> {
    if phone.trim().is_empty() { None } else { Some(tel_href(phone)) }
}

#[component]
pub fn PuppyCard(puppy: Puppy) -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let Puppy { name, breed, age, price, description, image, available, .. } = puppy;
    let inquiry = move || {
        content.with(|c| inquiry_href(&c.site_content().contact_phone)).map(|href| {
            view! {
                <a class="btn btn--ghost" href=href>
                    "Érdeklődés"
                </a>
            }
        })
    };

    view! {
        <article class="puppy-card" class:puppy-card--reserved=!available>
            <div class="puppy-card__media">
                <img class="puppy-card__image" src=image alt=name.clone()/>
                <span class="puppy-card__badge">{if available { "Elérhető" } else { "Foglalt" }}</span>
            </div>
            <div class="puppy-card__body">
                <h3 class="puppy-card__name">{name}</h3>
                <p class="puppy-card__breed">{breed}</p>
                <p class="puppy-card__age">{age}</p>
                <p class="puppy-card__description">{description}</p>
                <div class="puppy-card__footer">
                    <span class="puppy-card__price">{price}</span>
                    {inquiry}
                    <a class="btn btn--primary" href="/booking">
                        "Látogatás foglalása"
                    </a>
                </div>
            </div>
        </article>
    }
}
