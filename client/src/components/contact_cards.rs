//! Contact section: phone, e-mail, Instagram and opening hours.

use leptos::prelude::*;

use crate::state::content::ContentStore;
use crate::util::contact::{instagram_url, mailto_href, tel_href};

#[component]
pub fn ContactCards() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let site = move || content.with(|c| c.site_content().clone());

    view! {
        <section class="contact">
            <h2 class="section-title">"Kapcsolat"</h2>
            <div class="contact__grid">
                <a class="contact-card" href=move || tel_href(&site().contact_phone)>
                    <span class="contact-card__label">"Telefon"</span>
                    <span class="contact-card__value">{move || site().contact_phone}</span>
                </a>
                <a class="contact-card" href=move || mailto_href(&site().contact_email)>
                    <span class="contact-card__label">"E-mail"</span>
                    <span class="contact-card__value">{move || site().contact_email}</span>
                </a>
                <a
                    class="contact-card"
                    href=move || instagram_url(&site().instagram)
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <span class="contact-card__label">"Instagram"</span>
                    <span class="contact-card__value">{move || site().instagram}</span>
                </a>
                <div class="contact-card">
                    <span class="contact-card__label">"Nyitvatartás"</span>
                    <span class="contact-card__value">{move || site().opening_hours}</span>
                    <span class="contact-card__note">{move || site().address}</span>
                </div>
            </div>
        </section>
    }
}
