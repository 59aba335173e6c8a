//! Admin editors for the site copy and contact details.
//!
//! DESIGN
//! ======
//! Both tabs edit a local copy of `SiteContent` and replace the stored record
//! only on save, so abandoning the tab discards the edits.

use leptos::prelude::*;

use crate::components::form_field::TextField;
use crate::state::content::ContentStore;
use crate::state::models::SiteContent;

type FieldAccess = (&'static str, fn(&SiteContent) -> &String, fn(&mut SiteContent) -> &mut String, bool);

static CONTENT_FIELDS: [FieldAccess; 3] = [
    ("Főcím", |c| &c.hero_title, |c| &mut c.hero_title, false),
    ("Alcím", |c| &c.hero_subtitle, |c| &mut c.hero_subtitle, false),
    ("Rólunk", |c| &c.about_text, |c| &mut c.about_text, true),
];

static CONTACT_FIELDS: [FieldAccess; 5] = [
    ("Telefonszám", |c| &c.contact_phone, |c| &mut c.contact_phone, false),
    ("E-mail", |c| &c.contact_email, |c| &mut c.contact_email, false),
    ("Instagram", |c| &c.instagram, |c| &mut c.instagram, false),
    ("Nyitvatartás", |c| &c.opening_hours, |c| &mut c.opening_hours, false),
    ("Cím", |c| &c.address, |c| &mut c.address, false),
];

#[component]
pub fn ContentTab() -> impl IntoView {
    view! { <SiteContentEditor fields=&CONTENT_FIELDS[..]/> }
}

#[component]
pub fn ContactTab() -> impl IntoView {
    view! { <SiteContentEditor fields=&CONTACT_FIELDS[..]/> }
}

#[component]
fn SiteContentEditor(fields: &'static [FieldAccess]) -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let draft = RwSignal::new(content.with_untracked(|c| c.site_content().clone()));
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = draft.get_untracked();
        content.update(|c| c.set_site_content(value));
        saved.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::ui::SAVE_NOTICE_MS)).await;
            saved.set(false);
        });
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            {fields
                .iter()
                .map(|&(label, get, get_mut, multiline)| {
                    view! {
                        <TextField
                            label=label
                            value=Signal::derive(move || draft.with(|d| get(d).clone()))
                            on_input=Callback::new(move |v: String| draft.update(|d| *get_mut(d) = v))
                            multiline=multiline
                        />
                    }
                })
                .collect::<Vec<_>>()}
            <div class="admin-form__actions">
                <button class="btn btn--primary" type="submit">
                    "Mentés"
                </button>
                <Show when=move || saved.get()>
                    <span class="admin-form__notice">"Sikeresen mentve!"</span>
                </Show>
            </div>
        </form>
    }
}
