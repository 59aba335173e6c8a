//! Visit booking form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates the draft against today's date and the stored bookings, appends
//! the booking through the content store, then shows a short submitting state
//! before the confirmation view. Slots already held on the chosen date are not
//! offered.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use leptos::prelude::*;
use time::Date;

use crate::state::booking_form::{BookingDraft, BookingField, FieldErrors};
use crate::state::catalog::{available_time_slots, interest_options};
use crate::state::content::ContentStore;
use crate::util::clock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitting,
    Submitted,
}

impl Phase {
    fn submit_label(self) -> &'static str {
        if self == Self::Submitting { "Küldés..." } else { "Foglalás elküldése" }
    }
}

/// `min` for the date picker: bookings start today.
fn earliest_booking_date(today: Date) -> String {
    clock::format_iso_date(today)
}

/// Switch the requested day. The chosen slot may not exist on the new day.
fn change_date(draft: &mut BookingDraft, date: String) {
    draft.preferred_date = date;
    draft.preferred_time.clear();
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let draft = RwSignal::new(BookingDraft::default());
    let errors = RwSignal::new(FieldErrors::default());
    let phase = RwSignal::new(Phase::Editing);

    let edit = move |field: Option<BookingField>, apply: fn(&mut BookingDraft, String), value: String| {
        draft.update(|d| apply(d, value));
        if let Some(field) = field {
            errors.update(|e| e.clear(field));
        }
    };

    let slots = move || {
        let date = draft.with(|d| d.preferred_date.clone());
        content.with(|c| available_time_slots(c.bookings(), &date))
    };
    let interests = move || content.with(|c| interest_options(c.puppies()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() != Phase::Editing {
            return;
        }
        let result = content.with_untracked(|c| draft.with_untracked(|d| d.validate(clock::today(), c.bookings())));
        match result {
            Err(field_errors) => errors.set(field_errors),
            Ok(booking) => {
                errors.set(FieldErrors::default());
                content.update(|c| {
                    let stored = c.add_booking(booking);
                    log::info!("booking {} received for {} {}", stored.id, stored.preferred_date, stored.preferred_time);
                });
                phase.set(Phase::Submitting);

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        crate::state::ui::BOOKING_SUBMIT_DELAY_MS,
                    ))
                    .await;
                    phase.set(Phase::Submitted);
                });
                #[cfg(not(feature = "hydrate"))]
                phase.set(Phase::Submitted);
            }
        }
    };

    let reset = move |_| {
        draft.set(BookingDraft::default());
        errors.set(FieldErrors::default());
        phase.set(Phase::Editing);
    };

    let error_for = move |field: BookingField| move || errors.with(|e| e.get(field));

    view! {
        <div class="booking-page">
            <h1 class="page-title">"Időpontfoglalás"</h1>
            <Show
                when=move || phase.get() != Phase::Submitted
                fallback=move || {
                    view! {
                        <div class="booking-confirmation">
                            <h2>"Köszönjük a foglalást!"</h2>
                            <p>"Hamarosan felvesszük Önnel a kapcsolatot a megadott elérhetőségeken."</p>
                            <button class="btn btn--primary" on:click=reset>
                                "Új foglalás"
                            </button>
                        </div>
                    }
                }
            >
                <form class="booking-form" on:submit=on_submit novalidate=true>
                    <FormRow label="Név *" error=Signal::derive(error_for(BookingField::Name))>
                        <input
                            class="booking-form__input"
                            type="text"
                            prop:value=move || draft.get().name
                            on:input=move |ev| edit(Some(BookingField::Name), |d, v| d.name = v, event_target_value(&ev))
                        />
                    </FormRow>
                    <FormRow label="Telefonszám *" error=Signal::derive(error_for(BookingField::Phone))>
                        <input
                            class="booking-form__input"
                            type="tel"
                            placeholder="+36 70 123 4567"
                            prop:value=move || draft.get().phone
                            on:input=move |ev| {
                                edit(Some(BookingField::Phone), |d, v| d.phone = v, event_target_value(&ev));
                            }
                        />
                    </FormRow>
                    <FormRow label="E-mail" error=Signal::derive(|| None)>
                        <input
                            class="booking-form__input"
                            type="email"
                            prop:value=move || draft.get().email
                            on:input=move |ev| edit(None, |d, v| d.email = v, event_target_value(&ev))
                        />
                    </FormRow>
                    <FormRow label="Dátum *" error=Signal::derive(error_for(BookingField::PreferredDate))>
                        <input
                            class="booking-form__input"
                            type="date"
                            min=move || earliest_booking_date(clock::today())
                            prop:value=move || draft.get().preferred_date
                            on:input=move |ev| {
                                edit(Some(BookingField::PreferredDate), change_date, event_target_value(&ev));
                                errors.update(|e| e.clear(BookingField::PreferredTime));
                            }
                        />
                    </FormRow>
                    <FormRow label="Időpont *" error=Signal::derive(error_for(BookingField::PreferredTime))>
                        <select
                            class="booking-form__input"
                            prop:value=move || draft.get().preferred_time
                            on:change=move |ev| {
                                edit(Some(BookingField::PreferredTime), |d, v| d.preferred_time = v, event_target_value(&ev));
                            }
                        >
                            <option value="">"Válasszon időpontot"</option>
                            {move || {
                                slots()
                                    .into_iter()
                                    .map(|slot| view! { <option value=slot>{slot}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </FormRow>
                    <FormRow label="Érdeklődés" error=Signal::derive(|| None)>
                        <select
                            class="booking-form__input"
                            prop:value=move || draft.get().dog_name
                            on:change=move |ev| edit(None, |d, v| d.dog_name = v, event_target_value(&ev))
                        >
                            <option value="">"Válasszon"</option>
                            {move || {
                                interests()
                                    .into_iter()
                                    .map(|option| {
                                        let value = option.clone();
                                        view! { <option value=value>{option}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </FormRow>
                    <FormRow label="Üzenet" error=Signal::derive(|| None)>
                        <textarea
                            class="booking-form__input booking-form__input--multiline"
                            prop:value=move || draft.get().message
                            on:input=move |ev| edit(None, |d, v| d.message = v, event_target_value(&ev))
                        ></textarea>
                    </FormRow>
                    <button
                        class="btn btn--primary booking-form__submit"
                        type="submit"
                        disabled=move || phase.get() == Phase::Submitting
                    >
                        {move || phase.get().submit_label()}
                    </button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn FormRow(label: &'static str, error: Signal<Option<&'static str>>, children: Children) -> impl IntoView {
    view! {
        <div class="booking-form__row" class:booking-form__row--invalid=move || error.get().is_some()>
            <label class="booking-form__label">{label}</label>
            {children()}
            {move || error.get().map(|message| view! { <p class="booking-form__error">{message}</p> })}
        </div>
    }
}
