//! Labelled text input bound to a signal, used by the admin forms.

use leptos::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    view! {
        <label class="admin-form__label">
            {label}
            {if multiline {
                view! {
                    <textarea
                        class="admin-form__input admin-form__input--multiline"
                        placeholder=placeholder
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        class="admin-form__input"
                        type="text"
                        placeholder=placeholder
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                }
                    .into_any()
            }}
        </label>
    }
}
