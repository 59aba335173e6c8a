//! Admin editor for the navigation menu.

use leptos::prelude::*;

use crate::components::form_field::TextField;
use crate::state::content::ContentStore;
use crate::state::models::{NewMenuItem, RecordId};

#[component]
pub fn MenuTab() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let draft = RwSignal::new(NewMenuItem::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = draft.get_untracked();
        if !value.is_complete() {
            return;
        }
        content.update(|c| {
            c.add_menu_item(value);
        });
        draft.set(NewMenuItem::default());
    };
    let delete = move |id: RecordId| {
        content.update(|c| {
            if let Err(e) = c.delete_menu_item(id) {
                log::warn!("menu delete ignored: {e}");
            }
        });
    };
    let toggle_visible = move |id: RecordId| {
        content.update(|c| {
            let mut items = c.menu_items().to_vec();
            if let Some(item) = items.iter_mut().find(|i| i.id == id) {
                item.visible = !item.visible;
                c.set_menu_items(items);
            }
        });
    };

    view! {
        <div class="admin-menu">
            <form class="admin-form" on:submit=on_submit>
                <TextField
                    label="Menüpont neve"
                    value=Signal::derive(move || draft.get().name)
                    on_input=Callback::new(move |v: String| draft.update(|d| d.name = v))
                />
                <TextField
                    label="Útvonal"
                    value=Signal::derive(move || draft.get().path)
                    on_input=Callback::new(move |v: String| draft.update(|d| d.path = v))
                    placeholder="/blog"
                />
                <button class="btn btn--primary" type="submit" disabled=move || !draft.get().is_complete()>
                    "Menüpont hozzáadása"
                </button>
            </form>
            <ul class="admin-list">
                {move || {
                    let mut items = content.with(|c| c.menu_items().to_vec());
                    items.sort_by_key(|i| i.order);
                    items
                        .into_iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <li class="admin-list__item" class:admin-list__item--muted=!item.visible>
                                    <span class="admin-list__primary">{item.name}</span>
                                    <span class="admin-list__secondary">{item.path}</span>
                                    <button class="btn btn--small" on:click=move |_| toggle_visible(id)>
                                        {if item.visible { "Elrejtés" } else { "Megjelenítés" }}
                                    </button>
                                    <button class="btn btn--small btn--danger" on:click=move |_| delete(id)>
                                        "Törlés"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
