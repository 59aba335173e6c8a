//! Admin booking list with confirm, cancel and delete actions.
//!
//! Actions are offered according to the booking's current status; the store
//! re-checks the transition and a rejected one is only logged.

use leptos::prelude::*;

use crate::state::content::ContentStore;
use crate::state::models::{BookingStatus, RecordId};

#[component]
pub fn BookingsTab() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let bookings = move || content.with(|c| c.bookings().iter().rev().cloned().collect::<Vec<_>>());

    let set_status = move |id: RecordId, status: BookingStatus| {
        content.update(|c| {
            if let Err(e) = c.update_booking_status(id, status) {
                log::warn!("booking status change ignored: {e}");
            }
        });
    };
    let delete = move |id: RecordId| {
        content.update(|c| {
            if let Err(e) = c.delete_booking(id) {
                log::warn!("booking delete ignored: {e}");
            }
        });
    };

    view! {
        <div class="admin-bookings">
            <Show
                when=move || content.with(|c| !c.bookings().is_empty())
                fallback=|| view! { <p class="admin-empty">"Még nincs foglalás."</p> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Név"</th>
                            <th>"Elérhetőség"</th>
                            <th>"Időpont"</th>
                            <th>"Érdeklődés"</th>
                            <th>"Állapot"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            bookings()
                                .into_iter()
                                .map(|b| {
                                    let id = b.id;
                                    let status = b.status;
                                    view! {
                                        <tr>
                                            <td>
                                                {b.name}
                                                {b.message.map(|m| view! { <p class="admin-table__note">{m}</p> })}
                                            </td>
                                            <td>
                                                {b.phone}
                                                {b.email.map(|e| view! { <br/> <span>{e}</span> })}
                                            </td>
                                            <td>{format!("{} {}", b.preferred_date, b.preferred_time)}</td>
                                            <td>{b.dog_name.unwrap_or_default()}</td>
                                            <td>
                                                <span class=format!("status-badge status-badge--{status}")>
                                                    {status.label()}
                                                </span>
                                            </td>
                                            <td class="admin-table__actions">
                                                <Show when=move || status.can_confirm()>
                                                    <button
                                                        class="btn btn--small btn--success"
                                                        on:click=move |_| set_status(id, BookingStatus::Confirmed)
                                                    >
                                                        "Megerősítés"
                                                    </button>
                                                </Show>
                                                <Show when=move || status.can_cancel()>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| set_status(id, BookingStatus::Cancelled)
                                                    >
                                                        "Lemondás"
                                                    </button>
                                                </Show>
                                                <button class="btn btn--small btn--danger" on:click=move |_| delete(id)>
                                                    "Törlés"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
