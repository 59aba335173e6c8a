//! Admin overview: collection counts and the latest bookings.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::state::catalog::{DashboardStats, recent_bookings};
use crate::state::content::ContentStore;

const RECENT_BOOKINGS: usize = 5;

/// Label and count for each overview tile, in display order.
fn stat_cards(stats: &DashboardStats) -> [(&'static str, usize); 6] {
    [
        ("Galéria képek", stats.gallery_images),
        ("Slideshow képek", stats.slideshow_images),
        ("Összes foglalás", stats.total_bookings),
        ("Függő foglalások", stats.pending_bookings),
        ("Kiskutyák", stats.puppies),
        ("Fajták", stats.breeds),
    ]
}

#[component]
pub fn DashboardTab() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let stats = Memo::new(move |_| content.with(DashboardStats::from_store));
    let recent = move || content.with(|c| recent_bookings(c.bookings(), RECENT_BOOKINGS));

    view! {
        <div class="admin-dashboard">
            <div class="stat-grid">
                {move || {
                    stat_cards(&stats.get())
                        .into_iter()
                        .map(|(label, value)| view! { <StatCard label=label value=value/> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <h3 class="admin-section__title">"Legutóbbi foglalások"</h3>
            <Show
                when=move || !recent().is_empty()
                fallback=|| view! { <p class="admin-empty">"Még nincs foglalás."</p> }
            >
                <ul class="admin-list">
                    {move || {
                        recent()
                            .into_iter()
                            .map(|b| {
                                view! {
                                    <li class="admin-list__item">
                                        <span class="admin-list__primary">{b.name}</span>
                                        <span class="admin-list__secondary">
                                            {format!("{} {}", b.preferred_date, b.preferred_time)}
                                        </span>
                                        <span class=format!("status-badge status-badge--{}", b.status)>
                                            {b.status.label()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
