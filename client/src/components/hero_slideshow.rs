//! Landing hero with an auto-advancing background slideshow.
//!
//! DESIGN
//! ======
//! Slides come from the store's slideshow collection, or the built-in hero
//! images while it is empty. The timer task runs only in the browser and is
//! stopped through a shared flag when the component unmounts. Slides render
//! as `<img>` so stored URLs only ever reach an attribute value.

#[cfg(test)]
#[path = "hero_slideshow_test.rs"]
mod hero_slideshow_test;

use leptos::prelude::*;

use crate::state::content::ContentStore;
use crate::state::showcase::fallback_slides;

fn slide_sources(store: &ContentStore) -> Vec<String> {
    if store.slideshow_images().is_empty() {
        fallback_slides()
    } else {
        store.slideshow_images().iter().map(|s| s.src.clone()).collect()
    }
}

#[component]
pub fn HeroSlideshow() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentStore>>();
    let current = RwSignal::new(0usize);

    let slides = Memo::new(move |_| content.with(slide_sources));
    let active = move || current.get() % slides.with(Vec::len).max(1);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::ui::SLIDE_INTERVAL_MS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let len = slides.get_untracked().len();
                current.update(|i| *i = crate::state::ui::next_index(*i % len.max(1), len));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let site = move || content.with(|c| c.site_content().clone());

    view! {
        <section class="hero">
            <div class="hero__slides">
                {move || {
                    slides
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| {
                            view! {
                                <img
                                    class="hero__slide"
                                    class:hero__slide--active=move || active() == i
                                    src=src
                                    alt=""
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <div class="hero__overlay"></div>
            </div>
            <div class="hero__content">
                <h1 class="hero__title">{move || site().hero_title}</h1>
                <p class="hero__subtitle">{move || site().hero_subtitle}</p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/puppies">
                        "Kiskutyáink"
                    </a>
                    <a class="btn btn--ghost" href="/booking">
                        "Időpontfoglalás"
                    </a>
                </div>
            </div>
            <div class="hero__indicators">
                {move || {
                    (0..slides.with(Vec::len))
                        .map(|i| {
                            view! {
                                <button
                                    class="hero__indicator"
                                    class:hero__indicator--active=move || active() == i
                                    aria-label=format!("{}. dia", i + 1)
                                    on:click=move |_| current.set(i)
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
