//! Hero banner: name reveal, intro copy and the code display.
//!
//! SYSTEM CONTEXT
//! ==============
//! The reveal itself lives in `state::hero`. This component owns the one
//! browser task that sleeps until the sequencer's next wake, advances it with
//! the elapsed time and publishes the result. Unmount fires the cancel
//! channel, which drops the pending timer and ends the task.

use leptos::prelude::*;

use crate::components::code_display::CodeDisplay;
use crate::data::profile::{FIRST_NAME, LAST_NAME};
use crate::state::hero::HeroState;

#[component]
pub fn HeroSection() -> impl IntoView {
    let hero = RwSignal::new(HeroState::default());

    #[cfg(feature = "hydrate")]
    spawn_reveal_driver(hero);

    let first_visible = move || hero.get().first_name_visible;
    let last_visible = move || hero.get().last_name_visible;
    let flipping = move || hero.get().is_flipping;
    let last_name = move || hero.get().displayed_last_name();
    let last_name_class = move || {
        if hero.get().last_name_reversed {
            "hero__name hero__name--last hero__name--garbled"
        } else {
            "hero__name hero__name--last hero__name--gradient"
        }
    };
    let status_index = Signal::derive(move || hero.get().status_index);

    view! {
        <section id="hero" class="hero">
            <div class="hero__inner">
                <div class="hero__intro">
                    <div class="hero__names">
                        <Show when=first_visible>
                            <h1 class="hero__name hero__name--first">{FIRST_NAME}</h1>
                        </Show>
                        <Show when=last_visible>
                            <h1 class=last_name_class>{last_name}</h1>
                        </Show>
                        <Show when=flipping>
                            <div class="hero__flip">
                                <div class="hero__flip-card hero__name--gradient">{LAST_NAME}</div>
                            </div>
                        </Show>
                    </div>

                    <div class="hero__copy">
                        <h2>"Full-Stack Developer"</h2>
                        <p>
                            "Creating innovative solutions with modern technologies and a passion for building the future."
                        </p>
                        <div class="hero__cta">
                            <a href="#about" class="hero__cta-link">
                                <span>"Who am I?"</span>
                                <span class="hero__cta-chevron">"⌄"</span>
                            </a>
                        </div>
                    </div>
                </div>

                <div class="hero__display">
                    <CodeDisplay status_index=status_index/>
                </div>
            </div>
        </section>
    }
}

/// Run the reveal timeline against `hero` until the component unmounts.
#[cfg(feature = "hydrate")]
fn spawn_reveal_driver(hero: RwSignal<HeroState>) {
    use std::time::Duration;

    use futures::channel::oneshot;

    use crate::data::status::STATUS_ITEMS;
    use crate::state::hero::{HeroSequencer, drive_reveal};
    use crate::util::clock::now_ms;

    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

    leptos::task::spawn_local(async move {
        let mut sequencer = HeroSequencer::new(STATUS_ITEMS.len());
        drive_reveal(
            &mut sequencer,
            now_ms,
            |ms| gloo_timers::future::sleep(Duration::from_millis(ms)),
            cancel_rx,
            move |next| hero.set(next),
        )
        .await;
    });

    on_cleanup(move || {
        let _ = cancel_tx.send(());
    });
}
