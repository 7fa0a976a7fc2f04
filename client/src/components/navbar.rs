//! Fixed top navigation bar with smooth in-page scrolling.

use leptos::prelude::*;

use crate::data::contact::nav_social_links;
use crate::data::nav::{NAV_ITEMS, is_scrolled};
use crate::util::scroll::{scroll_to_section, scroll_to_top, scroll_y};

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let scrolled = RwSignal::new(is_scrolled(scroll_y()));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scrolled.set(is_scrolled(scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }

    let nav_class = move || {
        if scrolled.get() { "navbar navbar--scrolled" } else { "navbar" }
    };

    let go_to = move |section_id: &'static str| {
        scroll_to_section(section_id);
        menu_open.set(false);
    };

    let nav_buttons = move |item_class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let section_id = item.section_id;
                view! {
                    <button class=item_class aria-label=item.label on:click=move |_| go_to(section_id)>
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    let social_links = |link_class: &'static str| {
        nav_social_links()
            .iter()
            .map(|link| {
                view! {
                    <a class=link_class href=link.url target="_blank" rel="noopener noreferrer" aria-label=link.label>
                        {link.glyph}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=nav_class>
            <div class="navbar__inner">
                <button class="navbar__logo" on:click=move |_| scroll_to_top()>
                    <span class="navbar__logo-glyph">"</>"</span>
                    <span>"DevProfile"</span>
                </button>

                <div class="navbar__links">
                    {nav_buttons("navbar__link")}
                    <div class="navbar__social">{social_links("navbar__social-link")}</div>
                </div>

                <button
                    class="navbar__menu-toggle"
                    aria-label="Toggle Menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    {nav_buttons("navbar__mobile-link")}
                    <div class="navbar__mobile-social">{social_links("navbar__mobile-social-link")}</div>
                </div>
            </Show>
        </nav>
    }
}
