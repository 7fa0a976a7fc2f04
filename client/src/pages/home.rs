//! The single portfolio page: navbar over hero, about, projects and contact.

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::contact_section::ContactSection;
use crate::components::hero_section::HeroSection;
use crate::components::navbar::Navbar;
use crate::components::project_section::ProjectSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <main>
                <HeroSection/>
                <AboutSection/>
                <ProjectSection/>
                <ContactSection/>
            </main>
        </div>
    }
}
