//! About panel: intro copy, headline stats and skill bars.

use leptos::prelude::*;

use crate::data::about::{DESCRIPTION, INTRO, SKILLS, STATS, skill_bar_width};

#[component]
pub fn AboutSection() -> impl IntoView {
    let stats = STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="about__stat">
                    <div class="about__stat-value">{stat.value}</div>
                    <div class="about__stat-label">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    let skills = SKILLS
        .iter()
        .map(|skill| {
            view! {
                <div class="skill">
                    <div class="skill__header">
                        <div class="skill__name">
                            <span class="skill__glyph">{skill.glyph}</span>
                            <span>{skill.name}</span>
                        </div>
                        <span class="skill__level">{format!("{}%", skill.level)}</span>
                    </div>
                    <div class="skill__track">
                        <div class="skill__bar" style=skill_bar_width(skill.level)></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="about">
            <div class="about__inner">
                <div class="about__text">
                    <h2 class="section-title">"About " <span class="accent-gradient">"Me"</span></h2>
                    <p class="about__intro">{INTRO}</p>
                    <p class="about__description">{DESCRIPTION}</p>
                    <div class="about__stats">{stats}</div>
                </div>

                <div class="about__skills">
                    <h3 class="about__skills-title">"</> Technical Skills"</h3>
                    <div class="about__skill-list">{skills}</div>
                    <div class="about__learning">
                        <span class="about__learning-glyph">"✦"</span>
                        <span>"Always learning new technologies and techniques!"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
