//! Mock editor window rendering the developer profile as code, plus the
//! rotating status pill.

use leptos::prelude::*;

use crate::data::profile::DEVELOPER_PROFILE;
use crate::data::status::status_at;

/// Render a string list as `"a", "b", "c"` tokens.
fn string_list(items: &'static [&'static str]) -> impl IntoView {
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            view! {
                <span>
                    <span class="code__string">{format!("\"{item}\"")}</span>
                    {(i < last).then(|| view! { <span class="code__punct">", "</span> })}
                </span>
            }
        })
        .collect_view()
}

fn string_field(key: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div>
            <span class="code__key">{key}</span>
            <span class="code__punct">": "</span>
            <span class="code__string">{format!("\"{value}\"")}</span>
            <span class="code__punct">","</span>
        </div>
    }
}

/// `status_index` selects the phrase shown in the pill.
#[component]
pub fn CodeDisplay(#[prop(into)] status_index: Signal<usize>) -> impl IntoView {
    let profile = &DEVELOPER_PROFILE;

    let status_text = move || status_at(status_index.get()).map(|s| s.text).unwrap_or_default();
    let status_glyph = move || status_at(status_index.get()).map(|s| s.icon.glyph()).unwrap_or_default();

    view! {
        <div class="code-display">
            <div class="code-display__titlebar">
                <div class="code-display__lights">
                    <span class="code-display__light code-display__light--red"></span>
                    <span class="code-display__light code-display__light--yellow"></span>
                    <span class="code-display__light code-display__light--green"></span>
                </div>
                <div class="code-display__filename">"about-me.ts"</div>
            </div>

            <div class="code-display__body">
                <span class="code__comment">"// Using VsCode to write code with code"</span>
                <div>
                    <span class="code__keyword">"const"</span>" "
                    <span class="code__ident">"aboutMe"</span>
                    <span class="code__punct">": "</span>
                    <span class="code__type">"DevProfile"</span>" "
                    <span class="code__punct">"= {"</span>
                </div>
                <div class="code__indent">
                    {string_field("devname", profile.codename)}
                    {string_field("location", profile.location)}
                    {string_field("role", profile.role)}
                    <div>
                        <span class="code__key">"stack"</span>
                        <span class="code__punct">": {"</span>
                    </div>
                    <div class="code__indent">
                        <div>
                            <span class="code__key">"languages"</span>
                            <span class="code__punct">": "</span>
                            <span class="code__bracket">"["</span>
                            {string_list(profile.stack.languages)}
                            <span class="code__bracket">"]"</span>
                            <span class="code__punct">","</span>
                        </div>
                        <div>
                            <span class="code__key">"frameworks"</span>
                            <span class="code__punct">": "</span>
                            <span class="code__bracket">"["</span>
                            {string_list(profile.stack.frameworks)}
                            <span class="code__bracket">"]"</span>
                            <span class="code__punct">","</span>
                        </div>
                    </div>
                    <div><span class="code__punct">"},"</span></div>
                    {string_field("missionStatement", profile.mission_statement)}
                </div>
                <div><span class="code__punct">"};"</span></div>
            </div>

            <div class="code-display__status">
                <div class="status-pill">
                    <span class="status-pill__icon">{status_glyph}</span>
                    <span>{status_text}</span>
                </div>
            </div>
        </div>
    }
}
