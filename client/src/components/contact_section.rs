//! Contact panel: details, resume request, social links and the message form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field edits go through `ContactState::set_field` on every keystroke. On
//! submit the form hands `state::contact::submit` its signal and the EmailJS
//! client; once a terminal status lands, `hold_status` keeps it up for the
//! display window and then clears it.

use leptos::prelude::*;

use crate::data::contact::{EMAIL_ADDRESS, LOCATION, PHONE_HREF, RESUME_PATH, SOCIAL_LINKS};
use crate::state::contact::{ContactField, ContactState, SubmitStatus};
use crate::util::mailto::resume_request_uri;
use crate::util::scroll::open_href;

#[component]
fn FormField(
    contact: RwSignal<ContactState>,
    field: ContactField,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || contact.with(|c| c.field(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        contact.update(|c| c.set_field(field, &raw));
    };

    let control = if multiline {
        view! {
            <textarea
                class="contact-form__input contact-form__input--message"
                id=id
                name=id
                rows="5"
                required=true
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="contact-form__input"
                type=input_type.unwrap_or("text")
                id=id
                name=id
                required=true
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="contact-form__field">
            <label class="contact-form__label" for=id>{label}</label>
            {control}
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());
    let submitting = move || contact.with(|c| c.submitting);
    let status = move || contact.with(|c| c.status);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if contact.with_untracked(|c| c.submitting) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::emailjs::EmailJsClient;
            use crate::state::contact::{hold_status, submit};
            use crate::util::clock::now_ms;

            let provider = EmailJsClient::from_build_env();
            let Some(result) = submit(&contact, &provider, now_ms).await else {
                return;
            };
            if result == SubmitStatus::Idle {
                return;
            }
            hold_status(&contact, now_ms, |ms| {
                gloo_timers::future::sleep(std::time::Duration::from_millis(ms))
            })
            .await;
        });
    };

    let on_resume_request = move |_| open_href(&resume_request_uri());

    let social_links = SOCIAL_LINKS
        .iter()
        .map(|link| {
            view! {
                <a class="contact__social-link" href=link.url target="_blank" rel="noopener noreferrer" aria-label=link.label>
                    {link.glyph}
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="contact" class="contact">
            <div class="contact__inner">
                <h2 class="section-title">"Get In " <span class="accent-gradient">"Touch"</span></h2>

                <div class="contact__columns">
                    <div class="contact__info">
                        <h3 class="contact__heading">"Contact Information"</h3>
                        <div class="contact__item">
                            <h4>"Location"</h4>
                            <p>{LOCATION}</p>
                        </div>
                        <div class="contact__item">
                            <h4>"Phone"</h4>
                            <p><a href=PHONE_HREF>"Call/Text Me"</a></p>
                        </div>
                        <div class="contact__item">
                            <h4>"Email"</h4>
                            <p><a href=format!("mailto:{EMAIL_ADDRESS}")>{EMAIL_ADDRESS}</a></p>
                        </div>

                        <div class="contact__resume">
                            <button class="contact__resume-button" on:click=on_resume_request>
                                "Request Resume via Email"
                            </button>
                            <p class="contact__hint">"I'll send my resume directly to your inbox"</p>
                            <a class="contact__resume-download" href=RESUME_PATH download="">"Download Resume"</a>
                        </div>

                        <div class="contact__social">
                            <h4>"Follow Me"</h4>
                            <div class="contact__social-links">{social_links}</div>
                        </div>
                    </div>

                    <div class="contact__form-card">
                        <h3 class="contact__heading">"Send Me a Message"</h3>
                        <form class="contact-form" on:submit=on_submit>
                            <div class="contact-form__row">
                                <FormField
                                    contact=contact
                                    field=ContactField::Name
                                    id="name"
                                    label="Your Name"
                                    placeholder="John Doe"
                                />
                                <FormField
                                    contact=contact
                                    field=ContactField::Email
                                    id="email"
                                    label="Your Email"
                                    placeholder="john@example.com"
                                    input_type="email"
                                />
                            </div>
                            <FormField
                                contact=contact
                                field=ContactField::Subject
                                id="subject"
                                label="Subject"
                                placeholder="Project Discussion"
                            />
                            <FormField
                                contact=contact
                                field=ContactField::Message
                                id="message"
                                label="Your Message"
                                placeholder="Tell me about your project..."
                                multiline=true
                            />

                            <button class="contact-form__submit" type="submit" disabled=submitting>
                                {move || if submitting() { "Sending..." } else { "Send Message" }}
                            </button>

                            <Show when=move || status() == SubmitStatus::Success>
                                <div class="contact-form__status contact-form__status--success">
                                    "Message sent successfully! I'll get back to you soon."
                                </div>
                            </Show>
                            <Show when=move || status() == SubmitStatus::Error>
                                <div class="contact-form__status contact-form__status--error">
                                    "There was an error sending your message. Please try again."
                                </div>
                            </Show>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
