use crate::class::cn;
use crate::components::icons::SocialIconView;
use crate::hooks::use_reveal;
use crate::mode::use_render_mode;
use crate::motion::Slide;
use crate::motion::reveal::TRANSITION;
use dioxus::prelude::*;
use folio_contact::{ContactField, ContactForm, FormHandle, SimulatedSink, submit};
use folio_domain::constants::{AVAILABILITY_NOTE, CONTACT_LOCATION, REVEAL_THRESHOLD, SUCCESS_BANNER};
use folio_domain::portfolio;

const INPUT: &str = "w-full px-4 py-2 bg-input border border-border rounded-lg focus:outline-none focus:ring-2 focus:ring-primary transition-all";
const CARD: &str = "p-4 bg-card border border-border rounded-lg";

/// Lets [`submit`] drive the form state held in a signal.
#[derive(Clone, Copy)]
struct FormSignal(Signal<ContactForm>);

impl FormHandle for FormSignal {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        let mut signal = self.0;
        f(&mut *signal.write())
    }
}

fn field_error(message: Option<&'static str>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    rsx! {
        p { class: "mt-1 text-sm text-destructive", role: "alert", "{message}" }
    }
}

/// The message form. Interactive renders validate and "send" through the
/// simulated sink; static renders fall back to a `mailto:` form action.
#[component]
pub fn ContactFormView() -> Element {
    let mode = use_render_mode();
    let mut form = use_signal(ContactForm::new);
    let state = form.read().clone();
    let draft = state.draft();
    let mailto = portfolio::profile().mailto();

    let onsubmit = move |ev: FormEvent| {
        ev.prevent_default();
        let handle = FormSignal(form);
        spawn(async move {
            if let Err(err) = submit(&handle, &SimulatedSink::default(), SUCCESS_BANNER).await {
                tracing::debug!(%err, "Contact form not sent");
            }
        });
    };

    rsx! {
        form {
            class: "space-y-4",
            "novalidate": if !mode.is_static() { "true" },
            action: if mode.is_static() { mailto },
            method: if mode.is_static() { "post" },
            enctype: if mode.is_static() { "text/plain" },
            onsubmit: onsubmit,
            div {
                label { r#for: "name", class: "block text-sm font-medium mb-2", "Your Name" }
                input {
                    id: "name",
                    r#type: "text",
                    name: "name",
                    required: true,
                    placeholder: "John Doe",
                    class: INPUT,
                    value: "{draft.name}",
                    oninput: move |ev| form.write().update(ContactField::Name, ev.value()),
                }
                {field_error(state.error_for(ContactField::Name))}
            }
            div {
                label { r#for: "email", class: "block text-sm font-medium mb-2", "Your Email" }
                input {
                    id: "email",
                    r#type: "email",
                    name: "email",
                    required: true,
                    placeholder: "john@example.com",
                    class: INPUT,
                    value: "{draft.email}",
                    oninput: move |ev| form.write().update(ContactField::Email, ev.value()),
                }
                {field_error(state.error_for(ContactField::Email))}
            }
            div {
                label { r#for: "message", class: "block text-sm font-medium mb-2", "Message" }
                textarea {
                    id: "message",
                    name: "message",
                    required: true,
                    placeholder: "Your message here...",
                    rows: "5",
                    class: cn([INPUT, "resize-none"]),
                    value: "{draft.message}",
                    oninput: move |ev| form.write().update(ContactField::Message, ev.value()),
                }
                {field_error(state.error_for(ContactField::Message))}
            }
            button {
                r#type: "submit",
                disabled: state.is_sending(),
                class: "w-full px-6 py-3 bg-primary text-primary-foreground rounded-lg font-semibold hover:opacity-90 transition-opacity disabled:opacity-50 cursor-disabled",
                if state.is_sending() { "Sending..." } else { "Send Message" }
            }
            if state.banner_visible() {
                div { class: "p-4 bg-primary/10 border border-primary/50 rounded-lg text-center", role: "status",
                    p { class: "text-primary font-semibold", "Message sent successfully! I'll get back to you soon." }
                }
            }
        }
    }
}

/// Icon grid of the social profiles. Links with an unknown icon key are kept
/// but render without a glyph.
#[component]
pub fn SocialLinks() -> Element {
    rsx! {
        div { class: "grid grid-cols-2 sm:grid-cols-4 gap-4",
            for link in portfolio::social_links() {
                a {
                    key: "{link.platform}",
                    href: link.url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "p-4 bg-card border border-border rounded-lg hover:border-primary/50 hover:bg-card/80 transition-all flex items-center justify-center text-foreground/70 hover:text-primary group",
                    "aria-label": link.platform,
                    div { class: "group-hover:scale-110 transition-transform",
                        if let Some(icon) = link.icon() {
                            SocialIconView { icon }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let reveal = use_reveal(REVEAL_THRESHOLD);
    let shown = reveal.is_revealed();
    let profile = portfolio::profile();
    let mailto = profile.mailto();

    rsx! {
        section { id: "contact", class: "py-20 px-4 max-w-7xl mx-auto",
            div { class: "space-y-12", onmounted: move |ev| reveal.mount(ev),
                div { class: "text-center space-y-4",
                    h2 { class: "text-3xl sm:text-5xl font-bold", "Let's Get In Touch" }
                    p { class: "text-muted-foreground text-lg max-w-2xl mx-auto",
                        "Have a project in mind or want to collaborate? I'd love to hear from you."
                    }
                }
                div { class: "grid md:grid-cols-2 gap-12",
                    div { class: cn([TRANSITION, Slide::FromLeft.state(shown)]),
                        div { class: "bg-card border border-border rounded-lg p-8",
                            h3 { class: "text-2xl font-bold mb-6", "Send me a message" }
                            ContactFormView {}
                        }
                    }
                    div { class: cn(["space-y-8", TRANSITION, "delay-100", Slide::FromRight.state(shown)]),
                        div {
                            h3 { class: "text-2xl font-bold mb-6", "Other ways to reach me" }
                            div { class: "space-y-4",
                                div { class: CARD,
                                    p { class: "text-sm text-muted-foreground mb-1", "Email" }
                                    a { href: mailto, class: "text-lg font-semibold text-primary hover:underline",
                                        "{profile.email}"
                                    }
                                }
                                div { class: CARD,
                                    p { class: "text-sm text-muted-foreground mb-1", "Location" }
                                    p { class: "text-lg font-semibold", "{CONTACT_LOCATION}" }
                                }
                            }
                        }
                        div {
                            h3 { class: "text-lg font-bold mb-4", "Follow me" }
                            SocialLinks {}
                        }
                        div { class: "p-6 bg-primary/10 border border-primary/50 rounded-lg",
                            p { class: "text-foreground/80 text-sm leading-relaxed", "{AVAILABILITY_NOTE}" }
                        }
                    }
                }
            }
        }
    }
}
