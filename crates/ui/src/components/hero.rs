use crate::class::cn;
use crate::components::icons::{ARROW_DOWN, stroked};
use crate::mode::use_render_mode;
use crate::motion::Slide;
use crate::motion::reveal::TRANSITION;
use dioxus::prelude::*;
use folio_domain::constants::{ANCHOR_CONTACT, ANCHOR_PROJECTS};
use folio_domain::portfolio;

const BADGE: &str = "inline-block px-4 py-2 bg-card border border-border rounded-full text-sm hover:border-primary/50 transition-colors";

/// Landing section. Greets with the first name only and animates in on mount.
#[component]
pub fn Hero() -> Element {
    let mode = use_render_mode();
    let mut loaded = use_signal(|| mode.is_static());
    use_effect(move || loaded.set(true));

    let profile = portfolio::profile();
    let first_name = profile.first_name();
    let step = |delay: &'static str| cn([TRANSITION, delay, Slide::Rise.state(loaded())]);

    rsx! {
        section { class: "min-h-screen flex items-center justify-center pt-16 px-4 relative overflow-hidden",
            div { class: "absolute inset-0 pointer-events-none",
                div { class: "absolute top-20 left-10 w-72 h-72 bg-primary/10 rounded-full blur-3xl opacity-20 animate-float" }
                div { class: "absolute bottom-20 right-10 w-96 h-96 bg-accent/10 rounded-full blur-3xl opacity-20 animate-float animation-delay-2000" }
            }
            div { class: "relative z-10 max-w-4xl mx-auto text-center",
                div { class: step(""),
                    p { class: "text-muted-foreground text-sm uppercase tracking-wider mb-4", "Hello, Welcome" }
                }
                h1 { class: cn(["text-4xl sm:text-5xl lg:text-7xl font-bold mb-6", &step("delay-100")]),
                    span { class: "text-foreground", "I'm " }
                    span { class: "text-gradient", "{first_name}" }
                }
                p { class: cn(["text-xl sm:text-2xl text-muted-foreground mb-8", &step("delay-200")]),
                    "{profile.title}"
                }
                p {
                    class: cn([
                        "text-base sm:text-lg text-foreground/80 max-w-2xl mx-auto mb-12 leading-relaxed",
                        &step("delay-300"),
                    ]),
                    "{profile.bio}"
                }
                div { class: cn(["flex flex-wrap justify-center gap-3 mb-12", &step("delay-400")]),
                    span { class: BADGE,
                        span { class: "text-primary font-semibold", "{profile.age} years old" }
                        " • Developer"
                    }
                    span { class: BADGE, "Full Stack • Open Source" }
                }
                div { class: cn(["flex flex-col sm:flex-row gap-4 justify-center", &step("delay-500")]),
                    a {
                        href: ANCHOR_PROJECTS,
                        class: "px-8 py-3 bg-primary text-primary-foreground rounded-lg font-semibold hover:opacity-90 transition-opacity hover-scale",
                        "View My Work"
                    }
                    a {
                        href: ANCHOR_CONTACT,
                        class: "px-8 py-3 bg-card border border-border text-foreground rounded-lg font-semibold hover:border-primary/50 transition-colors hover-scale",
                        "Contact Me"
                    }
                }
            }
            div { class: "absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-muted-foreground",
                {stroked(ARROW_DOWN)}
            }
        }
    }
}
