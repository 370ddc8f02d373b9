use crate::class::cn;
use crate::hooks::use_reveal;
use crate::motion::Slide;
use crate::motion::reveal::TRANSITION;
use dioxus::prelude::*;
use folio_domain::constants::REVEAL_THRESHOLD;
use folio_domain::portfolio;

const CRAFT: &str = "I believe in writing clean, maintainable code with proper documentation. My focus is on \
    creating solutions that are not only technically sound but also user-friendly and performant.";
const OFF_HOURS: &str = "When I'm not coding, I'm learning new technologies, contributing to open-source \
    projects, or exploring emerging web technologies.";

/// Background story, quick stats and the "My Journey" timeline.
#[component]
pub fn About() -> Element {
    let reveal = use_reveal(REVEAL_THRESHOLD);
    let shown = reveal.is_revealed();
    let age = portfolio::profile().age;

    rsx! {
        section { id: "about", class: "py-20 px-4 max-w-7xl mx-auto",
            div { class: "space-y-12", onmounted: move |ev| reveal.mount(ev),
                div { class: "text-center space-y-4",
                    h2 { class: "text-3xl sm:text-5xl font-bold", "About Me" }
                    p { class: "text-muted-foreground text-lg max-w-2xl mx-auto",
                        "A passionate developer who loves creating beautiful and functional web experiences"
                    }
                }
                div { class: "grid md:grid-cols-2 gap-12 items-center",
                    div { class: cn(["space-y-6", TRANSITION, Slide::FromLeft.state(shown)]),
                        div { class: "space-y-4",
                            p { class: "text-foreground/80 leading-relaxed",
                                "At {age} years old, I've developed a deep passion for full-stack web development. \
                                 My journey started with curiosity about how the web works, and now I'm proficient \
                                 in multiple programming languages and frameworks."
                            }
                            p { class: "text-foreground/80 leading-relaxed", "{CRAFT}" }
                            p { class: "text-foreground/80 leading-relaxed", "{OFF_HOURS}" }
                        }
                        div { class: "grid grid-cols-3 gap-4 pt-6",
                            for (i, stat) in portfolio::stats().iter().enumerate() {
                                div { key: "{stat.label}", class: "p-4 bg-card rounded-lg border border-border",
                                    div {
                                        class: cn([
                                            "text-2xl font-bold",
                                            if i % 2 == 0 { "text-primary" } else { "text-accent" },
                                        ]),
                                        "{stat.value}"
                                    }
                                    div { class: "text-sm text-muted-foreground", "{stat.label}" }
                                }
                            }
                        }
                    }
                    div { class: cn(["space-y-8", TRANSITION, "delay-100", Slide::FromRight.state(shown)]),
                        h3 { class: "text-2xl font-bold mb-8", "My Journey" }
                        for entry in portfolio::timeline() {
                            div {
                                key: "{entry.year}",
                                class: "relative pl-8 border-l border-border/50 hover:border-primary/50 transition-colors",
                                div { class: "absolute left-0 top-0 w-4 h-4 bg-primary rounded-full -translate-x-2.5" }
                                div { class: "absolute left-0 top-6 bottom-0 w-px bg-gradient-to-b from-primary/50 to-transparent" }
                                div { class: "space-y-2",
                                    p { class: "text-sm text-primary font-semibold", "{entry.year}" }
                                    h4 { class: "text-lg font-semibold", "{entry.title}" }
                                    p { class: "text-foreground/70 text-sm", "{entry.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
