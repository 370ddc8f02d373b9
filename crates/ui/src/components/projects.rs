use crate::class::cn;
use crate::hooks::use_reveal;
use crate::motion::reveal::TRANSITION;
use crate::motion::{Slide, stagger_delay};
use dioxus::prelude::*;
use folio_domain::constants::REVEAL_THRESHOLD;
use folio_domain::{ProjectEntry, portfolio};
use folio_kernel::ImagePolicy;

/// A project with an expandable "Key Features" list. Every card keeps its own
/// toggle.
#[component]
pub fn ProjectCard(project: &'static ProjectEntry) -> Element {
    let images = use_context::<ImagePolicy>();
    let mut expanded = use_signal(|| false);
    let open = expanded();
    let src = images.resolve(project.image);

    rsx! {
        div {
            class: "group bg-card border border-border rounded-lg overflow-hidden hover:border-primary/50 transition-all hover:shadow-lg hover:shadow-primary/10 flex flex-col h-full",
            "data-project": project.id,
            div { class: "relative h-48 sm:h-64 overflow-hidden bg-muted",
                img {
                    src,
                    alt: project.title,
                    loading: "lazy",
                    class: "absolute inset-0 w-full h-full object-cover group-hover:scale-105 transition-transform duration-300",
                }
                div { class: "absolute inset-0 bg-black/0 group-hover:bg-black/20 transition-colors" }
            }
            div { class: "flex flex-col flex-grow p-6 space-y-4",
                div {
                    h3 { class: "text-xl font-bold mb-2", "{project.title}" }
                    p { class: "text-foreground/70 text-sm leading-relaxed", "{project.description}" }
                }
                div { class: "flex flex-wrap gap-2",
                    for tech in project.technologies {
                        span { key: "{tech}", class: "inline-block px-3 py-1 bg-primary/10 text-primary text-xs rounded-full", "{tech}" }
                    }
                }
                if open {
                    div { class: "space-y-2 border-t border-border pt-4",
                        p { class: "text-xs font-semibold text-muted-foreground uppercase", "Key Features" }
                        ul { class: "space-y-1",
                            for feature in project.features {
                                li { key: "{feature}", class: "text-sm text-foreground/70 flex items-start gap-2",
                                    span { class: "text-primary mt-1", "•" }
                                    span { "{feature}" }
                                }
                            }
                        }
                    }
                }
                div { class: "flex gap-2 mt-auto pt-4",
                    button {
                        r#type: "button",
                        class: "px-3 py-2 text-xs bg-primary/10 text-primary rounded hover:bg-primary/20 transition-colors flex-1",
                        "aria-expanded": if open { "true" } else { "false" },
                        onclick: move |_| expanded.set(!open),
                        if open { "Show Less" } else { "Details" }
                    }
                    a {
                        href: project.github,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "px-3 py-2 text-xs bg-border rounded hover:bg-primary/50 transition-colors",
                        "GitHub"
                    }
                    a {
                        href: project.link,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "px-3 py-2 text-xs bg-primary text-primary-foreground rounded hover:opacity-90 transition-opacity",
                        "Live"
                    }
                }
            }
        }
    }
}

/// Project grid in document order, cascading in once the section shows.
#[component]
pub fn Projects() -> Element {
    let reveal = use_reveal(REVEAL_THRESHOLD);
    let shown = reveal.is_revealed();
    let github = portfolio::social_links()
        .iter()
        .find(|link| link.platform == "GitHub")
        .map_or("https://github.com", |link| link.url);
    let cards = portfolio::projects()
        .iter()
        .enumerate()
        .map(|(i, project)| (project, stagger_delay(i, shown).as_millis()));

    rsx! {
        section { id: "projects", class: "py-20 px-4 max-w-7xl mx-auto",
            div { class: "space-y-12", onmounted: move |ev| reveal.mount(ev),
                div { class: "text-center space-y-4",
                    h2 { class: "text-3xl sm:text-5xl font-bold", "Featured Projects" }
                    p { class: "text-muted-foreground text-lg max-w-2xl mx-auto",
                        "Showcase of projects that demonstrate my full-stack development capabilities and problem-solving skills"
                    }
                }
                div { class: "grid md:grid-cols-2 gap-8",
                    for (project, delay_ms) in cards {
                        div {
                            key: "{project.id}",
                            class: cn([TRANSITION, Slide::Up.state(shown)]),
                            style: "transition-delay: {delay_ms}ms",
                            ProjectCard { project }
                        }
                    }
                }
                div { class: "text-center pt-8",
                    p { class: "text-muted-foreground mb-4", "Want to see more projects?" }
                    a {
                        href: github,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "inline-block px-6 py-3 bg-card border border-primary/50 text-foreground rounded-lg hover:bg-primary/10 transition-colors font-semibold",
                        "View GitHub Profile →"
                    }
                }
            }
        }
    }
}
