use crate::class::cn;
use crate::hooks::use_reveal;
use crate::motion::Slide;
use crate::motion::reveal::TRANSITION;
use dioxus::prelude::*;
use folio_domain::constants::REVEAL_THRESHOLD;
use folio_domain::{SkillCategory, SkillEntry, portfolio};

/// One skill with its five-dot proficiency meter and keyword tags.
#[component]
pub fn SkillCard(skill: &'static SkillEntry) -> Element {
    rsx! {
        div { class: "group p-4 bg-card rounded-lg border border-border hover:border-primary/50 transition-all hover:bg-card/80 cursor-pointer",
            div { class: "flex items-center justify-between mb-3",
                h4 { class: "font-semibold text-foreground", "{skill.name}" }
                div { class: "flex gap-1", "aria-label": "{skill.proficiency} of 5",
                    for (i, lit) in skill.meter().enumerate() {
                        div {
                            key: "{i}",
                            class: cn([
                                "w-2 h-2 rounded-full transition-colors",
                                if lit { "bg-primary" } else { "bg-border" },
                            ]),
                        }
                    }
                }
            }
            div { class: "flex flex-wrap gap-2",
                for keyword in skill.keywords {
                    span { key: "{keyword}", class: "text-xs bg-primary/10 text-primary px-2 py-1 rounded", "{keyword}" }
                }
            }
        }
    }
}

/// Skills grouped under their category headings, in display order. Empty
/// categories are left out.
#[component]
pub fn Skills() -> Element {
    let reveal = use_reveal(REVEAL_THRESHOLD);
    let shown = reveal.is_revealed();

    let groups = SkillCategory::DISPLAY_ORDER
        .into_iter()
        .map(|category| (category, portfolio::skills_in(category).collect::<Vec<_>>()))
        .filter(|(_, skills)| !skills.is_empty());

    rsx! {
        section { id: "skills", class: "py-20 px-4 max-w-7xl mx-auto",
            div { class: "space-y-12", onmounted: move |ev| reveal.mount(ev),
                div { class: "text-center space-y-4",
                    h2 { class: "text-3xl sm:text-5xl font-bold", "Technical Skills" }
                    p { class: "text-muted-foreground text-lg max-w-2xl mx-auto",
                        "A comprehensive toolkit of technologies and programming languages I use to build solutions"
                    }
                }
                div { class: "space-y-12",
                    for (category, skills) in groups {
                        div { key: "{category}", class: cn([TRANSITION, Slide::Up.state(shown)]),
                            h3 { class: "text-xl font-bold mb-6 text-primary", "{category}" }
                            div { class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-4",
                                for skill in skills {
                                    SkillCard { key: "{skill.name}", skill }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
