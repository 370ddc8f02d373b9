use chrono::{Datelike, Local};
use dioxus::prelude::*;
use folio_domain::constants::NAV_ITEMS;
use folio_domain::portfolio;

const LINK: &str = "text-sm text-foreground/70 hover:text-primary transition-colors";

#[component]
pub fn Footer() -> Element {
    let profile = portfolio::profile();
    let initials = profile.initials();
    let year = Local::now().year();

    rsx! {
        footer { class: "border-t border-border py-12 px-4 bg-card/50",
            div { class: "max-w-7xl mx-auto",
                div { class: "grid md:grid-cols-3 gap-8 mb-8",
                    div {
                        a {
                            href: "/",
                            class: "font-bold text-lg bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent",
                            "{initials}"
                        }
                        p { class: "text-sm text-muted-foreground mt-2 max-w-xs",
                            "{profile.name} - {profile.title} specializing in modern web technologies."
                        }
                    }
                    div {
                        h4 { class: "font-semibold mb-4", "Quick Links" }
                        ul { class: "space-y-2",
                            for (label, href) in NAV_ITEMS {
                                li { key: "{href}",
                                    a { href, class: LINK, "{label}" }
                                }
                            }
                        }
                    }
                    div {
                        h4 { class: "font-semibold mb-4", "Resources" }
                        ul { class: "space-y-2",
                            for link in portfolio::social_links() {
                                li { key: "{link.url}",
                                    a {
                                        href: link.url,
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: LINK,
                                        "{link.platform}"
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "border-t border-border my-8" }
                div { class: "flex flex-col sm:flex-row justify-between items-center gap-4",
                    p { class: "text-sm text-muted-foreground",
                        "© {year} {profile.name}. All rights reserved."
                    }
                    p { class: "text-sm text-muted-foreground",
                        "Built with "
                        span { class: "text-primary font-semibold", "Rust" }
                        ", "
                        span { class: "text-primary font-semibold", "Dioxus" }
                        " and "
                        span { class: "text-primary font-semibold", "Axum" }
                    }
                }
            }
        }
    }
}
