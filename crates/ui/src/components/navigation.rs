use crate::class::cn;
use crate::hooks::use_scroll;
use dioxus::prelude::*;
use folio_domain::constants::{ANCHOR_CONTACT, NAV_ITEMS};
use folio_domain::portfolio;

const LINK: &str = "text-foreground/70 hover:text-primary transition-colors text-sm font-medium";
const BAR: &str = "w-6 h-0.5 bg-foreground transition-all";

/// Fixed header: initials, section links, call to action and the mobile menu.
#[component]
pub fn Navigation() -> Element {
    let scroll = use_scroll();
    let mut menu_open = use_signal(|| false);

    let solid = scroll().nav_is_solid();
    let open = menu_open();
    let initials = portfolio::profile().initials();

    rsx! {
        nav {
            class: cn([
                "fixed top-0 w-full z-50 transition-all duration-300",
                if solid { "bg-card/80 backdrop-blur-lg border-b border-border" } else { "bg-transparent" },
            ]),
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between items-center h-16",
                    a {
                        href: "/",
                        class: "font-bold text-lg bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent",
                        "{initials}"
                    }
                    div { class: "hidden md:flex gap-8",
                        for (label, href) in NAV_ITEMS {
                            a { key: "{href}", href, class: LINK, "{label}" }
                        }
                    }
                    div { class: "hidden md:flex",
                        a {
                            href: ANCHOR_CONTACT,
                            class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:opacity-90 transition-opacity text-sm font-medium",
                            "Get In Touch"
                        }
                    }
                    button {
                        class: "md:hidden flex flex-col gap-1.5",
                        "aria-label": "Toggle menu",
                        "aria-expanded": if open { "true" } else { "false" },
                        onclick: move |_| menu_open.set(!open),
                        div { class: cn([BAR, if open { "rotate-45 translate-y-2" } else { "" }]) }
                        div { class: cn([BAR, if open { "opacity-0" } else { "" }]) }
                        div { class: cn([BAR, if open { "-rotate-45 -translate-y-2" } else { "" }]) }
                    }
                }
                if open {
                    div { class: "md:hidden border-t border-border pb-4",
                        for (label, href) in NAV_ITEMS {
                            a {
                                key: "{href}",
                                href,
                                class: cn(["block py-3", LINK]),
                                onclick: move |_| menu_open.set(false),
                                "{label}"
                            }
                        }
                        a {
                            href: ANCHOR_CONTACT,
                            class: "block mt-4 px-4 py-2 bg-primary text-primary-foreground rounded-lg text-center text-sm font-medium",
                            onclick: move |_| menu_open.set(false),
                            "Get In Touch"
                        }
                    }
                }
            }
        }
    }
}
