use dioxus::prelude::*;

const ORB: &str = "absolute w-80 h-80 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-pulse";

/// Decorative gradient orbs behind the page.
#[component]
pub fn AnimatedBackground() -> Element {
    rsx! {
        div { class: "fixed inset-0 pointer-events-none overflow-hidden", "aria-hidden": "true",
            div { class: "{ORB} top-0 -left-40 bg-primary/20" }
            div { class: "{ORB} top-40 -right-40 bg-accent/20 animation-delay-2000" }
            div { class: "{ORB} -bottom-40 left-40 bg-secondary/20 animation-delay-4000" }
        }
    }
}
