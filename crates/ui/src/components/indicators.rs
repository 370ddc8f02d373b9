use crate::components::icons::{ARROW_UP, stroked};
use crate::hooks::{scroll_to_top, use_scroll};
use dioxus::prelude::*;

/// Thin bar across the top whose width follows the scroll progress.
#[component]
pub fn ScrollProgress() -> Element {
    let scroll = use_scroll();
    let width = scroll().progress_percent();

    rsx! {
        div {
            class: "fixed top-0 left-0 h-1 bg-gradient-to-r from-primary via-accent to-secondary z-50 transition-all duration-300",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{width:.0}",
            style: "width: {width}%",
        }
    }
}

/// Floating button, shown once the page is scrolled past the fold.
#[component]
pub fn ScrollToTop() -> Element {
    let scroll = use_scroll();
    if !scroll().show_back_to_top() {
        return rsx! {};
    }

    rsx! {
        button {
            r#type: "button",
            class: "fixed bottom-8 right-8 z-40 p-3 bg-primary text-primary-foreground rounded-full shadow-lg hover:opacity-90 transition-opacity animate-fade-in-up",
            "aria-label": "Scroll to top",
            onclick: move |_| scroll_to_top(),
            {stroked(ARROW_UP)}
        }
    }
}
