use crate::mode::use_render_mode;
use crate::motion::{ScrollSnapshot, ScrollTracker};
use dioxus::prelude::*;

/// Reports `[scrollY, scrollHeight, clientHeight]` now and on every scroll or
/// resize. The handler is parked on `window` so it can be removed again.
const ATTACH_LISTENER: &str = r"
const report = () => {
    const root = document.documentElement;
    dioxus.send([window.scrollY, root.scrollHeight, root.clientHeight]);
};
window.__folioScroll = report;
window.addEventListener('scroll', report, { passive: true });
window.addEventListener('resize', report);
report();
";

const DETACH_LISTENER: &str = r"
if (window.__folioScroll) {
    window.removeEventListener('scroll', window.__folioScroll);
    window.removeEventListener('resize', window.__folioScroll);
    delete window.__folioScroll;
}
";

/// Owns the page's only scroll listener and shares its readings as a
/// `Signal<ScrollSnapshot>` with every descendant.
///
/// Static renders never attach a listener; consumers see the top of the page.
#[component]
pub fn ScrollProvider(children: Element) -> Element {
    let mut snapshot = use_signal(ScrollSnapshot::default);
    use_context_provider(|| snapshot);
    let mode = use_render_mode();

    use_future(move || async move {
        if mode.is_static() {
            return;
        }
        let mut listener = document::eval(ATTACH_LISTENER);
        let mut tracker = ScrollTracker::default();
        loop {
            match listener.recv::<[f64; 3]>().await {
                Ok([offset, scroll_height, client_height]) => {
                    snapshot.set(tracker.observe(offset, scroll_height, client_height));
                }
                Err(err) => {
                    tracing::debug!(?err, "Scroll listener closed");
                    break;
                }
            }
        }
    });

    use_drop(move || {
        if !mode.is_static() {
            _ = document::eval(DETACH_LISTENER);
        }
    });

    rsx! { {children} }
}

/// The latest snapshot published by the enclosing [`ScrollProvider`].
pub fn use_scroll() -> Signal<ScrollSnapshot> {
    use_context::<Signal<ScrollSnapshot>>()
}

/// Smoothly scrolls the window back to offset 0.
pub fn scroll_to_top() {
    _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}
