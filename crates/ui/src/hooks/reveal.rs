use crate::hooks::use_scroll;
use crate::mode::use_render_mode;
use crate::motion::{RevealTracker, intersection_ratio};
use dioxus::prelude::*;
use std::rc::Rc;

/// Attach with `onmounted: move |ev| reveal.mount(ev)`, read with
/// [`RevealHandle::is_revealed`].
#[allow(missing_debug_implementations)]
#[derive(Clone, Copy, PartialEq)]
pub struct RevealHandle {
    revealed: Signal<bool>,
    element: Signal<Option<Rc<MountedData>>>,
}

impl RevealHandle {
    pub fn mount(mut self, event: MountedEvent) {
        self.element.set(Some(event.data()));
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        (self.revealed)()
    }
}

/// Reveals the mounted element once at least `threshold` of it has been on
/// screen.
///
/// Every scroll snapshot re-measures the element until the tracker fires; after
/// that the effect stops subscribing, which is what disconnects it. Unmounting
/// the component drops the effect and any measurement still in flight.
pub fn use_reveal(threshold: f64) -> RevealHandle {
    let mode = use_render_mode();
    let scroll = use_scroll();
    let mut tracker = use_signal(|| {
        if mode.is_static() { RevealTracker::revealed(threshold) } else { RevealTracker::new(threshold) }
    });
    let mut revealed = use_signal(|| mode.is_static());
    let element = use_signal(|| None::<Rc<MountedData>>);

    use_effect(move || {
        if tracker.peek().is_disconnected() {
            return;
        }
        let viewport = scroll().client_height;
        let Some(node) = element() else {
            return;
        };
        spawn(async move {
            match node.get_client_rect().await {
                Ok(rect) => {
                    let ratio = intersection_ratio(rect.origin.y, rect.size.height, viewport);
                    if tracker.write().observe(ratio) {
                        revealed.set(true);
                    }
                }
                Err(err) => tracing::debug!(?err, "Could not measure element"),
            }
        });
    });

    RevealHandle { revealed, element }
}
