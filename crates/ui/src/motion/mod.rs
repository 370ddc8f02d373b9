//! DOM-free motion logic: when a section counts as revealed and what the
//! scroll position means for the page chrome.

pub mod reveal;
pub mod scroll;

pub use reveal::{RevealTracker, Slide, intersection_ratio, stagger_delay};
pub use scroll::{ScrollDirection, ScrollSnapshot, ScrollTracker};
