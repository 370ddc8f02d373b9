//! Hooks connecting [`crate::motion`] to the live window.

mod reveal;
mod scroll;

pub use reveal::{RevealHandle, use_reveal};
pub use scroll::{ScrollProvider, scroll_to_top, use_scroll};
