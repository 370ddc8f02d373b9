use dioxus::prelude::*;

/// How the tree is being rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// One-shot HTML for the server. No script runs, so everything that would
    /// animate in starts in its final state.
    Static,
    /// Live tree with scroll listeners and event handlers.
    #[default]
    Interactive,
}

impl RenderMode {
    #[must_use]
    pub const fn is_static(self) -> bool {
        matches!(self, Self::Static)
    }
}

/// The mode provided by [`crate::App`]; interactive outside of it.
pub fn use_render_mode() -> RenderMode {
    try_use_context::<RenderMode>().unwrap_or_default()
}
