//! # Folio views
//!
//! The portfolio page as a tree of Dioxus components, shared by the server
//! (rendered to HTML once per request, see [`render_page`]) and the desktop
//! shell (mounted live, see [`App`]).
//!
//! Behaviour that can be reasoned about without a DOM lives in [`motion`]; the
//! hooks in [`hooks`] connect it to the window.

mod app;
mod class;
pub mod components;
pub mod hooks;
mod mode;
pub mod motion;
mod render;

pub use crate::app::{App, AppProps};
pub use crate::class::cn;
pub use crate::mode::{RenderMode, use_render_mode};
pub use crate::render::{STYLESHEET, render_page};
