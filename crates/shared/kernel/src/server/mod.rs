//! HTTP plumbing shared by the server app.

pub mod health;
pub mod router;
pub mod state;

pub use state::{AppState, AppStateBuilder, AppStateError};
