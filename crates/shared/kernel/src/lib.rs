//! Kernel utilities shared by the apps.
//! Keep this crate lightweight: config loading, the image/header security policy
//! and (behind `server`) the system routes and application state.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use folio_kernel::config::load_config;
//! use folio_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("server"))?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod prelude;
pub mod security;
#[cfg(feature = "server")]
pub mod server;

pub use folio_domain as domain;
pub use security::images::ImagePolicy;
