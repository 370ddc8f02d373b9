pub use crate::security::images::ImagePolicy;
#[cfg(feature = "server")]
pub use crate::server::{AppState, AppStateBuilder};
pub use folio_domain::config::SiteConfig;
