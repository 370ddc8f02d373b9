//! Facade crate for the portfolio.
//! Re-exports the domain, kernel and view crates so the apps depend on one crate.
//! Keep this crate thin: it composes the others and holds no logic of its own.
//!
//! ## Usage
//! - `server`: kernel HTTP plumbing plus the server-side page renderer.
//! - `client`: the interactive views and the contact feature.

pub use folio_domain as domain;
pub use folio_kernel as kernel;

#[cfg(feature = "client")]
pub use folio_contact as contact;
#[cfg(any(feature = "server", feature = "client"))]
pub use folio_ui as ui;

#[cfg(feature = "server")]
pub mod server {
    pub use folio_ui::render_page;

    pub mod router {
        pub use folio_kernel::server::router::system_router;
    }
}

/// Which platform features this build was compiled with.
pub mod features {
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn enabled_matches_cargo_features() {
        assert_eq!(features::is_enabled("server"), cfg!(feature = "server"));
        assert_eq!(features::is_enabled("client"), cfg!(feature = "client"));
        assert!(!features::is_enabled("auth"));
    }
}
