//! # Folio Server
//!
//! Serves the server-rendered portfolio page and its static assets over `Axum`.
//!
//! ## Example
//! ```no_run
//! use folio_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(3000)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

pub mod router;

use anyhow::{Context, Result};
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use folio::domain::config::{LoggingConfig, SiteConfig, SslConfig};
use folio::kernel::prelude::AppState;
use folio::kernel::server::health;
use folio_logger::{LevelFilter, Logger};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

/// How long in-flight requests get to finish after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);


/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: SiteConfig,
}

impl ServerBuilder {
    /// Replaces the whole site configuration.
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Overrides the listening port.
    pub const fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Validates the TLS files, if TLS is configured
    /// 2. Checks the static directory (a missing one only disables assets)
    /// 3. Builds the application state, including the image policy
    ///
    /// # Errors
    /// Returns an error if the SSL certificate or key is missing or unreadable,
    /// or if the application state cannot be assembled.
    pub async fn build(self) -> Result<Server> {
        if let Some(ssl) = &self.cfg.server.ssl {
            check_tls_files(ssl)?;
        }

        let static_dir = &self.cfg.storage.static_dir;
        info!(address = %self.cfg.server.socket_addr(), static_dir = %static_dir.display(), "Initializing server");

        if !tokio::fs::try_exists(static_dir).await.unwrap_or(false) {
            warn!(
                static_dir = %static_dir.display(),
                "Static directory not found; only the page and /health will be served"
            );
        }

        let state = AppState::builder()
            .config(self.cfg)
            .build()
            .context("Failed to assemble application state")?;

        Ok(Server { state })
    }
}

/// Both PEM files must exist; a group- or world-readable key only warns.
fn check_tls_files(ssl: &SslConfig) -> Result<()> {
    for (what, path) in [("certificate", &ssl.cert), ("key", &ssl.key)] {
        if !path.exists() {
            anyhow::bail!("TLS {what} not found at: {}", path.display());
        }
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = ssl.key.metadata()?.permissions().mode();
        if mode & 0o077 != 0 {
            warn!(key = %ssl.key.display(), mode = %format!("{mode:o}"), "TLS private key is readable by other users");
        }
    }

    Ok(())
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Serves the site until Ctrl+C or SIGTERM, then drains connections for
    /// up to [`SHUTDOWN_GRACE`].
    ///
    /// # Errors
    /// Returns an error if the listener cannot bind or the TLS material
    /// cannot be loaded.
    pub async fn run(self) -> Result<()> {
        let address = self.state.config.server.socket_addr();
        let ssl = self.state.config.server.ssl.clone();

        health::mark_started();
        let service = router::init(self.state).into_make_service();

        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(drain_on_signal(handle.clone()));

        match ssl {
            Some(ssl) => {
                let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                    .await
                    .context("Failed to load TLS certificate or key")?;
                info!(%address, "Serving https://{address}");
                axum_server::bind_rustls(address, tls).handle(handle).serve(service).await
            }
            None => {
                info!(%address, "Serving http://{address}");
                axum_server::bind(address).handle(handle).serve(service).await
            }
        }
        .with_context(|| format!("Server on {address} failed"))?;

        info!("Server stopped");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }
}

/// Installs the global subscriber described by the `[logging]` section.
///
/// # Errors
/// Fails on an unknown level name, bad filter directives, an unusable log
/// directory, or when a subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig) -> Result<Logger> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Invalid log level '{}'", cfg.level))?;

    let mut builder = Logger::builder(env!("CARGO_PKG_NAME")).level(level).console(true);
    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(directory) = &cfg.directory {
        builder = builder.file(directory).json(cfg.json);
    }

    builder.init().context("Failed to initialize logging")
}

async fn drain_on_signal(handle: Handle<SocketAddr>) {
    match shutdown_signal().await {
        Ok(name) => {
            info!(signal = name, "Draining connections");
            handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        }
        Err(e) => error!("Shutdown signal handler failed: {e:#}"),
    }
}

/// Resolves with the name of the first shutdown signal received.
async fn shutdown_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?;
        return tokio::select! {
            res = signal::ctrl_c() => res.map(|()| "SIGINT").context("Failed to listen for Ctrl+C"),
            _ = sigterm.recv() => Ok("SIGTERM"),
        };
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.context("Failed to listen for Ctrl+C")?;
        return Ok("Ctrl+C");
    }
}
