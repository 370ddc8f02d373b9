use anyhow::Context;
use folio::domain::config::SiteConfig;
use folio::kernel::config::load_config;
use folio_server::{Server, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: SiteConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = init_logging(&cfg.logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Configuration loaded");

    Server::builder().config(cfg).build().await?.run().await
}
