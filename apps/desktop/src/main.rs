use folio::domain::config::SiteConfig;
use folio::kernel::config::load_config;
use folio_desktop::DesktopApp;
use folio_logger::Logger;

fn main() -> anyhow::Result<()> {
    let _log = Logger::builder(env!("CARGO_PKG_NAME")).console(true).init()?;

    let cfg = load_config::<SiteConfig>(Some("server")).unwrap_or_else(|e| {
        tracing::warn!("No server config, using default image policy: {e}");
        SiteConfig::default()
    });

    tracing::info!("Launching desktop window");
    DesktopApp::new().with_images(&cfg.images).launch();
    Ok(())
}
