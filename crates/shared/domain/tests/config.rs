use folio_domain::config::{ImagesConfig, LoggingConfig, ServerConfig, SiteConfig, StorageConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 3000);
    assert!(server.ssl.is_none());

    let storage = StorageConfig::default();
    assert_eq!(storage.static_dir, std::path::PathBuf::from("public"));

    let images = ImagesConfig::default();
    assert_eq!(images.remote_patterns.len(), 1);
    assert_eq!(images.remote_patterns[0].protocol, "https");
    assert_eq!(images.remote_patterns[0].hostname, "**.vercel-storage.com");

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
}

#[test]
fn site_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "storage": { "static_dir": "/srv/folio/public" },
        "images": { "remote_patterns": [{ "hostname": "images.example.com" }] },
        "logging": { "level": "debug", "json": true, "directory": "/var/log/folio" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.storage.static_dir, std::path::PathBuf::from("/srv/folio/public"));
    assert_eq!(cfg.images.remote_patterns[0].protocol, "https");
    assert_eq!(cfg.images.remote_patterns[0].hostname, "images.example.com");
    assert!(cfg.logging.json);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: SiteConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.images.remote_patterns.len(), 1);
}

#[test]
fn clones_share_until_mutated() {
    let original = SiteConfig::default();
    let mut edited = original.clone();
    edited.server.port = 4000;

    assert_eq!(original.server.port, 3000);
    assert_eq!(edited.server.port, 4000);
}
