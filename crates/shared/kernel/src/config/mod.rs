use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `FOLIO__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "FOLIO";

/// Config loading failures.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a typed configuration from a file overlaid with environment variables.
///
/// 1. **Base file**: `path` without extension (e.g. `"server"` finds `server.toml`).
///    Defaults to `"server"` in the working directory. The file is required.
/// 2. **Environment**: variables prefixed with `FOLIO__`; nested keys are separated
///    by double underscores (`FOLIO__IMAGES__REMOTE_PATTERNS` maps to
///    `images.remote_patterns`).
///
/// # Errors
/// * The file cannot be found or parsed.
/// * The merged values do not match the shape of `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::config::SiteConfig;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(body: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("server.toml"), body).expect("write config");
        let base = dir.path().join("server");
        (dir, base)
    }

    #[test]
    #[serial]
    fn loads_file_values() {
        let (_dir, base) = write_config(
            r#"
            [server]
            port = 8081

            [[images.remote_patterns]]
            hostname = "cdn.example.com"
            "#,
        );

        let cfg: SiteConfig = load_config(Some(&base)).expect("config loads");
        assert_eq!(cfg.server.port, 8081);
        assert_eq!(cfg.images.remote_patterns[0].hostname, "cdn.example.com");
        assert_eq!(cfg.storage.static_dir, PathBuf::from("public"));
    }

    #[test]
    #[serial]
    fn missing_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let res: Result<SiteConfig, _> = load_config(Some(dir.path().join("absent")));
        let err = res.expect_err("file is required");
        assert!(matches!(&err, ConfigError::Config { context: Some(c), .. } if c == "Failed to build config"));
    }
}
