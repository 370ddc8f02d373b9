use crate::security::images::ImagePolicy;
use axum::extract::FromRef;
use folio_domain::config::SiteConfig;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[folio_derive::folio_error]
pub enum AppStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: SiteConfig,
    pub images: ImagePolicy,
}

/// Shared, cheaply clonable handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<AppState> for SiteConfig {
    fn from_ref(state: &AppState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<AppState> for ImagePolicy {
    fn from_ref(state: &AppState) -> Self {
        state.inner.images.clone()
    }
}

#[derive(Debug, Default)]
pub struct AppStateBuilder {
    config: Option<SiteConfig>,
    images: Option<ImagePolicy>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides the image policy derived from `config.images`.
    #[must_use]
    pub fn images(mut self, images: ImagePolicy) -> Self {
        self.images = Some(images);
        self
    }

    /// # Errors
    /// Returns [`AppStateError::Validation`] when no config was provided.
    pub fn build(self) -> Result<AppState, AppStateError> {
        let config = self.config.ok_or_else(|| AppStateError::Validation {
            message: "SiteConfig not provided".into(),
            context: None,
        })?;
        let images = self.images.unwrap_or_else(|| ImagePolicy::from_config(&config.images));

        Ok(AppState { inner: Arc::new(AppStateInner { config, images }) })
    }
}
