//! Desktop shell: the same component tree as the web page, mounted live so
//! reveal, scroll indicators and the contact form run in-process.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use folio::domain::config::ImagesConfig;
use folio::domain::portfolio;
use folio::kernel::ImagePolicy;
use folio::ui::{App, RenderMode};

const VIEWPORT_META: &str = r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    size: LogicalSize<f64>,
    images: ImagePolicy,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self {
            title: portfolio::seo().site_name.to_owned(),
            size: LogicalSize::new(1280.0, 860.0),
            images: ImagePolicy::from_config(&ImagesConfig::default()),
        }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Same allow-list the server applies to remote project screenshots.
    #[must_use]
    pub fn with_images(mut self, images: &ImagesConfig) -> Self {
        self.images = ImagePolicy::from_config(images);
        self
    }

    /// Opens the window and mounts the interactive page. Blocks until it closes.
    pub fn launch(self) {
        tracing::debug!(title = %self.title, "Opening window");

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(self.size);
        let cfg = Config::default().with_window(window).with_custom_head(VIEWPORT_META.into());

        LaunchBuilder::desktop().with_cfg(cfg).with_context(self.images).launch(Root);
    }
}

#[allow(non_snake_case)]
fn Root() -> Element {
    let images = use_context::<ImagePolicy>();
    rsx! {
        App { mode: RenderMode::Interactive, images }
    }
}
