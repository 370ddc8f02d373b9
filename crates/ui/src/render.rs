use crate::app::{App, AppProps};
use crate::mode::RenderMode;
use dioxus::prelude::*;
use folio_domain::portfolio;
use folio_kernel::ImagePolicy;

/// Site stylesheet, expected in the static directory.
pub const STYLESHEET: &str = "/styles.css";

#[component]
fn Head() -> Element {
    let seo = portfolio::seo();
    let profile = portfolio::profile();
    let title = format!("{} | {}", profile.name, profile.title);

    rsx! {
        head {
            meta { "charset": "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
            title { "{title}" }
            meta { name: "description", content: seo.description }
            meta { name: "author", content: profile.name }
            link { rel: "canonical", href: seo.site_url }
            meta { "property": "og:type", content: "website" }
            meta { "property": "og:title", content: "{title}" }
            meta { "property": "og:description", content: seo.description }
            meta { "property": "og:url", content: seo.site_url }
            meta { "property": "og:site_name", content: seo.site_name }
            meta { name: "twitter:card", content: "summary_large_image" }
            meta { name: "twitter:creator", content: seo.twitter_handle }
            link { rel: "stylesheet", href: STYLESHEET }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PageProps {
    images: ImagePolicy,
}

#[allow(non_snake_case)]
fn Page(props: PageProps) -> Element {
    rsx! {
        html { lang: "en",
            Head {}
            body {
                div { id: "main",
                    App { mode: RenderMode::Static, images: props.images }
                }
            }
        }
    }
}

/// Renders the whole page, `<!DOCTYPE html>` included, as the server sends it.
#[must_use]
pub fn render_page(images: ImagePolicy) -> String {
    let mut dom = VirtualDom::new_with_props(Page, PageProps { images });
    dom.rebuild_in_place();
    format!("<!DOCTYPE html>{}", dioxus_ssr::render(&dom))
}
