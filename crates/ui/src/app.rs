use crate::components::{
    About, AnimatedBackground, Contact, Footer, Hero, Navigation, Projects, ScrollProgress,
    ScrollToTop, Skills,
};
use crate::hooks::ScrollProvider;
use crate::mode::RenderMode;
use dioxus::prelude::*;
use folio_kernel::ImagePolicy;

#[derive(Props, Debug, Clone, PartialEq)]
pub struct AppProps {
    #[props(default)]
    pub mode: RenderMode,
    /// Decides which project images may be shown.
    #[props(default)]
    pub images: ImagePolicy,
}

/// Root of the page: the chrome, every section in order and the footer.
#[allow(non_snake_case)]
pub fn App(props: AppProps) -> Element {
    use_context_provider(|| props.mode);
    use_context_provider(|| props.images.clone());

    rsx! {
        ScrollProvider {
            AnimatedBackground {}
            ScrollProgress {}
            main { class: "relative min-h-screen bg-background text-foreground",
                Navigation {}
                Hero {}
                About {}
                Skills {}
                Projects {}
                Contact {}
                Footer {}
            }
            ScrollToTop {}
        }
    }
}
