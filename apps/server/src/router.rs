use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use folio::kernel::ImagePolicy;
use folio::kernel::prelude::AppState;
use folio::kernel::security::headers::harden;
use folio::server::render_page;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// The page, the system routes and the static directory as a fallback, with
/// every response hardened.
pub fn init(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.storage.static_dir);

    let router = Router::new()
        .route("/", get(index))
        .merge(folio::server::router::system_router())
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    harden(router)
}

async fn index(State(images): State<ImagePolicy>) -> Html<String> {
    Html(render_page(images))
}
