use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use folio::domain::config::SiteConfig;
use folio::kernel::prelude::AppState;
use folio_server::router;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

fn app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("styles.css"), "body { margin: 0; }").expect("write asset");

    let mut cfg = SiteConfig::default();
    cfg.storage.static_dir = dir.path().to_path_buf();
    let state = AppState::builder().config(cfg).build().expect("state");

    (dir, router::init(state))
}

async fn get(app: Router, path: &str) -> axum::response::Response {
    app.oneshot(Request::get(path).body(Body::empty()).expect("request")).await.expect("response")
}

async fn body_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}

#[tokio::test]
async fn index_serves_rendered_page() {
    let (_dir, app) = app();
    let res = get(app, "/").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()[header::CONTENT_TYPE].to_str().expect("ascii").starts_with("text/html"));

    let html = body_text(res).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(">Ananda</span>"));
    assert!(html.contains("Ananda Firmansyah"));
}

#[tokio::test]
async fn every_route_carries_security_headers() {
    let (_dir, app) = app();

    for path in ["/", "/health", "/styles.css", "/missing.png"] {
        let res = get(app.clone(), path).await;
        let headers = res.headers();
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff", "{path}");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "SAMEORIGIN", "{path}");
        assert_eq!(headers[header::X_XSS_PROTECTION], "1; mode=block", "{path}");
    }
}

#[tokio::test]
async fn static_assets_come_from_the_configured_directory() {
    let (_dir, app) = app();

    let res = get(app.clone(), "/styles.css").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, "body { margin: 0; }");

    assert_eq!(get(app, "/missing.png").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_is_mounted() {
    let (_dir, app) = app();
    let res = get(app, "/health").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains(r#""status":"up""#));
}

#[tokio::test]
async fn page_is_gzipped_on_request() {
    let (_dir, app) = app();
    let res = app
        .oneshot(
            Request::get("/")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(res.headers()[header::CONTENT_ENCODING], "gzip");
}
