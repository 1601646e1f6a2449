use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn test_config() -> HostConfig {
    HostConfig {
        host: crate::config::DEFAULT_HOST,
        port: 0,
        site_root: Some(std::env::temp_dir().join("nyumba-missing-site")),
        maps_api_key: None,
    }
}

fn test_router() -> Router {
    let options = LeptosOptions::builder().output_name("nyumba").build();
    router(options, &test_config())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = test_router()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_under_pkg_is_not_found() {
    let response = test_router()
        .oneshot(Request::builder().uri("/pkg/nyumba.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let response = test_router()
        .oneshot(Request::builder().method("POST").uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
