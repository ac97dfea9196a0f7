//! Router-level behaviour: base path nesting and flag gating

mod common;

use crate::common::{TestApp, TestOptions};

use pa_config::FeaturesConfig;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_routes_nest_under_base_path() {
    let app = TestApp::new().await;

    let (nested, _) = app.send(get("/openedx_plugin/api/version/")).await;
    let (root, _) = app.send(get("/version/")).await;

    assert_eq!(nested, StatusCode::OK);
    assert_eq!(root, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_base_path_mounts_at_root() {
    let app = TestApp::with_options(TestOptions {
        base_path: String::new(),
        ..TestOptions::default()
    })
    .await;

    let (status, _) = app.send(get("/users/test/")).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_all_flags_off_keeps_version_only() {
    let app = TestApp::with_options(TestOptions {
        features: FeaturesConfig {
            api_users: false,
            api_profile_images: false,
            api_account: false,
        },
        ..TestOptions::default()
    })
    .await;

    let (version, _) = app.send(get("/openedx_plugin/api/version/")).await;
    let (users, _) = app.send(get("/openedx_plugin/api/users/test/")).await;
    let (account, _) = app
        .send(get("/openedx_plugin/api/users/account/delete/"))
        .await;

    assert_eq!(version, StatusCode::OK);
    assert_eq!(users, StatusCode::NOT_FOUND);
    assert_eq!(account, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/openedx_plugin/api/version/")
        .body(Body::empty())
        .unwrap();
    let (status, _) = app.send(request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
