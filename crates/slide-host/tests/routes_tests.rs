use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use slide_host::{router, HostConfig};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX_HTML: &str = "<!doctype html><title>slide demo</title>";
const SLIDE_CSS: &str = ".slide__item { flex: none; }";

fn public_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("index.html"), INDEX_HTML).expect("write index");
    fs::create_dir(dir.path().join("css")).expect("mkdir css");
    fs::write(dir.path().join("css/slide.css"), SLIDE_CSS).expect("write css");
    dir
}

fn config_for(dir: &TempDir) -> HostConfig {
    HostConfig {
        public_dir: dir.path().to_path_buf(),
        ..HostConfig::default()
    }
}

async fn get(config: &HostConfig, path: &str) -> (StatusCode, String) {
    let response = router(config)
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect body")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn root_serves_the_demo_page() {
    let dir = public_dir();
    let (status, body) = get(&config_for(&dir), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn assets_resolve_under_public_dir() {
    let dir = public_dir();
    let (status, body) = get(&config_for(&dir), "/css/slide.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SLIDE_CSS);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let dir = public_dir();
    let (status, _) = get(&config_for(&dir), "/js/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn default_config_listens_on_port_3000() {
    let config = HostConfig::default();
    assert_eq!(config.addr.port(), 3000);
    assert!(config.index_path().ends_with("public/index.html"));
}
