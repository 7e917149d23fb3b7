//! Integration tests for the static asset surface and health check.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

/// Start the server with the given client page path.
async fn start_server_with_index(index_html: PathBuf) -> SocketAddr {
    let state = touchcast_server::state::AppState {
        registry: Arc::new(touchcast_server::relay::registry::RelayRegistry::new()),
        index_html,
    };

    let app = touchcast_server::routes::build_router(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_client_page_served_at_root_and_index_html() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let index_path = tmp_dir.path().join("index.html");
    std::fs::write(&index_path, "<!DOCTYPE html><title>shared canvas</title>")
        .expect("Failed to write test page");
    let addr = start_server_with_index(index_path).await;

    let client = reqwest::Client::new();
    for path in ["/", "/index.html"] {
        let resp = client
            .get(format!("http://{}{}", addr, path))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "GET {} should serve the page", path);
        let body = resp.text().await.unwrap();
        assert!(body.contains("shared canvas"));
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let index_path = tmp_dir.path().join("index.html");
    std::fs::write(&index_path, "<!DOCTYPE html>").expect("Failed to write test page");
    let addr = start_server_with_index(index_path).await;

    let resp = reqwest::get(format!("http://{}/does-not-exist", addr))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.text().await.unwrap(), "Not found");
}

#[tokio::test]
async fn test_unreadable_client_page_is_a_server_error() {
    let addr = start_server_with_index(PathBuf::from("/nonexistent/index.html")).await;

    let resp = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(resp.text().await.unwrap(), "Error loading index.html");
}

#[tokio::test]
async fn test_health_check() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let index_path = tmp_dir.path().join("index.html");
    std::fs::write(&index_path, "<!DOCTYPE html>").expect("Failed to write test page");
    let addr = start_server_with_index(index_path).await;

    let resp = reqwest::get(format!("http://{}/health", addr)).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}
