use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use rdxenv_server::{AppState, ServerConfig, create_router};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

struct Site {
    _data: TempDir,
    _public: TempDir,
    router: Router,
}

fn write_json(dir: &TempDir, name: &str, value: Value) {
    fs::write(dir.path().join(name), serde_json::to_string(&value).unwrap()).unwrap();
}

fn site() -> Site {
    let data = tempfile::tempdir().unwrap();
    write_json(
        &data,
        "clients.json",
        json!({"clients": [{"id": "acme", "name": "Acme", "shortName": "ACM"}]}),
    );
    write_json(
        &data,
        "projects.json",
        json!({"projects": {
            "acme": [{"description": "Launch", "imageUrl": "/img/a.jpg", "altText": "a"}],
            "ghost": null
        }}),
    );
    write_json(
        &data,
        "copy.json",
        json!({"about": {"title": "About us", "paragraphs": ["We make films."]}}),
    );
    write_json(&data, "hero.json", json!({"hero": {"title": "RDXENV"}}));
    write_json(
        &data,
        "heroConfig.json",
        json!({"minSize": 100, "maxDepth": 2, "ratios": [{"x": 1, "y": 1}]}),
    );
    write_json(
        &data,
        "films.json",
        json!({"filmography": [{"id": "f1", "title": "Night Drive", "year": 2021}]}),
    );
    write_json(&data, "backgroundColour.json", json!({"palette": ["#000000"]}));

    let public = tempfile::tempdir().unwrap();
    fs::write(public.path().join("site.css"), "body { margin: 0; }").unwrap();

    let config = ServerConfig {
        data_dir: data.path().to_path_buf(),
        public_dir: public.path().to_path_buf(),
        ..ServerConfig::default()
    };
    Site {
        _data: data,
        _public: public,
        router: create_router(AppState::new(config)),
    }
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn test_documents_are_passed_through() {
    let site = site();
    let (status, body) = get_json(&site.router, "/api/clients").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clients"][0]["shortName"], "ACM");

    let (status, body) = get_json(&site.router, "/api/hero").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"hero": {"title": "RDXENV"}}));

    let (status, body) = get_json(&site.router, "/api/hero/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["maxDepth"], 2);
}

#[tokio::test]
async fn test_missing_document_is_a_server_error() {
    let site = site();
    let (status, body) = get_json(&site.router, "/api/images").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to load images data"}));
}

#[tokio::test]
async fn test_background_colours_need_colors_array() {
    let site = site();
    let (status, body) = get_json(&site.router, "/api/background-colours").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to load background colour data");
}

#[tokio::test]
async fn test_client_projects_lookup() {
    let site = site();
    let (status, body) = get_json(&site.router, "/api/projects/acme").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projects"][0]["description"], "Launch");

    for unknown in ["/api/projects/nobody", "/api/projects/ghost"] {
        let (status, body) = get_json(&site.router, unknown).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{unknown}");
        assert_eq!(body["error"], "Projects not found for this client");
    }
}

#[tokio::test]
async fn test_index_page_is_rendered_on_the_server() {
    let site = site();
    let (status, html) = get(&site.router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("id=\"hero-section\""));
    assert!(html.contains("id=\"hero-tile-0\""));
    assert!(html.contains("<h2>About us</h2>"));
}

#[tokio::test]
async fn test_filmography_page_lists_films() {
    let site = site();
    let (status, html) = get(&site.router, "/filmography").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Night Drive"));
}

#[tokio::test]
async fn test_static_files_and_index_fallback() {
    let site = site();
    let response = site
        .router
        .clone()
        .oneshot(Request::builder().uri("/site.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );

    let (status, html) = get(&site.router, "/some/client/route").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_config_defaults_and_port_override() {
    let mut config = ServerConfig::default();
    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.viewport.width, 1280.0);

    config.apply_port_override(Some("8080"));
    assert_eq!(config.port, 8080);
    config.apply_port_override(Some("not-a-port"));
    assert_eq!(config.port, 8080);
    config.apply_port_override(None);
    assert_eq!(config.port, 8080);
}

#[test]
fn test_config_file_keeps_defaults_for_absent_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.json");
    fs::write(&path, r#"{"port": 4000, "dataDir": "content"}"#).unwrap();

    let config = ServerConfig::from_file(&path).unwrap();
    assert_eq!(config.port, 4000);
    assert_eq!(config.data_dir, std::path::PathBuf::from("content"));
    assert_eq!(config.host, "0.0.0.0");

    assert!(ServerConfig::from_file(&dir.path().join("missing.json")).is_err());
}
