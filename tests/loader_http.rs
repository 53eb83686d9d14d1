// tests/loader_http.rs
//
// HTTP-level tests for the content loader against a throwaway axum "CMS"
// bound to an ephemeral localhost port.
//
// Covered:
// - 200 with v4 (attributes) and flat records
// - 403 / 404 → provisioning placeholder (success)
// - 500, malformed body, connection refused → error + fallback
// - empty `data` → success + fallback
// - request headers (JSON content type)

use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use portfolio_cms::{
    About, Article, CmsConfig, ContentLoader, GlobalSetting, Hero, LoadStatus, Origin, Project,
    Section,
};

async fn spawn_cms(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock cms");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock cms");
    });
    format!("http://{addr}")
}

fn loader_for(base: &str) -> ContentLoader {
    ContentLoader::from_config(CmsConfig::new(base))
}

#[tokio::test]
async fn hero_v4_payload_is_normalized() {
    let router = Router::new().route(
        "/api/hero",
        get(|| async {
            Json(json!({
                "data": {
                    "id": 1,
                    "attributes": {
                        "greeting": "Hey, I'm",
                        "name": "Mara",
                        "description": "Designer who codes.",
                        "resumeLink": "/cv.pdf",
                        "roles": { "data": [
                            { "id": 1, "attributes": { "name": "UI" } },
                            { "id": 2, "attributes": { "name": "Frontend" } }
                        ]},
                        "profileImage": { "data": { "attributes": { "url": "/uploads/mara.jpg" } } }
                    }
                },
                "meta": {}
            }))
        }),
    );
    let base = spawn_cms(router).await;

    let out = loader_for(&base).load_section::<Hero>().await;
    assert_eq!(out.status, LoadStatus::Success);
    assert_eq!(out.origin, Origin::Remote);
    assert_eq!(out.content.name, "Mara");
    assert_eq!(out.content.roles, vec!["UI", "Frontend"]);
    assert_eq!(out.content.profile_image, format!("{base}/uploads/mara.jpg"));
}

#[tokio::test]
async fn flat_articles_come_back_newest_first() {
    let router = Router::new().route(
        "/api/articles",
        get(|| async {
            Json(json!({ "data": [
                { "id": 1, "title": "Aug", "slug": "aug", "publishDate": "2024-08-05T00:00:00.000Z" },
                { "id": 2, "title": "Oct", "slug": "oct", "publishDate": "2024-10-15T00:00:00.000Z",
                  "coverImage": { "url": "https://cdn.example/oct.png" } },
                { "id": 3, "title": "Sep", "slug": "sep", "publishDate": "2024-09-22T00:00:00.000Z" }
            ]}))
        }),
    );
    let base = spawn_cms(router).await;

    let out = loader_for(&base).load_section::<Vec<Article>>().await;
    assert_eq!(out.status, LoadStatus::Success);
    let slugs: Vec<_> = out.content.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["oct", "sep", "aug"]);
    assert_eq!(out.content[0].img, "https://cdn.example/oct.png");
    assert_eq!(out.content[1].img, "/assets/blog/default.jpg");
}

#[tokio::test]
async fn forbidden_collection_is_placeholder_success() {
    let router = Router::new().route(
        "/api/about",
        get(|| async { (StatusCode::FORBIDDEN, Json(json!({ "data": null }))) }),
    );
    let base = spawn_cms(router).await;

    let out = loader_for(&base).load_section::<About>().await;
    assert!(out.status.is_success(), "403 should count as success: {:?}", out.status);
    let LoadStatus::Provisioning(note) = &out.status else {
        panic!("expected provisioning, got {:?}", out.status);
    };
    assert!(note.contains("permissions pending"), "note: {note}");
    assert_eq!(out.origin, Origin::Placeholder);
    assert_eq!(out.content, About::fallback());
}

#[tokio::test]
async fn missing_collection_is_placeholder_success() {
    // Empty router: every path is a 404.
    let base = spawn_cms(Router::new()).await;

    let out = loader_for(&base).load_section::<GlobalSetting>().await;
    let LoadStatus::Provisioning(note) = &out.status else {
        panic!("expected provisioning, got {:?}", out.status);
    };
    assert!(note.contains("global-setting"), "note: {note}");
    assert_eq!(out.content.site_description, *note);
}

#[tokio::test]
async fn server_error_is_error_and_keeps_fallback() {
    let router = Router::new().route(
        "/api/projects",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_cms(router).await;

    let out = loader_for(&base).load_section::<Vec<Project>>().await;
    assert_eq!(
        out.status,
        LoadStatus::Error("API error: 500 Internal Server Error".to_string())
    );
    assert_eq!(out.origin, Origin::Fallback);
    assert_eq!(out.content, <Vec<Project> as Section>::fallback());
}

#[tokio::test]
async fn empty_collection_is_success_with_fallback() {
    let router = Router::new().route(
        "/api/projects",
        get(|| async { Json(json!({ "data": [] })) }),
    );
    let base = spawn_cms(router).await;

    let out = loader_for(&base).load_section::<Vec<Project>>().await;
    assert_eq!(out.status, LoadStatus::Success);
    assert_eq!(out.origin, Origin::Fallback);
    assert_eq!(out.content.len(), 5);
}

#[tokio::test]
async fn malformed_body_is_error_with_fallback() {
    let router = Router::new().route("/api/hero", get(|| async { "<html>not json</html>" }));
    let base = spawn_cms(router).await;

    let out = loader_for(&base).load_section::<Hero>().await;
    assert!(matches!(out.status, LoadStatus::Error(_)), "{:?}", out.status);
    assert_eq!(out.content, Hero::fallback());
}

#[tokio::test]
async fn connection_refused_is_error_with_fallback() {
    // Grab a free port, then close it again.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let out = loader_for(&format!("http://{addr}"))
        .load_section::<About>()
        .await;
    let LoadStatus::Error(detail) = &out.status else {
        panic!("expected error, got {:?}", out.status);
    };
    assert!(detail.starts_with("transport error"), "detail: {detail}");
    assert_eq!(out.content, About::fallback());
}

#[tokio::test]
async fn request_is_sent_as_json() {
    let router = Router::new().route(
        "/api/about",
        get(|headers: HeaderMap| async move {
            let ct = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if ct != "application/json" {
                return (StatusCode::BAD_REQUEST, Json(Value::Null));
            }
            (
                StatusCode::OK,
                Json(json!({ "data": { "id": 1, "title": "About", "content": "Hi" } })),
            )
        }),
    );
    let base = spawn_cms(router).await;

    let out = loader_for(&base).load_section::<About>().await;
    assert_eq!(out.status, LoadStatus::Success);
    assert_eq!(out.content.title, "About");
}
