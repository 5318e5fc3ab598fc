use super::*;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use serde_json::json;

use crate::test_support::{client_for, reply_json, spawn_backend, unreachable_backend};

fn history_for(url: &str) -> History {
    History::new(
        client_for(url),
        Arc::new(Renderer::new().unwrap()),
        Notifications::new(Duration::from_secs(5)),
    )
}

#[tokio::test]
async fn summary_lists_traces() {
    let router = Router::new().route(
        "/memory/traces",
        reply_json(
            StatusCode::OK,
            json!({
                "success": true,
                "traces": [{
                    "trace_id": "t-1",
                    "status": "completed",
                    "classification": { "format": "PDF", "intent": "Regulation" },
                    "agent_result": { "agent_type": "PDF" },
                    "action_result": { "actions_triggered": [], "success_count": 0, "failure_count": 0 }
                }]
            }),
        ),
    );
    let url = spawn_backend(router).await;

    let html = history_for(&url).summary().await.unwrap();
    assert!(html.contains("t-1"));
    assert!(html.contains(r#"<span class="badge bg-danger">PDF</span>"#));
    assert!(html.contains("Agent: PDF"));
}

#[tokio::test]
async fn summary_empty_list_shows_empty_state() {
    let router = Router::new().route(
        "/memory/traces",
        reply_json(StatusCode::OK, json!({ "success": true, "traces": [] })),
    );
    let url = spawn_backend(router).await;

    let html = history_for(&url).summary().await.unwrap();
    assert!(html.contains("No processing history yet"));
}

#[tokio::test]
async fn summary_failure_shows_empty_state_without_banner() {
    let url = unreachable_backend().await;
    let history = history_for(&url);

    let html = history.summary().await.unwrap();
    assert!(html.contains("No processing history yet"));
    assert!(history.notifications.list().await.is_empty());
}

#[tokio::test]
async fn detail_renders_trace() {
    let router = Router::new().route(
        "/memory/trace/t-7",
        reply_json(
            StatusCode::OK,
            json!({ "success": true, "trace": { "trace_id": "t-7", "classification": { "format": "Email" } } }),
        ),
    );
    let url = spawn_backend(router).await;

    let html = history_for(&url).detail("t-7").await.unwrap();
    assert!(html.contains("Trace Details: t-7"));
    assert!(html.contains("&quot;format&quot;: &quot;Email&quot;"));
}

#[tokio::test]
async fn detail_failure_raises_danger_banner() {
    let router = Router::new().route(
        "/memory/trace/missing",
        reply_json(StatusCode::OK, json!({ "success": false, "error": "Trace not found" })),
    );
    let url = spawn_backend(router).await;
    let history = history_for(&url);

    let err = history.detail("missing").await.unwrap_err();
    assert_eq!(err.to_string(), "Trace not found");

    let banners = history.notifications.list().await;
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].level, Level::Danger);
    assert_eq!(banners[0].message, "Failed to load trace details: Trace not found");
}
