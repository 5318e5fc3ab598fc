//! In-process fake backend for tests that exercise the wire.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::{MethodRouter, get, post};
use axum::Json;
use serde_json::Value;

use crate::api::BackendClient;
use crate::config::ConsoleConfig;

/// One multipart field as the fake backend received it.
#[derive(Clone, Debug, Default)]
pub(crate) struct RecordedField {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

pub(crate) type Recorded = Arc<Mutex<Vec<RecordedField>>>;

/// Serve `router` on an ephemeral local port and return its base URL.
pub(crate) async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A local address with nothing listening on it (connection refused).
pub(crate) async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub(crate) fn config_for(url: &str) -> ConsoleConfig {
    ConsoleConfig::default().with_backend_url(url)
}

pub(crate) fn client_for(url: &str) -> BackendClient {
    BackendClient::new(&config_for(url)).unwrap()
}

/// `GET` route that always answers with the given status and JSON body.
pub(crate) fn reply_json(status: StatusCode, body: Value) -> MethodRouter {
    get(move || {
        let body = body.clone();
        async move { (status, Json(body)) }
    })
}

/// `POST /process` that records every multipart field, then answers with
/// the given status and JSON body.
pub(crate) fn process_backend(recorded: Recorded, status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/process",
        post(move |multipart: Multipart| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                let fields = read_fields(multipart).await;
                recorded.lock().unwrap().extend(fields);
                (status, Json(body))
            }
        }),
    )
}

async fn read_fields(mut multipart: Multipart) -> Vec<RecordedField> {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let body = field.text().await.unwrap_or_default();
        fields.push(RecordedField { name, file_name, content_type, body });
    }
    fields
}

/// A successful `/process` body for an Email input.
pub(crate) fn email_success_body(trace_id: &str) -> Value {
    serde_json::json!({
        "success": true,
        "trace_id": trace_id,
        "classification": {
            "format": "Email",
            "intent": "Complaint",
            "confidence_score": 0.873,
            "content_preview": "From: customer@company.com <script>alert(1)</script>"
        },
        "agent_result": {
            "agent_type": "Email",
            "extracted_fields": {
                "sender": "customer@company.com",
                "subject": "Urgent Issue with Recent Order",
                "issue_type": "Product Quality"
            },
            "tone_analysis": { "tone": "escalation" },
            "urgency_level": "high",
            "recommended_action": "escalate_immediate"
        },
        "actions_triggered": {
            "total_actions": 1,
            "successful_actions": 1,
            "failed_actions": 0,
            "actions_triggered": [{
                "action_type": "crm_escalate",
                "success": true,
                "response": { "success": true, "message": "Issue escalated to CRM system" }
            }]
        },
        "message": "Input processed successfully through multi-agent system"
    })
}
