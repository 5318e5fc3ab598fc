//! Router assembly for the web console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is rendered on the server. Form posts run the coordinator and
//! answer with the whole page; there is no client-side script. Multipart
//! field names match what the backend itself accepts (`file`, `text_input`,
//! `input_type`) so the same form could be pointed at either.

use axum::Router;
use axum::extract::{DefaultBodyLimit, Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use uuid::Uuid;

use crate::console::SubmitOutcome;
use crate::error::ConsoleError;
use crate::input::{InputForm, Upload};
use crate::render::PageParts;
use crate::render::view::FormView;
use crate::samples::SampleKind;
use crate::state::AppState;
use crate::types::DocumentType;

pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/submit", post(submit))
        .route("/traces/{id}", get(trace_detail))
        .route("/notifications/{id}/dismiss", post(dismiss_notification))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub sample: Option<SampleKind>,
}

async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Response {
    let form = match query.sample {
        Some(kind) => state.console.load_sample(kind).await,
        None => InputForm::new(),
    };
    render_page(&state, &form, String::new(), String::new(), None).await
}

async fn submit(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(message) => {
            warn!(%message, "malformed submission form");
            return (StatusCode::BAD_REQUEST, message).into_response();
        }
    };

    let (results, history) = match state.console.submit(&form).await {
        Ok(SubmitOutcome::Completed { html, history_html, .. }) => (html, Some(history_html)),
        Ok(SubmitOutcome::Failed { html, .. }) => (html, None),
        Err(err) if err.is_rejection() => (String::new(), None),
        Err(err) => return internal_error(&err),
    };
    render_page(&state, &form, results, String::new(), history).await
}

async fn trace_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    // Failure already raised a banner.
    let detail = state.console.history().detail(&id).await.unwrap_or_default();
    render_page(&state, &InputForm::new(), String::new(), detail, None).await
}

async fn dismiss_notification(State(state): State<AppState>, Path(id): Path<Uuid>) -> Redirect {
    state.console.notifications().dismiss(id).await;
    Redirect::to("/")
}

async fn healthz() -> &'static str {
    "ok"
}

// =============================================================================
// HELPERS
// =============================================================================

async fn render_page(
    state: &AppState,
    form: &InputForm,
    results: String,
    detail: String,
    history: Option<String>,
) -> Response {
    match page_html(state, form, results, detail, history).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => internal_error(&err),
    }
}

async fn page_html(
    state: &AppState,
    form: &InputForm,
    results: String,
    detail: String,
    history: Option<String>,
) -> Result<String, ConsoleError> {
    let console = &state.console;
    let history = match history {
        Some(history) => history,
        None => console.history().summary().await?,
    };
    let banners = console.notifications().list().await;
    let notifications = console.renderer().notifications(&banners)?;

    console.renderer().page(&PageParts {
        notifications,
        form: Some(FormView::from(form)),
        results,
        history,
        detail,
    })
}

fn internal_error(err: &ConsoleError) -> Response {
    error!(error = %err, "page render failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}

/// Collect the multipart fields into form state. An empty file part (no file
/// chosen in the browser) counts as no file.
async fn read_form(mut multipart: Multipart) -> Result<InputForm, String> {
    let mut form = InputForm::new();
    let mut upload = None;
    let mut text = String::new();
    let mut input_type: Option<DocumentType> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        let name = field.name().unwrap_or_default().to_owned();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await.map_err(|e| e.to_string())?;
                if !file_name.is_empty() && !bytes.is_empty() {
                    let mut file = Upload::new(file_name, bytes.to_vec());
                    file.content_type = content_type;
                    upload = Some(file);
                }
            }
            "text_input" => text = field.text().await.map_err(|e| e.to_string())?,
            "input_type" => {
                let raw = field.text().await.map_err(|e| e.to_string())?;
                if !raw.trim().is_empty() {
                    input_type = Some(raw.parse()?);
                }
            }
            _ => {}
        }
    }

    if let Some(file) = upload {
        form.select_file(file);
    } else {
        form.enter_text(text);
    }
    // An explicit selection overrides the extension guess.
    if input_type.is_some() {
        form.set_input_type(input_type);
    }
    Ok(form)
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
