//! HTTP client for the triage backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Four endpoints are consumed: `POST /process`, `GET /memory/traces`,
//! `GET /memory/trace/{id}` and the static `/samples/*` payloads. Every
//! request carries the configured total and connect timeouts; nothing is
//! retried.
//!
//! ERROR HANDLING
//! ==============
//! `/process` checks the HTTP status before reading the body, so any non-2xx
//! becomes `Transport`. The memory endpoints decode the envelope first: the
//! backend reports failures there as `{success: false, error}` with a 500,
//! and that message is more useful than the status line.

use reqwest::Url;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::input::{Payload, Submission};
use crate::types::{DocumentType, ProcessResponse, ProcessingResult, Trace, TraceResponse, TracesResponse};

pub const PROCESS_PATH: &[&str] = &["process"];
pub const TRACES_PATH: &[&str] = &["memory", "traces"];

/// Typed client over the backend's JSON endpoints.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns `HttpClientBuild` if the base URL is invalid or reqwest cannot
    /// construct its client.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        let base_url = Url::parse(&config.backend_url).map_err(|e| {
            ConsoleError::HttpClientBuild(format!("invalid backend URL '{}': {e}", config.backend_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConsoleError::HttpClientBuild(format!(
                "backend URL '{}' cannot be a base",
                config.backend_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| ConsoleError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Submit one input to `POST /process`.
    ///
    /// # Errors
    ///
    /// `Transport` on non-2xx, `Request`/`Timeout` when no response arrives,
    /// `Parse` on an undecodable body, `Application` when the body reports
    /// `success: false`.
    pub async fn process(&self, submission: Submission) -> Result<ProcessingResult, ConsoleError> {
        let url = self.endpoint(PROCESS_PATH);
        let form = multipart_form(submission)?;

        tracing::debug!(%url, "submitting input");
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ConsoleError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::transport(status));
        }

        let body = response
            .json::<ProcessResponse>()
            .await
            .map_err(|e| ConsoleError::from_reqwest(&e))?;
        body.into_result()
    }

    /// List stored traces from `GET /memory/traces`.
    ///
    /// # Errors
    ///
    /// See the module docs; `Application` carries the backend's message.
    pub async fn traces(&self) -> Result<Vec<Trace>, ConsoleError> {
        let body: TracesResponse = self.get_envelope(self.endpoint(TRACES_PATH)).await?;
        body.into_traces()
    }

    /// Fetch one trace from `GET /memory/trace/{id}`.
    ///
    /// # Errors
    ///
    /// See the module docs; a missing trace surfaces as `Application`.
    pub async fn trace(&self, trace_id: &str) -> Result<Trace, ConsoleError> {
        let body: TraceResponse = self
            .get_envelope(self.endpoint(&["memory", "trace", trace_id]))
            .await?;
        body.into_trace()
    }

    /// Fetch a static text resource relative to the backend root.
    ///
    /// # Errors
    ///
    /// `Transport` on non-2xx, `Request`/`Timeout` when no response arrives.
    pub async fn fetch_text(&self, segments: &[&str]) -> Result<String, ConsoleError> {
        let url = self.endpoint(segments);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ConsoleError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::transport(status));
        }
        response.text().await.map_err(|e| ConsoleError::from_reqwest(&e))
    }

    async fn get_envelope<T: DeserializeOwned>(&self, url: Url) -> Result<T, ConsoleError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ConsoleError::from_reqwest(&e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ConsoleError::from_reqwest(&e))?;

        match serde_json::from_slice::<T>(&bytes) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(ConsoleError::transport(status)),
            Err(e) => Err(ConsoleError::Parse(e.to_string())),
        }
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Encode a submission as the backend form expects: `input_type` always,
/// plus either a `file` part or a `text_input` field.
fn multipart_form(submission: Submission) -> Result<Form, ConsoleError> {
    let input_type = submission.input_type.map(DocumentType::tag).unwrap_or_default();
    let form = Form::new().text("input_type", input_type);

    match submission.payload {
        Payload::File(upload) => {
            let mime = upload.mime().to_owned();
            let part = Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&mime)
                .map_err(|e| ConsoleError::Request(format!("invalid content type '{mime}': {e}")))?;
            Ok(form.part("file", part))
        }
        Payload::Text(text) => Ok(form.text("text_input", text)),
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
