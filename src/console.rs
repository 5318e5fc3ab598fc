//! Submission coordinator.
//!
//! DESIGN
//! ======
//! `Console` owns every component and the per-session scalars (last trace id,
//! start of the current submission). A submission runs validate, guard,
//! POST, render, notify, then refresh history. Only one submission may be in
//! flight: the busy flag is taken with a compare-exchange and released by a
//! guard on every exit path, including a dropped future.
//!
//! ERROR HANDLING
//! ==============
//! Rejections (missing input, already busy) return `Err` before any request
//! is made. Backend failures are not errors of `submit` itself: they come
//! back as `SubmitOutcome::Failed` with the error panel already rendered.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing::{error, info, warn};

use crate::api::BackendClient;
use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::history::History;
use crate::input::InputForm;
use crate::notify::{Level, Notifications};
use crate::render::Renderer;
use crate::samples::{SampleKind, Samples};

pub const SUCCESS_MESSAGE: &str = "Input processed successfully!";

/// What a submission that got past validation produced.
#[derive(Debug)]
pub enum SubmitOutcome {
    Completed {
        trace_id: String,
        html: String,
        history_html: String,
    },
    Failed {
        error: ConsoleError,
        html: String,
    },
}

impl SubmitOutcome {
    /// Fragment for the results area: the result card or the error panel.
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Self::Completed { html, .. } | Self::Failed { html, .. } => html,
        }
    }
}

#[derive(Debug, Default)]
struct Session {
    last_trace_id: Option<String>,
    started_at: Option<Instant>,
}

/// Clears the busy flag when dropped.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Debug)]
pub struct Console {
    client: BackendClient,
    renderer: Arc<Renderer>,
    notifications: Notifications,
    history: History,
    samples: Samples,
    busy: AtomicBool,
    session: Mutex<Session>,
}

impl Console {
    /// Wire up every component from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or a template
    /// fails to compile.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        let client = BackendClient::new(config)?;
        let renderer = Arc::new(Renderer::new()?);
        let notifications = Notifications::new(config.notify_dismiss());
        let history = History::new(client.clone(), Arc::clone(&renderer), notifications.clone());
        let samples = Samples::new(client.clone());

        Ok(Self {
            client,
            renderer,
            notifications,
            history,
            samples,
            busy: AtomicBool::new(false),
            session: Mutex::new(Session::default()),
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[must_use]
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn backend_url(&self) -> &str {
        self.client.base_url()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_trace_id(&self) -> Option<String> {
        self.session().last_trace_id.clone()
    }

    /// When the current (or most recent) submission started.
    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.session().started_at
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A fresh form pre-populated with the given sample.
    pub async fn load_sample(&self, kind: SampleKind) -> InputForm {
        let sample = self.samples.load(kind).await;
        let mut form = InputForm::new();
        form.load_sample(sample.text, kind.document_type());
        form
    }

    /// Run one submission end to end.
    ///
    /// # Errors
    ///
    /// `InputMissing` or `Busy` when the submission is rejected up front
    /// (a warning banner is raised), or `Template` if rendering fails.
    pub async fn submit(&self, form: &InputForm) -> Result<SubmitOutcome, ConsoleError> {
        let submission = match form.validate() {
            Ok(submission) => submission,
            Err(err) => return Err(self.reject(err).await),
        };
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            return Err(self.reject(ConsoleError::Busy).await);
        };

        let started = Instant::now();
        self.session().started_at = Some(started);

        match self.client.process(submission).await {
            Ok(result) => {
                let elapsed_ms = started.elapsed().as_millis();
                self.session().last_trace_id = Some(result.trace_id.clone());
                info!(trace_id = %result.trace_id, elapsed_ms, "submission processed");

                let html = self.renderer.result(&result, elapsed_ms)?;
                self.notifications.push(Level::Success, SUCCESS_MESSAGE).await;
                let history_html = self.history.summary().await?;
                Ok(SubmitOutcome::Completed { trace_id: result.trace_id, html, history_html })
            }
            Err(err) => {
                error!(error = %err, "submission failed");
                self.notifications
                    .push(Level::Danger, format!("Processing failed: {err}"))
                    .await;
                let html = self.renderer.error_panel(&err.to_string())?;
                Ok(SubmitOutcome::Failed { error: err, html })
            }
        }
    }

    async fn reject(&self, err: ConsoleError) -> ConsoleError {
        warn!(error = %err, "submission rejected");
        self.notifications.push(Level::Warning, err.to_string()).await;
        err
    }
}

#[cfg(test)]
#[path = "console_test.rs"]
mod tests;
