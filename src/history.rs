//! History loader: past processing traces.
//!
//! DESIGN
//! ======
//! The list is fetched eagerly (page load and after each successful
//! submission); one trace's full record is fetched only when asked for.
//! A failed list fetch is not surfaced to the operator: it is logged and the
//! empty state is shown. A failed detail fetch raises a danger banner.

use std::sync::Arc;

use tracing::warn;

use crate::api::BackendClient;
use crate::error::ConsoleError;
use crate::notify::{Level, Notifications};
use crate::render::Renderer;

#[derive(Clone, Debug)]
pub struct History {
    client: BackendClient,
    renderer: Arc<Renderer>,
    notifications: Notifications,
}

impl History {
    #[must_use]
    pub fn new(client: BackendClient, renderer: Arc<Renderer>, notifications: Notifications) -> Self {
        Self { client, renderer, notifications }
    }

    /// Rendered trace list, or the empty state when there is nothing to show.
    ///
    /// # Errors
    ///
    /// Only template failures propagate; backend failures degrade to the
    /// empty state.
    pub async fn summary(&self) -> Result<String, ConsoleError> {
        let traces = match self.client.traces().await {
            Ok(traces) => traces,
            Err(err) => {
                warn!(error = %err, "history load failed");
                Vec::new()
            }
        };
        self.renderer.history(&traces)
    }

    /// Rendered detail view for one trace.
    ///
    /// # Errors
    ///
    /// Returns the backend error after raising a danger notification.
    pub async fn detail(&self, trace_id: &str) -> Result<String, ConsoleError> {
        match self.client.trace(trace_id).await {
            Ok(trace) => self.renderer.trace_detail(&trace),
            Err(err) => {
                warn!(%trace_id, error = %err, "trace detail load failed");
                self.notifications
                    .push(Level::Danger, format!("Failed to load trace details: {err}"))
                    .await;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
