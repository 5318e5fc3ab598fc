//! Result renderer: projects backend responses into HTML fragments.
//!
//! DESIGN
//! ======
//! Rendering is two-stage. `view` turns wire types into display-ready view
//! models (placeholders, percentages, badge classes); handlebars templates
//! then place those values, escaping each one. Larger fragments are built by
//! rendering each section on its own and splicing the finished HTML into the
//! parent with `{{{ }}}`. No backend value ever reaches a triple-stash.
//!
//! Agent sections dispatch on the agent type in `Renderer::agent`, one
//! template per variant. An unrecognized agent renders its heading with an
//! empty body.

pub mod badge;
pub mod templates;
pub mod view;

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::error::ConsoleError;
use crate::notify::Notification;
use crate::types::{AgentResult, ProcessingResult, Trace};
use view::{ActionsView, AgentBody, FormView, HistoryEntryView, TraceDetailView};

/// Everything the full console page shows.
#[derive(Clone, Debug, Default)]
pub struct PageParts {
    pub notifications: String,
    pub form: Option<FormView>,
    pub results: String,
    pub history: String,
    pub detail: String,
}

/// Compiled template registry.
#[derive(Debug)]
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Compile every console template.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Template` if a template fails to parse.
    pub fn new() -> Result<Self, ConsoleError> {
        let mut registry = Handlebars::new();
        for (name, source) in templates::ALL {
            registry
                .register_template_string(name, *source)
                .map_err(|e| ConsoleError::Template(format!("{name}: {e}")))?;
        }
        Ok(Self { registry })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, ConsoleError> {
        Ok(self.registry.render(name, data)?)
    }

    // =========================================================================
    // RESULTS
    // =========================================================================

    /// Full result card for a successful run.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Template` if rendering fails.
    pub fn result(&self, result: &ProcessingResult, elapsed_ms: u128) -> Result<String, ConsoleError> {
        let classification = self.render(
            templates::CLASSIFICATION,
            &view::classification_view(&result.classification),
        )?;
        let agent = self.agent(&result.agent_result)?;
        let actions = self.render(templates::ACTIONS, &ActionsView::from(&result.actions))?;

        self.render(
            templates::RESULT,
            &json!({
                "trace_id": result.trace_id,
                "elapsed_ms": elapsed_ms.to_string(),
                "classification": classification,
                "agent": agent,
                "actions": actions,
            }),
        )
    }

    /// Agent section: heading plus the variant-specific body.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Template` if rendering fails.
    pub fn agent(&self, result: &AgentResult) -> Result<String, ConsoleError> {
        let body = match AgentBody::from_result(result) {
            AgentBody::Email(view) => self.render(templates::AGENT_EMAIL, &view)?,
            AgentBody::Json(view) => self.render(templates::AGENT_JSON, &view)?,
            AgentBody::Pdf(view) => self.render(templates::AGENT_PDF, &view)?,
            AgentBody::Empty => String::new(),
        };
        self.render(
            templates::AGENT,
            &json!({ "label": view::agent_label(result), "body": body }),
        )
    }

    /// "Processing Failed" panel shown in place of results.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Template` if rendering fails.
    pub fn error_panel(&self, message: &str) -> Result<String, ConsoleError> {
        self.render(templates::ERROR_PANEL, &json!({ "message": message }))
    }

    // =========================================================================
    // HISTORY
    // =========================================================================

    /// History list; an empty slice renders the empty-state block.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Template` if rendering fails.
    pub fn history(&self, traces: &[Trace]) -> Result<String, ConsoleError> {
        let entries: Vec<HistoryEntryView> = traces
            .iter()
            .map(|trace| HistoryEntryView::from(&trace.summary()))
            .collect();
        self.render(templates::HISTORY, &json!({ "entries": entries }))
    }

    /// Raw dump of one trace.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Template` if rendering fails.
    pub fn trace_detail(&self, trace: &Trace) -> Result<String, ConsoleError> {
        self.render(templates::TRACE_DETAIL, &TraceDetailView::from(trace))
    }

    // =========================================================================
    // PAGE
    // =========================================================================

    /// Banner stack, newest first. Input is in call order.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Template` if rendering fails.
    pub fn notifications(&self, banners: &[Notification]) -> Result<String, ConsoleError> {
        let newest_first: Vec<&Notification> = banners.iter().rev().collect();
        self.render(templates::NOTIFICATIONS, &json!({ "notifications": newest_first }))
    }

    /// Full HTML document.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Template` if rendering fails.
    pub fn page(&self, parts: &PageParts) -> Result<String, ConsoleError> {
        let form = parts
            .form
            .clone()
            .unwrap_or_else(|| FormView::from(&crate::input::InputForm::new()));
        self.render(
            templates::PAGE,
            &json!({
                "notifications": parts.notifications,
                "form": form,
                "results": parts.results,
                "history": parts.history,
                "detail": parts.detail,
            }),
        )
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
