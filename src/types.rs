//! Wire schemas for every backend response the console consumes.
//!
//! DESIGN
//! ======
//! The backend owns these shapes; the console only projects them. Envelope
//! fields (`success`, `error`, ids) default on missing or `null`. Everything
//! inside classification, agent and action objects is model-generated and
//! decodes through `lenient`: a missing, `null` or mistyped leaf becomes
//! `None`/empty and is shown as a placeholder instead of failing the whole
//! response.

use serde::de::Error as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ConsoleError;

// =============================================================================
// DOCUMENT TYPE
// =============================================================================

/// Input formats the backend knows how to process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Email")]
    Email,
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "PDF")]
    Pdf,
}

impl DocumentType {
    pub const ALL: [Self; 3] = [Self::Email, Self::Json, Self::Pdf];

    /// Wire tag used by the backend (`format`, `agent_type`, `input_type`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Json => "JSON",
            Self::Pdf => "PDF",
        }
    }

    /// Exact match on the backend's wire tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    /// Case-insensitive parse for user-typed values (CLI flags, form fields).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown input type '{trimmed}' (expected Email, JSON or PDF)"))
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Backend's format/intent/confidence judgment about the raw input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classification {
    #[serde(deserialize_with = "lenient")]
    pub format: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub intent: Option<String>,
    /// Confidence in `[0, 1]`.
    #[serde(deserialize_with = "lenient")]
    pub confidence_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub content_preview: Option<String>,
}

// =============================================================================
// AGENT RESULTS
// =============================================================================

/// Per-format agent output, keyed by `agent_type`.
///
/// Unrecognized or missing tags land in `Unknown` so a new backend agent
/// renders as an empty section instead of a decode failure.
#[derive(Clone, Debug, PartialEq)]
pub enum AgentResult {
    Email(EmailResult),
    Json(JsonResult),
    Pdf(PdfResult),
    Unknown { agent_type: Option<String> },
}

impl Default for AgentResult {
    fn default() -> Self {
        Self::Unknown { agent_type: None }
    }
}

impl AgentResult {
    /// Parse from a raw JSON value, dispatching on `agent_type`.
    ///
    /// # Errors
    ///
    /// Returns an error when the tag is recognized but the body is not an
    /// object. Mistyped leaf fields never fail; they decode as absent.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let tag = value
            .get("agent_type")
            .and_then(Value::as_str)
            .map(str::to_owned);

        match tag.as_deref().and_then(DocumentType::from_tag) {
            Some(DocumentType::Email) => serde_json::from_value(value).map(Self::Email),
            Some(DocumentType::Json) => serde_json::from_value(value).map(Self::Json),
            Some(DocumentType::Pdf) => serde_json::from_value(value).map(Self::Pdf),
            None => Ok(Self::Unknown { agent_type: tag }),
        }
    }

    /// The `agent_type` tag as the backend sent it.
    #[must_use]
    pub fn agent_type(&self) -> Option<&str> {
        match self {
            Self::Email(_) => Some(DocumentType::Email.tag()),
            Self::Json(_) => Some(DocumentType::Json.tag()),
            Self::Pdf(_) => Some(DocumentType::Pdf.tag()),
            Self::Unknown { agent_type } => agent_type.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for AgentResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailResult {
    #[serde(deserialize_with = "lenient")]
    pub extracted_fields: Option<EmailFields>,
    #[serde(deserialize_with = "lenient")]
    pub tone_analysis: Option<ToneAnalysis>,
    #[serde(deserialize_with = "lenient")]
    pub urgency_level: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub recommended_action: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailFields {
    #[serde(deserialize_with = "lenient")]
    pub sender: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub recipient: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub subject: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub issue_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub key_points: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub deadline_mentioned: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneAnalysis {
    #[serde(deserialize_with = "lenient")]
    pub tone: Option<String>,
    /// Sentiment in `[0, 1]`, higher is more positive.
    #[serde(deserialize_with = "lenient")]
    pub sentiment_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub reasoning: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonResult {
    #[serde(deserialize_with = "lenient")]
    pub json_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub schema_validation: Option<SchemaValidation>,
    #[serde(deserialize_with = "lenient")]
    pub risk_level: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub anomalies: Vec<Finding>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaValidation {
    #[serde(deserialize_with = "lenient")]
    pub is_valid: bool,
    #[serde(deserialize_with = "lenient")]
    pub missing_fields: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub type_errors: Vec<String>,
}

/// An anomaly (JSON agent) or flag (PDF agent).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Finding {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub severity: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfResult {
    #[serde(deserialize_with = "lenient")]
    pub document_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text_length: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub extracted_data: Option<PdfExtract>,
    #[serde(deserialize_with = "lenient")]
    pub flags: Vec<Finding>,
    #[serde(deserialize_with = "lenient")]
    pub compliance_flags: Vec<ComplianceFlag>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfExtract {
    #[serde(deserialize_with = "lenient")]
    pub total_amount: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceFlag {
    #[serde(deserialize_with = "lenient")]
    pub regulation: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub keyword: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Aggregate of the downstream actions the backend triggered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionOutcome {
    #[serde(deserialize_with = "lenient")]
    pub total_actions: u64,
    #[serde(deserialize_with = "lenient")]
    pub successful_actions: u64,
    #[serde(deserialize_with = "lenient")]
    pub failed_actions: u64,
    #[serde(deserialize_with = "lenient")]
    pub actions_triggered: Vec<ActionRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRecord {
    #[serde(deserialize_with = "lenient")]
    pub action_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub success: bool,
    pub response: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub error: Option<String>,
}

impl ActionRecord {
    /// Display detail: the response message, else the error, else a placeholder.
    #[must_use]
    pub fn detail(&self) -> &str {
        let message = self
            .response
            .as_ref()
            .and_then(|response| response.get("message"))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty());

        message
            .or_else(|| self.error.as_deref().filter(|error| !error.is_empty()))
            .unwrap_or("No details")
    }
}

// =============================================================================
// PROCESS RESPONSE
// =============================================================================

/// Body of `POST /process`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProcessResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    pub trace_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub classification: Option<Classification>,
    pub agent_result: AgentResult,
    #[serde(deserialize_with = "lenient")]
    pub actions_triggered: Option<ActionOutcome>,
    pub error: Option<String>,
}

/// A successful processing run, ready for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcessingResult {
    pub trace_id: String,
    pub classification: Classification,
    pub agent_result: AgentResult,
    pub actions: ActionOutcome,
}

impl ProcessResponse {
    /// Split the envelope into a result or the backend-reported failure.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Application` when `success` is false, carrying
    /// the backend's `error` text (or a generic message).
    pub fn into_result(self) -> Result<ProcessingResult, ConsoleError> {
        if !self.success {
            return Err(application_error(self.error, "Processing failed"));
        }
        Ok(ProcessingResult {
            trace_id: self.trace_id.unwrap_or_default(),
            classification: self.classification.unwrap_or_default(),
            agent_result: self.agent_result,
            actions: self.actions_triggered.unwrap_or_default(),
        })
    }
}

// =============================================================================
// TRACES
// =============================================================================

/// Body of `GET /memory/traces`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TracesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub traces: Vec<Trace>,
    pub error: Option<String>,
}

impl TracesResponse {
    /// # Errors
    ///
    /// Returns `ConsoleError::Application` when `success` is false.
    pub fn into_traces(self) -> Result<Vec<Trace>, ConsoleError> {
        if !self.success {
            return Err(application_error(self.error, "Failed to load traces"));
        }
        Ok(self.traces)
    }
}

/// Body of `GET /memory/trace/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TraceResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    pub trace: Option<Trace>,
    pub error: Option<String>,
}

impl TraceResponse {
    /// # Errors
    ///
    /// Returns `ConsoleError::Application` when `success` is false or the
    /// trace is absent.
    pub fn into_trace(self) -> Result<Trace, ConsoleError> {
        match (self.success, self.trace) {
            (true, Some(trace)) => Ok(trace),
            _ => Err(application_error(self.error, "Failed to load trace details")),
        }
    }
}

/// A stored record of one past processing run.
///
/// The three sub-objects stay raw: their shape differs between the list and
/// detail endpoints, and the detail view dumps them verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trace {
    #[serde(deserialize_with = "null_as_default")]
    pub trace_id: String,
    #[serde(deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    /// Seconds the backend spent on the run.
    #[serde(deserialize_with = "lenient")]
    pub total_processing_time: Option<f64>,
    pub classification: Value,
    pub agent_result: Value,
    pub action_result: Value,
}

/// Typed projection of a trace for the history list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceSummary {
    pub trace_id: String,
    pub timestamp: Option<String>,
    pub status: Option<String>,
    /// Seconds.
    pub processing_time: Option<f64>,
    pub classification: Classification,
    pub agent_type: Option<String>,
    pub action_total: usize,
    pub success_count: u64,
    pub failure_count: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TraceAgent {
    agent_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TraceActions {
    #[serde(deserialize_with = "null_as_default")]
    actions_triggered: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    success_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    failure_count: u64,
}

impl Trace {
    /// Project the raw sub-objects into the fields the history list shows.
    /// Malformed sub-objects degrade to defaults.
    #[must_use]
    pub fn summary(&self) -> TraceSummary {
        let classification = project::<Classification>(&self.classification);
        let agent = project::<TraceAgent>(&self.agent_result);
        let actions = project::<TraceActions>(&self.action_result);

        TraceSummary {
            trace_id: self.trace_id.clone(),
            timestamp: self.timestamp.clone(),
            status: self.status.clone(),
            processing_time: self.total_processing_time,
            classification,
            agent_type: agent.agent_type,
            action_total: actions.actions_triggered.len(),
            success_count: actions.success_count,
            failure_count: actions.failure_count,
        }
    }
}

fn project<T>(value: &Value) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    if value.is_null() {
        return T::default();
    }
    serde_json::from_value(value.clone()).unwrap_or_default()
}

fn application_error(error: Option<String>, fallback: &str) -> ConsoleError {
    let message = error
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    ConsoleError::Application(message)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode `T`, falling back to `T::default()` when the value is `null` or of
/// the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
