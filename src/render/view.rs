//! View-model projection.
//!
//! DESIGN
//! ======
//! Every display decision (placeholder text, percentages, badge classes,
//! number and date formatting) is made here, in plain Rust, so templates only
//! place values. Nothing in this module produces markup; escaping happens at
//! template interpolation.

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use super::badge::{self, Badge};
use crate::input::InputForm;
use crate::types::{
    ActionOutcome, AgentResult, Classification, ComplianceFlag, DocumentType, EmailResult, Finding,
    JsonResult, PdfResult, Trace, TraceSummary,
};

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN: &str = "Unknown";
pub const NONE: &str = "None";

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
        .to_owned()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_owned)
}

fn non_empty_items(items: &[String]) -> Vec<String> {
    items.iter().filter(|item| !item.trim().is_empty()).cloned().collect()
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassificationView {
    pub format: Badge,
    pub intent: Badge,
    pub confidence: String,
    pub content_preview: String,
}

#[must_use]
pub fn classification_view(classification: &Classification) -> ClassificationView {
    ClassificationView {
        format: badge::format_badge(classification.format.as_deref()),
        intent: badge::intent_badge(classification.intent.as_deref()),
        confidence: confidence_percent(classification.confidence_score),
        content_preview: or_placeholder(classification.content_preview.as_deref(), NOT_AVAILABLE),
    }
}

/// Confidence as a percentage with one decimal place (`0.873` → `87.3%`).
#[must_use]
pub fn confidence_percent(score: Option<f64>) -> String {
    match score {
        Some(score) if score.is_finite() => format!("{:.1}%", score * 100.0),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

// =============================================================================
// AGENT RESULTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FindingView {
    pub kind: String,
    pub description: String,
    pub severity: Option<Badge>,
    /// Matched term, compliance flags only.
    pub keyword: Option<String>,
}

impl From<&Finding> for FindingView {
    fn from(finding: &Finding) -> Self {
        Self {
            kind: or_placeholder(finding.kind.as_deref(), UNKNOWN),
            description: or_placeholder(finding.description.as_deref(), "No description"),
            severity: severity_badge(finding.severity.as_deref()),
            keyword: None,
        }
    }
}

impl From<&ComplianceFlag> for FindingView {
    fn from(flag: &ComplianceFlag) -> Self {
        Self {
            kind: or_placeholder(flag.regulation.as_deref(), UNKNOWN),
            description: or_placeholder(flag.description.as_deref(), "No description"),
            severity: None,
            keyword: non_empty(flag.keyword.as_deref()),
        }
    }
}

fn severity_badge(severity: Option<&str>) -> Option<Badge> {
    non_empty(severity).map(|level| badge::level_badge(Some(level.as_str())))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmailView {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub issue_type: String,
    pub deadline: String,
    pub key_points: Vec<String>,
    pub tone: Badge,
    pub sentiment: String,
    pub tone_reasoning: Option<String>,
    pub urgency: Badge,
    pub recommended_action: String,
}

impl From<&EmailResult> for EmailView {
    fn from(result: &EmailResult) -> Self {
        let fields = result.extracted_fields.as_ref();
        let tone = result.tone_analysis.as_ref();
        Self {
            sender: or_placeholder(fields.and_then(|f| f.sender.as_deref()), NOT_AVAILABLE),
            recipient: or_placeholder(fields.and_then(|f| f.recipient.as_deref()), NOT_AVAILABLE),
            subject: or_placeholder(fields.and_then(|f| f.subject.as_deref()), NOT_AVAILABLE),
            issue_type: or_placeholder(fields.and_then(|f| f.issue_type.as_deref()), NOT_AVAILABLE),
            deadline: or_placeholder(fields.and_then(|f| f.deadline_mentioned.as_deref()), NONE),
            key_points: fields.map(|f| non_empty_items(&f.key_points)).unwrap_or_default(),
            tone: badge::tone_badge(tone.and_then(|t| t.tone.as_deref())),
            sentiment: score(tone.and_then(|t| t.sentiment_score)),
            tone_reasoning: non_empty(tone.and_then(|t| t.reasoning.as_deref())),
            urgency: badge::level_badge(result.urgency_level.as_deref()),
            recommended_action: or_placeholder(result.recommended_action.as_deref(), NONE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JsonView {
    pub json_type: String,
    pub schema_valid: bool,
    pub missing_fields: Vec<String>,
    pub type_errors: Vec<String>,
    pub risk: Badge,
    pub anomalies: Vec<FindingView>,
}

impl From<&JsonResult> for JsonView {
    fn from(result: &JsonResult) -> Self {
        let validation = result.schema_validation.as_ref();
        Self {
            json_type: or_placeholder(result.json_type.as_deref(), UNKNOWN),
            schema_valid: validation.is_some_and(|v| v.is_valid),
            missing_fields: validation
                .map(|v| non_empty_items(&v.missing_fields))
                .unwrap_or_default(),
            type_errors: validation
                .map(|v| non_empty_items(&v.type_errors))
                .unwrap_or_default(),
            risk: badge::level_badge(result.risk_level.as_deref()),
            anomalies: result.anomalies.iter().map(FindingView::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PdfView {
    pub document_type: String,
    pub text_length: String,
    /// Only present for a non-zero extracted total.
    pub total_amount: Option<String>,
    pub flags: Vec<FindingView>,
    pub compliance_flags: Vec<FindingView>,
}

impl From<&PdfResult> for PdfView {
    fn from(result: &PdfResult) -> Self {
        let total_amount = result
            .extracted_data
            .as_ref()
            .and_then(|data| data.total_amount)
            .filter(|amount| amount.is_finite() && *amount != 0.0)
            .map(format_amount);

        Self {
            document_type: or_placeholder(result.document_type.as_deref(), UNKNOWN),
            text_length: result
                .text_length
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |len| len.to_string()),
            total_amount,
            flags: result.flags.iter().map(FindingView::from).collect(),
            compliance_flags: result.compliance_flags.iter().map(FindingView::from).collect(),
        }
    }
}

/// Agent-specific section body, one variant per agent type.
#[derive(Clone, Debug, PartialEq)]
pub enum AgentBody {
    Email(EmailView),
    Json(JsonView),
    Pdf(PdfView),
    /// Unrecognized agent type: the section renders with an empty body.
    Empty,
}

impl AgentBody {
    #[must_use]
    pub fn from_result(result: &AgentResult) -> Self {
        match result {
            AgentResult::Email(email) => Self::Email(email.into()),
            AgentResult::Json(json) => Self::Json(json.into()),
            AgentResult::Pdf(pdf) => Self::Pdf(pdf.into()),
            AgentResult::Unknown { .. } => Self::Empty,
        }
    }
}

/// Heading label for the agent section.
#[must_use]
pub fn agent_label(result: &AgentResult) -> String {
    or_placeholder(result.agent_type(), UNKNOWN)
}

// =============================================================================
// ACTIONS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionView {
    pub action_type: String,
    pub success: bool,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionsView {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    pub actions: Vec<ActionView>,
}

impl From<&ActionOutcome> for ActionsView {
    fn from(outcome: &ActionOutcome) -> Self {
        Self {
            total: outcome.total_actions,
            successful: outcome.successful_actions,
            failed: outcome.failed_actions,
            actions: outcome
                .actions_triggered
                .iter()
                .map(|action| ActionView {
                    action_type: or_placeholder(action.action_type.as_deref(), "unknown"),
                    success: action.success,
                    detail: action.detail().to_owned(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// HISTORY
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntryView {
    pub trace_id: String,
    pub href: String,
    pub format: Badge,
    pub intent: Badge,
    pub timestamp: String,
    pub status: String,
    pub status_class: String,
    pub agent_type: String,
    pub content_preview: String,
    pub processing_time: Option<String>,
    pub action_total: usize,
    pub success_count: u64,
    pub failure_count: u64,
}

impl From<&TraceSummary> for HistoryEntryView {
    fn from(summary: &TraceSummary) -> Self {
        let status = or_placeholder(summary.status.as_deref(), UNKNOWN);
        Self {
            trace_id: summary.trace_id.clone(),
            href: trace_href(&summary.trace_id),
            format: badge::format_badge(summary.classification.format.as_deref()),
            intent: badge::intent_badge(summary.classification.intent.as_deref()),
            timestamp: format_timestamp(summary.timestamp.as_deref()),
            status_class: format!("status-{}", css_slug(&status)),
            status,
            agent_type: or_placeholder(summary.agent_type.as_deref(), UNKNOWN),
            content_preview: or_placeholder(
                summary.classification.content_preview.as_deref(),
                NOT_AVAILABLE,
            ),
            processing_time: summary
                .processing_time
                .filter(|secs| secs.is_finite() && *secs > 0.0)
                .map(|secs| format!("{secs:.2}s")),
            action_total: summary.action_total,
            success_count: summary.success_count,
            failure_count: summary.failure_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraceDetailView {
    pub trace_id: String,
    pub classification: String,
    pub agent_result: String,
    pub action_result: String,
}

impl From<&Trace> for TraceDetailView {
    fn from(trace: &Trace) -> Self {
        Self {
            trace_id: trace.trace_id.clone(),
            classification: pretty_json(&trace.classification),
            agent_result: pretty_json(&trace.agent_result),
            action_result: pretty_json(&trace.action_result),
        }
    }
}

// =============================================================================
// FORMATTING
// =============================================================================

/// Console link to one trace, the id encoded as a single path segment.
#[must_use]
pub fn trace_href(trace_id: &str) -> String {
    let Ok(mut url) = Url::parse("http://console.local/") else {
        return String::from("/traces");
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().push("traces").push(trace_id);
    }
    url.path().to_owned()
}

/// Two-decimal score (`0.8` → `0.80`), `N/A` when absent.
#[must_use]
pub fn score(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{value:.2}"),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

/// Two-space indented dump, unchanged otherwise.
#[must_use]
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Money-style amount: thousands separators, at most two decimals, trailing
/// zero decimals dropped (`15000.0` → `15,000`, `1234.5` → `1,234.5`).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_amount(amount: f64) -> String {
    let cents_total = (amount.abs() * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents_total > 0 { "-" } else { "" };
    match cents {
        0 => format!("{sign}{grouped}"),
        c if c % 10 == 0 => format!("{sign}{grouped}.{}", c / 10),
        c => format!("{sign}{grouped}.{c:02}"),
    }
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`. Values with an
/// offset are shown in that offset; unparsable values pass through verbatim.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return UNKNOWN.to_owned();
    };
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DISPLAY).to_string();
    }
    raw.to_owned()
}

fn css_slug(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

// =============================================================================
// PAGE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Input controls as they should be redrawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub text: String,
    pub options: Vec<SelectOption>,
}

impl From<&InputForm> for FormView {
    fn from(form: &InputForm) -> Self {
        let current = form.input_type();
        let mut options = vec![SelectOption {
            value: "",
            label: "Auto-detect",
            selected: current.is_none(),
        }];
        options.extend(DocumentType::ALL.into_iter().map(|kind| SelectOption {
            value: kind.tag(),
            label: kind.tag(),
            selected: current == Some(kind),
        }));
        Self { text: form.text().to_owned(), options }
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
